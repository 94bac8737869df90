//! Host commentary shown after a guess. Purely cosmetic.

use rand::seq::IndexedRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    LetterHit,
    LetterMiss,
    LetterRepeat,
    WordHit,
    WordMiss,
}

const LETTER_HIT: &[&str] = &[
    "Гениально! Прям как Эйнштейн, только в новогодней шапке! 🎓",
    "Вау! Ты видишь буквы насквозь! 👀",
    "Снегурочка аплодирует стоя! 👏",
    "Дед Мороз одобряет! 🎅",
    "Это было... неожиданно умно! 🧠",
    "Ёлочные игрушки засияли от радости! ✨",
];

const LETTER_MISS: &[&str] = &[
    "Ой… это было смело, но нет 😅",
    "Буква ушла за шампанским, её нет в слове 🍾",
    "Дед Мороз сделал фейспалм 🤦",
    "Эта буква застряла в пробке на МКАД 🚗",
    "Буква решила отпраздновать Новый год в другом слове 🎉",
    "Мимо! Но мандаринка за старание 🍊",
];

const LETTER_REPEAT: &[&str] = &[
    "Эй, эта буква уже была! Память как у золотой рыбки? 🐟",
    "Дежавю? Эту букву уже называли! 🔄",
    "Снегурочка записала: эту букву уже проверяли! 📝",
    "Повтор! Дед Мороз начинает нервничать! 😤",
];

const WORD_HIT: &[&str] = &[
    "Абсолютно верно! Слово целиком! 🏆",
    "Телепатия высшего уровня! 🔮",
    "Дед Мороз снимает шапку перед вами! 🎩",
];

const WORD_MISS: &[&str] = &[
    "Смело, но неверно. Покидаем барабан 🙈",
    "Увы, это было другое слово ❄️",
    "Снегурочка вытирает слезу... 😢",
];

fn pool(kind: CommentKind) -> &'static [&'static str] {
    match kind {
        CommentKind::LetterHit => LETTER_HIT,
        CommentKind::LetterMiss => LETTER_MISS,
        CommentKind::LetterRepeat => LETTER_REPEAT,
        CommentKind::WordHit => WORD_HIT,
        CommentKind::WordMiss => WORD_MISS,
    }
}

/// Pick a random comment for the given kind
pub fn pick<R: Rng + ?Sized>(kind: CommentKind, rng: &mut R) -> String {
    pool(kind)
        .choose(rng)
        .map(|s| s.to_string())
        .unwrap_or_default()
}
