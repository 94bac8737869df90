//! Letter normalization and word-reveal checks
//!
//! Players type `Ё` and `Й` interchangeably with `Е` and `И`, so both are
//! folded onto their plain counterparts before any comparison.

use crate::error::{GameError, GameResult};
use std::collections::BTreeSet;

/// Uppercase a letter and fold look-alikes onto their canonical form
pub fn normalize_letter(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    // Multi-char expansions (e.g. ß -> SS) keep the original character
    let ch = match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => ch,
    };

    match ch {
        'Ё' => 'Е',
        'Й' => 'И',
        other => other,
    }
}

/// Normalize every character of a word, leaving spaces and punctuation alone
pub fn normalize_word(word: &str) -> String {
    word.chars().map(normalize_letter).collect()
}

/// Characters that are shown from the start and never need guessing
pub fn is_always_revealed(ch: char) -> bool {
    ch == ' ' || ch == '-'
}

/// True once every guessable character of the word is in `revealed`.
///
/// `revealed` must already be normalized.
pub fn is_word_fully_revealed(word: &str, revealed: &BTreeSet<char>) -> bool {
    word.chars()
        .map(normalize_letter)
        .all(|ch| is_always_revealed(ch) || revealed.contains(&ch))
}

/// Count how often a (normalized) letter appears in the normalized word
pub fn count_occurrences(word: &str, letter: char) -> usize {
    let letter = normalize_letter(letter);
    word.chars()
        .map(normalize_letter)
        .filter(|&ch| ch == letter)
        .count()
}

/// Distinct guessable letters of the word
pub fn distinct_letters(word: &str) -> BTreeSet<char> {
    word.chars()
        .map(normalize_letter)
        .filter(|&ch| !is_always_revealed(ch))
        .collect()
}

/// Distinct letters still hidden from the board
pub fn hidden_letters(word: &str, revealed: &BTreeSet<char>) -> BTreeSet<char> {
    distinct_letters(word)
        .into_iter()
        .filter(|ch| !revealed.contains(ch))
        .collect()
}

/// Parse operator input into a single normalized letter
pub fn parse_letter(input: &str) -> GameResult<char> {
    let mut chars = input.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_alphabetic() => Ok(normalize_letter(ch)),
        _ => Err(GameError::InvalidLetter(input.to_string())),
    }
}
