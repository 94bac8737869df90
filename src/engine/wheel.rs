//! The wheel: a fixed table of sectors and a uniform draw over it.

use crate::error::{GameError, GameResult};
use crate::types::SpinOutcome;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Gifts on the standard wheel. Each one can be won once per round.
pub const GIFT_CATALOG: &[&str] = &[
    "13-й мандарин за особые заслуги 🍊",
    "Кружка «я чудом дожил до этого Нового года» ☕",
    "Сертификат на одно объятие от Деда Мороза 🎅",
    "VIP-доступ к салату Оливье 🥗",
];

const POINT_SECTORS: &[u32] = &[100, 200, 300, 400, 500, 600, 800, 1000];

#[derive(Debug, Clone, PartialEq)]
pub struct Wheel {
    sectors: Vec<SpinOutcome>,
}

impl Wheel {
    /// Build a wheel from an explicit sector list
    pub fn new(sectors: Vec<SpinOutcome>) -> Self {
        Self { sectors }
    }

    /// The show's wheel
    pub fn standard() -> Self {
        let mut sectors: Vec<SpinOutcome> = POINT_SECTORS
            .iter()
            .map(|&value| SpinOutcome::Points(value))
            .collect();

        sectors.extend([
            SpinOutcome::Bankrupt,
            SpinOutcome::Bankrupt,
            SpinOutcome::Zero,
            SpinOutcome::OpenAnyLetter,
            SpinOutcome::DoubleNextScore,
        ]);
        sectors.extend(
            GIFT_CATALOG
                .iter()
                .map(|name| SpinOutcome::Gift(name.to_string())),
        );

        Self { sectors }
    }

    pub fn sectors(&self) -> &[SpinOutcome] {
        &self.sectors
    }

    /// Sectors that can still come up, given the gifts already won this round
    pub fn eligible(&self, excluded_gifts: &[String]) -> Vec<&SpinOutcome> {
        self.sectors
            .iter()
            .filter(|sector| match sector.gift_name() {
                Some(name) => !excluded_gifts.iter().any(|g| g == name),
                None => true,
            })
            .collect()
    }

    /// Draw one eligible sector uniformly at random
    pub fn resolve<R: Rng + ?Sized>(
        &self,
        excluded_gifts: &[String],
        rng: &mut R,
    ) -> GameResult<SpinOutcome> {
        self.eligible(excluded_gifts)
            .choose(rng)
            .map(|sector| (*sector).clone())
            .ok_or(GameError::EmptyOutcomePool)
    }
}

impl Default for Wheel {
    fn default() -> Self {
        Self::standard()
    }
}
