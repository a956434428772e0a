//! Dice supply: the `DiceSource` collaborator and the default bag.
//!
//! The controller draws `players * 2 + 1` dice at game start and at every
//! round transition. Running out of dice is a configuration error (the
//! supply was sized for fewer rounds/players than configured), never a
//! gameplay condition.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::dice::{Die, DieColor};
use super::rng::GameRng;

/// The physical dice supply ran dry mid-match.
///
/// Reaching this means the configured per-color count cannot cover
/// `total_rounds * (players * 2 + 1)` draws; it is reported as a fatal
/// match error, not as a move rejection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("dice supply exhausted: requested {requested}, only {remaining} left")]
pub struct DiceSupplyError {
    /// Dice requested by the draw.
    pub requested: usize,
    /// Dice remaining in the supply.
    pub remaining: usize,
}

/// Source of freshly rolled dice.
///
/// Implemented by [`DiceBag`] for real matches and by fixed-sequence
/// stubs in tests.
pub trait DiceSource {
    /// Draw `count` dice, in order, removing them from the supply.
    fn draw(&mut self, count: usize) -> Result<Vec<Die>, DiceSupplyError>;

    /// Dice still available to draw.
    fn remaining(&self) -> usize;
}

/// The default dice supply: a shuffled bag with a fixed count per color.
///
/// Each drawn die gets a freshly rolled face.
#[derive(Clone, Debug)]
pub struct DiceBag {
    colors: Vec<DieColor>,
    rng: GameRng,
}

impl DiceBag {
    /// Create a bag holding `per_color` dice of each of the five colors,
    /// shuffled with the given seed.
    #[must_use]
    pub fn new(per_color: usize, seed: u64) -> Self {
        assert!(per_color > 0, "Bag must hold at least one die per color");

        let mut colors = Vec::with_capacity(per_color * DieColor::ALL.len());
        for color in DieColor::ALL {
            colors.extend(std::iter::repeat(color).take(per_color));
        }

        let mut rng = GameRng::new(seed);
        rng.shuffle(&mut colors);

        Self { colors, rng }
    }
}

impl DiceSource for DiceBag {
    fn draw(&mut self, count: usize) -> Result<Vec<Die>, DiceSupplyError> {
        if count > self.colors.len() {
            return Err(DiceSupplyError {
                requested: count,
                remaining: self.colors.len(),
            });
        }

        let mut dice = Vec::with_capacity(count);
        for _ in 0..count {
            let color = self.colors.pop().expect("Supply size checked above");
            dice.push(Die::new(color, self.rng.roll_face()));
        }
        Ok(dice)
    }

    fn remaining(&self) -> usize {
        self.colors.len()
    }
}
