//! The round-scoped draft pool.

use serde::{Deserialize, Serialize};

use crate::core::Die;

/// Dice available to draft in the current round.
///
/// Filled once at round start, shrinks as dice are drafted; whatever is
/// left at round end moves to the track.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftPool {
    dice: Vec<Die>,
}

impl DraftPool {
    /// Create a pool from freshly drawn dice.
    #[must_use]
    pub fn new(dice: Vec<Die>) -> Self {
        Self { dice }
    }

    /// The dice currently available, in draft-index order.
    #[must_use]
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Number of dice left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Whether the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Remove and return the die at `index`, or None if out of range.
    pub fn take(&mut self, index: usize) -> Option<Die> {
        if index < self.dice.len() {
            Some(self.dice.remove(index))
        } else {
            None
        }
    }

    /// Return a die to the pool (an unplaced drafted die at turn end).
    pub fn put(&mut self, die: Die) {
        self.dice.push(die);
    }

    /// Empty the pool, returning the leftovers for the track.
    pub fn drain(&mut self) -> Vec<Die> {
        std::mem::take(&mut self.dice)
    }
}
