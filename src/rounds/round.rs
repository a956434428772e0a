//! One round: serpentine turn order over the seated players.

use serde::{Deserialize, Serialize};

use super::pool::DraftPool;
use super::turn::Turn;
use crate::core::{Die, PlayerId};

/// Result of asking a round for its next turn.
///
/// Exhaustion is an ordinary value the advancement algorithm consumes,
/// not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnAdvance {
    /// A new turn is now current.
    Advanced,
    /// The round has no more turns.
    Exhausted,
}

/// A round: `players * 2` turns in serpentine order, plus the draft pool.
///
/// A freshly created round has no current turn; the first `advance` call
/// starts turn one. Exactly one turn is current from then on until
/// exhaustion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    index: usize,
    order: Vec<PlayerId>,
    next_turn: usize,
    current: Option<Turn>,
    pool: DraftPool,
}

impl Round {
    /// Create round `index` (0-based) for the given seats, with freshly
    /// drawn dice.
    #[must_use]
    pub fn new(index: usize, players: &[PlayerId], dice: Vec<Die>) -> Self {
        assert!(players.len() >= 2, "A round needs at least 2 players");
        Self {
            index,
            order: Self::serpentine_order(players, index),
            next_turn: 0,
            current: None,
            pool: DraftPool::new(dice),
        }
    }

    /// The serpentine turn order for round `index`: the start seat
    /// rotates by one each round, then play runs forward and back.
    #[must_use]
    pub fn serpentine_order(players: &[PlayerId], index: usize) -> Vec<PlayerId> {
        let n = players.len();
        let mut order = Vec::with_capacity(n * 2);
        for i in 0..n {
            order.push(players[(index + i) % n]);
        }
        for i in (0..n).rev() {
            order.push(players[(index + i) % n]);
        }
        order
    }

    /// 0-based round index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based round number, for views and logs.
    #[must_use]
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// The full turn order, forward pass then reverse pass.
    #[must_use]
    pub fn order(&self) -> &[PlayerId] {
        &self.order
    }

    /// The round's draft pool.
    #[must_use]
    pub fn pool(&self) -> &DraftPool {
        &self.pool
    }

    /// Mutable access to the draft pool.
    pub fn pool_mut(&mut self) -> &mut DraftPool {
        &mut self.pool
    }

    /// Turns completed or in progress so far.
    #[must_use]
    pub fn turns_started(&self) -> usize {
        self.next_turn
    }

    /// The turn in progress. Panics if the round has not been advanced
    /// into its first turn yet.
    #[must_use]
    pub fn current_turn(&self) -> &Turn {
        self.current.as_ref().expect("No turn in progress")
    }

    /// Mutable access to the turn in progress.
    pub fn current_turn_mut(&mut self) -> &mut Turn {
        self.current.as_mut().expect("No turn in progress")
    }

    /// Move to the next turn, or report exhaustion.
    pub fn advance(&mut self) -> TurnAdvance {
        if self.next_turn < self.order.len() {
            self.current = Some(Turn::new(self.order[self.next_turn]));
            self.next_turn += 1;
            TurnAdvance::Advanced
        } else {
            TurnAdvance::Exhausted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seats(n: u8) -> Vec<PlayerId> {
        (0..n).map(PlayerId::new).collect()
    }

    #[test]
    fn test_serpentine_first_round() {
        let order = Round::serpentine_order(&seats(3), 0);
        let ids: Vec<_> = order.iter().map(|p| p.0).collect();
        assert_eq!(ids, vec![0, 1, 2, 2, 1, 0]);
    }

    #[test]
    fn test_serpentine_rotates_per_round() {
        let order = Round::serpentine_order(&seats(3), 1);
        let ids: Vec<_> = order.iter().map(|p| p.0).collect();
        assert_eq!(ids, vec![1, 2, 0, 0, 2, 1]);

        let order = Round::serpentine_order(&seats(3), 3);
        let ids: Vec<_> = order.iter().map(|p| p.0).collect();
        assert_eq!(ids, vec![0, 1, 2, 2, 1, 0]);
    }

    #[test]
    fn test_each_player_acts_twice() {
        let order = Round::serpentine_order(&seats(4), 2);
        assert_eq!(order.len(), 8);
        for seat in seats(4) {
            assert_eq!(order.iter().filter(|p| **p == seat).count(), 2);
        }
    }

    #[test]
    fn test_advance_through_round() {
        let mut round = Round::new(0, &seats(2), vec![]);

        let mut acted = Vec::new();
        while round.advance() == TurnAdvance::Advanced {
            acted.push(round.current_turn().player().0);
        }

        assert_eq!(acted, vec![0, 1, 1, 0]);
        assert_eq!(round.advance(), TurnAdvance::Exhausted);
    }

    #[test]
    #[should_panic(expected = "No turn in progress")]
    fn test_current_turn_before_start_panics() {
        let round = Round::new(0, &seats(2), vec![]);
        round.current_turn();
    }
}
