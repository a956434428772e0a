//! End-of-game ranking.
//!
//! Scoring arithmetic and tie-breaking live with an external
//! collaborator; the controller consults it exactly once, when the last
//! round exhausts, passing the players in reverse turn order and the
//! revealed objective cards.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Identifier for a public objective card. Content is opaque here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectiveId(pub u16);

impl ObjectiveId {
    /// Create a new objective ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }
}

/// The ranking collaborator.
pub trait Ranker {
    /// Compute final scores.
    ///
    /// `players` arrive in reverse turn order of the final round;
    /// `objectives` are the match's revealed objective cards.
    fn rank(
        &self,
        players: &[PlayerId],
        objectives: &[ObjectiveId],
    ) -> FxHashMap<PlayerId, i32>;
}

/// The finished match: per-player scores as the ranker produced them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Final score per player.
    pub scores: FxHashMap<PlayerId, i32>,
}

impl MatchOutcome {
    /// A player's score, if the ranker produced one.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> Option<i32> {
        self.scores.get(&player).copied()
    }
}
