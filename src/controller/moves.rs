//! The uniform move surface.
//!
//! Every inbound operation is one tagged `PlayerMove`; the controller
//! dispatches it against the current state without per-state type
//! inspection. `MoveKind` is the parameter-free discriminant used for the
//! recomputed permitted-operation sets, and `MoveRecord` is the history
//! entry kept for observers and replay.

use serde::{Deserialize, Serialize};

use crate::core::{Die, PlayerId};
use crate::scoring::MatchOutcome;
use crate::toolcards::ToolCardId;

/// A tagged player operation with its parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerMove {
    /// Take the die at `die_index` from the draft pool.
    DraftFromPool { die_index: usize },

    /// Place the drafted die at (row, col).
    PlaceDrafted { row: usize, col: usize },

    /// Activate a toolcard effect.
    UseToolCard { card: ToolCardId },

    /// Mid-effect: take a die from a track slot.
    ChooseFromTrack { slot: usize, die_index: usize },

    /// Mid-effect: move a placed die to a new cell.
    MoveDie {
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
    },

    /// Mid-effect: raise the drafted die's value by one.
    IncrementDrafted,

    /// Mid-effect: lower the drafted die's value by one.
    DecrementDrafted,

    /// Mid-effect: set the drafted die to a chosen value.
    ChooseValue { value: u8 },

    /// End the active effect early.
    EndEffect,

    /// End the turn.
    EndTurn,
}

impl PlayerMove {
    /// The parameter-free discriminant.
    #[must_use]
    pub fn kind(&self) -> MoveKind {
        match self {
            PlayerMove::DraftFromPool { .. } => MoveKind::Draft,
            PlayerMove::PlaceDrafted { .. } => MoveKind::Place,
            PlayerMove::UseToolCard { .. } => MoveKind::UseToolCard,
            PlayerMove::ChooseFromTrack { .. } => MoveKind::ChooseFromTrack,
            PlayerMove::MoveDie { .. } => MoveKind::MoveDie,
            PlayerMove::IncrementDrafted => MoveKind::IncrementDrafted,
            PlayerMove::DecrementDrafted => MoveKind::DecrementDrafted,
            PlayerMove::ChooseValue { .. } => MoveKind::ChooseValue,
            PlayerMove::EndEffect => MoveKind::EndEffect,
            PlayerMove::EndTurn => MoveKind::EndTurn,
        }
    }
}

/// Discriminants of [`PlayerMove`], for permitted-operation sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    Draft,
    Place,
    UseToolCard,
    ChooseFromTrack,
    MoveDie,
    IncrementDrafted,
    DecrementDrafted,
    ChooseValue,
    EndEffect,
    EndTurn,
}

/// A recorded, accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who moved.
    pub player: PlayerId,

    /// The move as submitted.
    pub mv: PlayerMove,

    /// 1-based round number at submission.
    pub round: usize,

    /// 1-based turn number within the round at submission.
    pub turn: usize,
}

/// What an accepted move did.
///
/// One move can cascade (ending a turn may end the round or the game);
/// the outcome reports the furthest consequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A die left the pool and awaits placement.
    Drafted { die: Die },

    /// The drafted die landed on the grid.
    Placed { die: Die, row: usize, col: usize },

    /// An effect was activated (and any leading implicit steps ran).
    EffectActivated { card: ToolCardId },

    /// A die was taken from the track.
    TrackChosen { die: Die, slot: usize },

    /// A placed die moved to a new cell.
    DieMoved {
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
    },

    /// The drafted die's value changed.
    ValueChanged { die: Die },

    /// The active effect finished or was ended early.
    EffectEnded,

    /// The turn passed to the next player in the same round.
    TurnEnded { next_player: PlayerId },

    /// A fresh round began; `next_player` opens it.
    RoundStarted { round: usize, next_player: PlayerId },

    /// The last round exhausted and the ranker produced final scores.
    GameEnded { outcome: MatchOutcome },
}
