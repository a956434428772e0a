//! The move-handling error taxonomy.
//!
//! Rejections are ordinary, client-facing results: the player is told why
//! and may retry; nothing mutated. Match errors are the programming-bug
//! class: they abort the match and are logged as defects, never shown as
//! gameplay messages.

use thiserror::Error;

use crate::core::DiceSupplyError;
use crate::rules::PlacementViolation;
use crate::toolcards::ToolCardId;

/// A refused move, with the violated precondition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("not your turn")]
    NotYourTurn,

    #[error("can't do that in the middle of a toolcard effect")]
    MidEffect,

    #[error("no die has been drafted")]
    NoDieDrafted,

    #[error("you can only draft and place")]
    DraftAndPlaceOnly,

    #[error("you have to place the drafted die")]
    MustPlaceDrafted,

    #[error("you have already drafted and placed; only a toolcard remains")]
    ToolCardOnly,

    #[error("a toolcard was already used this turn")]
    ToolCardAlreadyUsed,

    #[error("drafting has already happened this turn")]
    DraftAlreadyOccurred,

    #[error("unknown toolcard {card}")]
    UnknownToolCard { card: ToolCardId },

    #[error("no die at draft pool index {index}")]
    InvalidDraftIndex { index: usize },

    #[error("no die at track slot {slot}, index {die_index}")]
    InvalidTrackIndex { slot: usize, die_index: usize },

    #[error("coordinates ({row}, {col}) are outside the grid")]
    OutOfBounds { row: usize, col: usize },

    #[error("no die at ({row}, {col}) to move")]
    NoDieToMove { row: usize, col: usize },

    #[error(transparent)]
    Placement(#[from] PlacementViolation),

    #[error("the drafted die cannot take that value")]
    ValueOutOfRange,

    #[error("no effect is active")]
    NoActiveEffect,

    #[error("the game is over")]
    GameOver,

    #[error("session is inactive")]
    SessionInactive,

    #[error("the match was aborted")]
    MatchAborted,
}

/// A fatal invariant violation. The match aborts cleanly; no partial
/// state survives to the next move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MatchError {
    /// A freshly created round reported exhaustion, which is impossible
    /// by construction.
    #[error("round exhausted twice in a row; a fresh round cannot be empty")]
    DoubleRoundExhaustion,

    #[error(transparent)]
    DiceSupply(#[from] DiceSupplyError),
}

/// Either face of a failed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveFailure {
    #[error(transparent)]
    Rejected(#[from] MoveRejection),

    #[error("fatal: {0}")]
    Fatal(#[from] MatchError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        assert_eq!(format!("{}", MoveRejection::NotYourTurn), "not your turn");
        assert_eq!(
            format!("{}", MoveRejection::MidEffect),
            "can't do that in the middle of a toolcard effect"
        );
        assert_eq!(
            format!("{}", MoveRejection::MustPlaceDrafted),
            "you have to place the drafted die"
        );
    }

    #[test]
    fn test_placement_violation_passes_through() {
        let rejection = MoveRejection::from(PlacementViolation::NotOnBorder);
        assert_eq!(
            format!("{rejection}"),
            "the first die must be placed on a border cell"
        );
    }

    #[test]
    fn test_failure_faces() {
        let rejected = MoveFailure::from(MoveRejection::GameOver);
        assert!(matches!(rejected, MoveFailure::Rejected(_)));

        let fatal = MoveFailure::from(MatchError::DoubleRoundExhaustion);
        assert!(matches!(fatal, MoveFailure::Fatal(_)));
        assert!(format!("{fatal}").starts_with("fatal:"));
    }
}
