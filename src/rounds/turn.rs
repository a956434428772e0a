//! Per-turn bookkeeping.

use serde::{Deserialize, Serialize};

use crate::core::{Die, PlayerId};
use crate::toolcards::ToolCardId;

/// A die taken from the track during an effect, remembered with its slot
/// so the swap step can deposit the drafted die back into the same slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackChoice {
    /// The chosen die.
    pub die: Die,
    /// The slot it came from.
    pub slot: usize,
}

/// One player's turn within a round.
///
/// Holds at most one drafted die pending placement, the optional track
/// choice made mid-effect, whether drafting already happened, and the
/// toolcard used this turn (at most one).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    player: PlayerId,
    drafted: Option<Die>,
    has_drafted: bool,
    track_choice: Option<TrackChoice>,
    used_toolcard: Option<ToolCardId>,
}

impl Turn {
    /// Start a fresh turn for `player`.
    #[must_use]
    pub fn new(player: PlayerId) -> Self {
        Self {
            player,
            drafted: None,
            has_drafted: false,
            track_choice: None,
            used_toolcard: None,
        }
    }

    /// The acting player.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Whether this turn's draft already happened. Stays true after the
    /// drafted die is placed.
    #[must_use]
    pub fn has_drafted(&self) -> bool {
        self.has_drafted
    }

    /// The drafted die pending placement, if any.
    #[must_use]
    pub fn drafted(&self) -> Option<&Die> {
        self.drafted.as_ref()
    }

    /// Mutable access to the drafted die, for effect operations.
    pub fn drafted_mut(&mut self) -> Option<&mut Die> {
        self.drafted.as_mut()
    }

    /// Record the drafted die.
    pub fn set_drafted(&mut self, die: Die) {
        self.drafted = Some(die);
        self.has_drafted = true;
    }

    /// Remove and return the drafted die (for placement or swap).
    pub fn take_drafted(&mut self) -> Option<Die> {
        self.drafted.take()
    }

    /// The track choice made mid-effect, if any.
    #[must_use]
    pub fn track_choice(&self) -> Option<&TrackChoice> {
        self.track_choice.as_ref()
    }

    /// Record a die chosen from the track.
    pub fn set_track_choice(&mut self, die: Die, slot: usize) {
        self.track_choice = Some(TrackChoice { die, slot });
    }

    /// Remove and return the track choice.
    pub fn take_track_choice(&mut self) -> Option<TrackChoice> {
        self.track_choice.take()
    }

    /// The toolcard used this turn, if any.
    #[must_use]
    pub fn used_toolcard(&self) -> Option<ToolCardId> {
        self.used_toolcard
    }

    /// Record the toolcard activation. At most one per turn; the
    /// controller rejects a second activation before calling this.
    pub fn record_toolcard(&mut self, card: ToolCardId) {
        assert!(
            self.used_toolcard.is_none(),
            "A turn allows only one toolcard"
        );
        self.used_toolcard = Some(card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DieColor;

    #[test]
    fn test_fresh_turn() {
        let turn = Turn::new(PlayerId::new(1));
        assert_eq!(turn.player(), PlayerId::new(1));
        assert!(!turn.has_drafted());
        assert!(turn.drafted().is_none());
        assert!(turn.track_choice().is_none());
        assert!(turn.used_toolcard().is_none());
    }

    #[test]
    fn test_draft_flag_survives_placement() {
        let mut turn = Turn::new(PlayerId::new(0));
        turn.set_drafted(Die::new(DieColor::Red, 4));
        assert!(turn.has_drafted());

        let die = turn.take_drafted().unwrap();
        assert_eq!(die.value(), 4);
        assert!(turn.drafted().is_none());
        assert!(turn.has_drafted());
    }

    #[test]
    fn test_track_choice_round_trip() {
        let mut turn = Turn::new(PlayerId::new(0));
        turn.set_track_choice(Die::new(DieColor::Blue, 2), 3);

        let choice = turn.take_track_choice().unwrap();
        assert_eq!(choice.slot, 3);
        assert_eq!(choice.die.value(), 2);
        assert!(turn.track_choice().is_none());
    }

    #[test]
    #[should_panic(expected = "only one toolcard")]
    fn test_double_toolcard_panics() {
        let mut turn = Turn::new(PlayerId::new(0));
        turn.record_toolcard(crate::toolcards::ToolCardId::new(0));
        turn.record_toolcard(crate::toolcards::ToolCardId::new(1));
    }
}
