//! Effect steps: the units a toolcard sequence is built from.
//!
//! A step is either **implicit** (a deterministic mutation the controller
//! performs on entry, then continues) or an **input** step (the controller
//! parks in an effect-input state until the matching move arrives). The
//! implicit/input split is what bounds the controller's transition
//! trampoline: a chain can only run as long as the card's declared step
//! list.

use serde::{Deserialize, Serialize};

/// One step of a toolcard effect sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectStep {
    /// Implicit: flip the drafted die to its opposite face.
    FlipDrafted,

    /// Implicit: swap the drafted die with the die previously chosen from
    /// the track; the drafted die takes the chosen die's slot.
    SwapDraftedWithTrack,

    /// Input: choose a die from a track slot.
    ChooseFromTrack,

    /// Input: nudge the drafted die's value up or down by one.
    AdjustDrafted,

    /// Input: choose a new value for the drafted die.
    ChooseValue,

    /// Input: move up to `count` placed dice to new legal cells, one
    /// move per request. The effect may be ended early.
    MoveDice { count: u8 },

    /// Input: place the drafted die under the effect's rule override.
    PlaceDrafted,
}

impl EffectStep {
    /// Whether this step executes without player input.
    #[must_use]
    pub fn is_implicit(&self) -> bool {
        matches!(
            self,
            EffectStep::FlipDrafted | EffectStep::SwapDraftedWithTrack
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_implicit_steps() {
        assert!(EffectStep::FlipDrafted.is_implicit());
        assert!(EffectStep::SwapDraftedWithTrack.is_implicit());
    }

    #[test]
    fn test_input_steps() {
        assert!(!EffectStep::ChooseFromTrack.is_implicit());
        assert!(!EffectStep::AdjustDrafted.is_implicit());
        assert!(!EffectStep::ChooseValue.is_implicit());
        assert!(!EffectStep::MoveDice { count: 2 }.is_implicit());
        assert!(!EffectStep::PlaceDrafted.is_implicit());
    }

    #[test]
    fn test_serialization() {
        let step = EffectStep::MoveDice { count: 2 };
        let json = serde_json::to_string(&step).unwrap();
        let deserialized: EffectStep = serde_json::from_str(&json).unwrap();
        assert_eq!(step, deserialized);
    }
}
