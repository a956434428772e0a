//! Controller states and the active-effect context.
//!
//! States are plain values, not objects: the controller holds exactly one
//! `TurnState` and dispatches each move against it. Implicit effect steps
//! never appear as a resting state; the transition trampoline executes
//! them on the way through, so `EffectInput` is the only state a turn can
//! pause in mid-effect.

use serde::{Deserialize, Serialize};

use crate::toolcards::ToolCardId;

/// The mutually exclusive turn phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// Awaiting the draft.
    Start,

    /// A die is drafted and awaits placement (or an effect).
    Drafted,

    /// Drafted and placed; only an effect activation remains.
    Placed,

    /// An effect is active and awaits a player choice for its current
    /// input step.
    EffectInput,
}

/// The context of an activated effect: which card, how far along its
/// step list, and how many die-moves its current step still allows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEffect {
    /// The activated card.
    pub card: ToolCardId,

    /// Index into the card's declared step list.
    pub step: usize,

    /// Moves left for a `MoveDice` step; 0 otherwise.
    pub moves_remaining: u8,
}

impl ActiveEffect {
    /// Start an effect at its first step.
    #[must_use]
    pub fn new(card: ToolCardId) -> Self {
        Self {
            card,
            step: 0,
            moves_remaining: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_effect_context() {
        let effect = ActiveEffect::new(ToolCardId::new(3));
        assert_eq!(effect.card, ToolCardId::new(3));
        assert_eq!(effect.step, 0);
        assert_eq!(effect.moves_remaining, 0);
    }

    #[test]
    fn test_state_serialization() {
        let json = serde_json::to_string(&TurnState::EffectInput).unwrap();
        let state: TurnState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, TurnState::EffectInput);
    }
}
