//! Toolcard definitions.
//!
//! A toolcard is pure data: when it may be activated, the step sequence
//! it walks the turn through, and the rule override it installs while
//! active. The controller interprets the data; cards never hold state.

use serde::{Deserialize, Serialize};

use super::step::EffectStep;
use crate::rules::RuleOverride;

/// Identifier for a toolcard definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToolCardId(pub u16);

impl ToolCardId {
    /// Create a new toolcard ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ToolCardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ToolCard({})", self.0)
    }
}

/// When a toolcard may be activated within a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    /// Only before the turn's draft has happened.
    PreDraft,

    /// Only once a die has been drafted (and not yet at a later point
    /// where the card's steps would be meaningless).
    AfterDraft,

    /// At any point of the turn.
    Anytime,
}

/// A toolcard definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCard {
    /// Unique identifier.
    pub id: ToolCardId,

    /// Human-readable name (for rejection messages and views).
    pub name: String,

    /// Activation precondition.
    pub activation: Activation,

    /// The step sequence the effect walks through, in order.
    pub steps: Vec<EffectStep>,

    /// Rule override installed while the effect is active.
    pub rule_override: RuleOverride,
}

impl ToolCard {
    /// Create a toolcard with no steps and no override.
    pub fn new(id: ToolCardId, name: impl Into<String>, activation: Activation) -> Self {
        Self {
            id,
            name: name.into(),
            activation,
            steps: Vec::new(),
            rule_override: RuleOverride::none(),
        }
    }

    /// Append a step to the sequence.
    #[must_use]
    pub fn with_step(mut self, step: EffectStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Set the rule override.
    #[must_use]
    pub fn with_rule_override(mut self, rule_override: RuleOverride) -> Self {
        self.rule_override = rule_override;
        self
    }

    /// Declared chain length: the upper bound on controller transitions
    /// one activation can trigger.
    #[must_use]
    pub fn chain_len(&self) -> usize {
        self.steps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ConstraintKind;

    #[test]
    fn test_card_builder() {
        let card = ToolCard::new(ToolCardId::new(1), "track swap", Activation::AfterDraft)
            .with_step(EffectStep::ChooseFromTrack)
            .with_step(EffectStep::SwapDraftedWithTrack);

        assert_eq!(card.id, ToolCardId::new(1));
        assert_eq!(card.name, "track swap");
        assert_eq!(card.activation, Activation::AfterDraft);
        assert_eq!(card.chain_len(), 2);
        assert_eq!(card.rule_override, RuleOverride::none());
    }

    #[test]
    fn test_card_with_override() {
        let card = ToolCard::new(ToolCardId::new(2), "free move", Activation::Anytime)
            .with_step(EffectStep::MoveDice { count: 1 })
            .with_rule_override(RuleOverride::ignore_color());

        assert_eq!(card.rule_override.omit, Some(ConstraintKind::CellColor));
        assert!(!card.rule_override.invert_adjacency);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ToolCardId::new(7)), "ToolCard(7)");
    }
}
