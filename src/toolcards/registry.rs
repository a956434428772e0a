//! Toolcard registry for definition lookup.

use rustc_hash::FxHashMap;

use super::card::{Activation, ToolCard, ToolCardId};
use super::step::EffectStep;
use crate::rules::RuleOverride;

/// Registry of toolcard definitions revealed for a match.
#[derive(Clone, Debug, Default)]
pub struct ToolCardRegistry {
    cards: FxHashMap<ToolCardId, ToolCard>,
}

impl ToolCardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The representative built-in set, covering every step kind and
    /// override kind. The full catalogue lives with the card content
    /// collaborator, not here.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        registry.register(
            ToolCard::new(ToolCardId::new(0), "flip drafted die", Activation::AfterDraft)
                .with_step(EffectStep::FlipDrafted),
        );

        registry.register(
            ToolCard::new(ToolCardId::new(1), "swap with track", Activation::AfterDraft)
                .with_step(EffectStep::ChooseFromTrack)
                .with_step(EffectStep::SwapDraftedWithTrack),
        );

        registry.register(
            ToolCard::new(ToolCardId::new(2), "nudge value", Activation::AfterDraft)
                .with_step(EffectStep::AdjustDrafted),
        );

        registry.register(
            ToolCard::new(ToolCardId::new(3), "choose value", Activation::AfterDraft)
                .with_step(EffectStep::ChooseValue),
        );

        registry.register(
            ToolCard::new(ToolCardId::new(4), "move ignoring color", Activation::Anytime)
                .with_step(EffectStep::MoveDice { count: 1 })
                .with_rule_override(RuleOverride::ignore_color()),
        );

        registry.register(
            ToolCard::new(ToolCardId::new(5), "move ignoring value", Activation::Anytime)
                .with_step(EffectStep::MoveDice { count: 2 })
                .with_rule_override(RuleOverride::ignore_value()),
        );

        registry.register(
            ToolCard::new(ToolCardId::new(6), "place apart", Activation::AfterDraft)
                .with_step(EffectStep::PlaceDrafted)
                .with_rule_override(RuleOverride::isolated()),
        );

        registry
    }

    /// Register a toolcard definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: ToolCard) {
        if self.cards.contains_key(&card.id) {
            panic!("Toolcard with ID {:?} already registered", card.id);
        }
        self.cards.insert(card.id, card);
    }

    /// Get a toolcard definition by ID.
    #[must_use]
    pub fn get(&self, id: ToolCardId) -> Option<&ToolCard> {
        self.cards.get(&id)
    }

    /// Check if a toolcard ID is registered.
    #[must_use]
    pub fn contains(&self, id: ToolCardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered toolcards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all toolcard definitions.
    pub fn iter(&self) -> impl Iterator<Item = &ToolCard> {
        self.cards.values()
    }
}
