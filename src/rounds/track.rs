//! The track: cross-round holding area for undrafted dice.
//!
//! One slot is appended per finished round, holding whatever the draft
//! pool had left. Slots are append-only; effects may retrieve a die from
//! a slot (and the swap step deposits one back into the same slot).

use serde::{Deserialize, Serialize};

use crate::core::Die;

/// One per-round slot of the track.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSlot {
    dice: Vec<Die>,
}

impl TrackSlot {
    /// The dice held in this slot.
    #[must_use]
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Whether the slot holds no dice.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }
}

/// The match-wide track.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    slots: Vec<TrackSlot>,
}

impl Track {
    /// Create an empty track.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a round's leftover dice as a new slot.
    pub fn push_slot(&mut self, dice: Vec<Die>) {
        self.slots.push(TrackSlot { dice });
    }

    /// Number of slots (= rounds finished so far).
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// The slot at `index`, if it exists.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&TrackSlot> {
        self.slots.get(index)
    }

    /// Remove and return the die at `die_index` within `slot`, or None if
    /// either index is out of range.
    pub fn take(&mut self, slot: usize, die_index: usize) -> Option<Die> {
        let slot = self.slots.get_mut(slot)?;
        if die_index < slot.dice.len() {
            Some(slot.dice.remove(die_index))
        } else {
            None
        }
    }

    /// Deposit a die into an existing slot. Returns false if the slot
    /// does not exist.
    pub fn put(&mut self, slot: usize, die: Die) -> bool {
        match self.slots.get_mut(slot) {
            Some(s) => {
                s.dice.push(die);
                true
            }
            None => false,
        }
    }
}
