//! Dice primitives: colors and faces.
//!
//! A die is a colored token with a face value 1–6. Once drafted it is
//! immutable except through the explicit effect operations: flipping to
//! the opposite face, nudging the value by one, or choosing a new value.

use serde::{Deserialize, Serialize};

/// The fixed five-color palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DieColor {
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
}

impl DieColor {
    /// All colors, in palette order.
    pub const ALL: [DieColor; 5] = [
        DieColor::Red,
        DieColor::Green,
        DieColor::Yellow,
        DieColor::Blue,
        DieColor::Purple,
    ];
}

impl std::fmt::Display for DieColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DieColor::Red => "red",
            DieColor::Green => "green",
            DieColor::Yellow => "yellow",
            DieColor::Blue => "blue",
            DieColor::Purple => "purple",
        };
        write!(f, "{name}")
    }
}

/// A colored die with a face value in 1..=6.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die {
    color: DieColor,
    value: u8,
}

impl Die {
    /// Create a die showing the given face.
    ///
    /// Panics if `value` is outside 1..=6.
    #[must_use]
    pub fn new(color: DieColor, value: u8) -> Self {
        assert!((1..=6).contains(&value), "Die value must be 1-6");
        Self { color, value }
    }

    /// The die's color.
    #[must_use]
    pub fn color(&self) -> DieColor {
        self.color
    }

    /// The face currently showing.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Flip to the opposite face: opposite faces always sum to 7.
    pub fn flip(&mut self) {
        self.value = 7 - self.value;
    }

    /// Set the face to a chosen value. Returns false (and leaves the die
    /// untouched) if the value is outside 1..=6.
    pub fn set_value(&mut self, value: u8) -> bool {
        if (1..=6).contains(&value) {
            self.value = value;
            true
        } else {
            false
        }
    }

    /// Increase the face by one. A 6 cannot wrap to 1; returns false.
    pub fn increment(&mut self) -> bool {
        if self.value < 6 {
            self.value += 1;
            true
        } else {
            false
        }
    }

    /// Decrease the face by one. A 1 cannot wrap to 6; returns false.
    pub fn decrement(&mut self) -> bool {
        if self.value > 1 {
            self.value -= 1;
            true
        } else {
            false
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_die() {
        let die = Die::new(DieColor::Red, 4);
        assert_eq!(die.color(), DieColor::Red);
        assert_eq!(die.value(), 4);
        assert_eq!(format!("{}", die), "red 4");
    }

    #[test]
    #[should_panic(expected = "Die value must be 1-6")]
    fn test_invalid_face() {
        Die::new(DieColor::Blue, 7);
    }

    #[test]
    fn test_flip_sums_to_seven() {
        for value in 1..=6 {
            let mut die = Die::new(DieColor::Green, value);
            die.flip();
            assert_eq!(die.value() + value, 7);
        }
    }

    #[test]
    fn test_increment_decrement_bounds() {
        let mut die = Die::new(DieColor::Purple, 6);
        assert!(!die.increment());
        assert_eq!(die.value(), 6);

        assert!(die.decrement());
        assert_eq!(die.value(), 5);

        let mut low = Die::new(DieColor::Yellow, 1);
        assert!(!low.decrement());
        assert_eq!(low.value(), 1);
    }

    #[test]
    fn test_set_value() {
        let mut die = Die::new(DieColor::Blue, 2);
        assert!(die.set_value(5));
        assert_eq!(die.value(), 5);

        assert!(!die.set_value(0));
        assert!(!die.set_value(7));
        assert_eq!(die.value(), 5);
    }

    #[test]
    fn test_serialization() {
        let die = Die::new(DieColor::Yellow, 3);
        let json = serde_json::to_string(&die).unwrap();
        let deserialized: Die = serde_json::from_str(&json).unwrap();
        assert_eq!(die, deserialized);
    }
}
