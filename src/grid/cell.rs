//! A single grid cell: optional constraints plus at most one die.

use serde::{Deserialize, Serialize};

use crate::core::{Die, DieColor};

/// One cell of a player's grid.
///
/// Constraints are fixed at grid construction and never change; the die
/// slot is filled through validated placements only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    color_constraint: Option<DieColor>,
    value_constraint: Option<u8>,
    die: Option<Die>,
}

impl Cell {
    /// An unconstrained, empty cell.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A cell constrained to one die color.
    #[must_use]
    pub fn with_color(color: DieColor) -> Self {
        Self {
            color_constraint: Some(color),
            value_constraint: None,
            die: None,
        }
    }

    /// A cell constrained to one face value.
    ///
    /// Panics if `value` is outside 1..=6.
    #[must_use]
    pub fn with_value(value: u8) -> Self {
        assert!((1..=6).contains(&value), "Cell value constraint must be 1-6");
        Self {
            color_constraint: None,
            value_constraint: Some(value),
            die: None,
        }
    }

    /// The cell's color constraint, if any.
    #[must_use]
    pub fn color_constraint(&self) -> Option<DieColor> {
        self.color_constraint
    }

    /// The cell's value constraint, if any.
    #[must_use]
    pub fn value_constraint(&self) -> Option<u8> {
        self.value_constraint
    }

    /// Whether a die occupies this cell.
    #[must_use]
    pub fn has_die(&self) -> bool {
        self.die.is_some()
    }

    /// The occupying die, if any.
    #[must_use]
    pub fn die(&self) -> Option<&Die> {
        self.die.as_ref()
    }

    pub(crate) fn put(&mut self, die: Die) {
        assert!(self.die.is_none(), "Cell already holds a die");
        self.die = Some(die);
    }

    pub(crate) fn take(&mut self) -> Option<Die> {
        self.die.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconstrained_cell() {
        let cell = Cell::new();
        assert!(cell.color_constraint().is_none());
        assert!(cell.value_constraint().is_none());
        assert!(!cell.has_die());
    }

    #[test]
    fn test_constrained_cells() {
        let red = Cell::with_color(DieColor::Red);
        assert_eq!(red.color_constraint(), Some(DieColor::Red));
        assert!(red.value_constraint().is_none());

        let three = Cell::with_value(3);
        assert_eq!(three.value_constraint(), Some(3));
        assert!(three.color_constraint().is_none());
    }

    #[test]
    #[should_panic(expected = "Cell value constraint must be 1-6")]
    fn test_bad_value_constraint() {
        Cell::with_value(0);
    }

    #[test]
    fn test_put_take() {
        let mut cell = Cell::new();
        let die = Die::new(DieColor::Blue, 5);

        cell.put(die);
        assert!(cell.has_die());
        assert_eq!(cell.die(), Some(&die));

        assert_eq!(cell.take(), Some(die));
        assert!(!cell.has_die());
    }

    #[test]
    #[should_panic(expected = "Cell already holds a die")]
    fn test_double_put() {
        let mut cell = Cell::new();
        cell.put(Die::new(DieColor::Red, 1));
        cell.put(Die::new(DieColor::Blue, 2));
    }
}
