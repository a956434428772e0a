//! Placement legality: an ordered chain of independent constraints.
//!
//! A placement attempt is legal when every constraint in the chain accepts
//! it. Constraints are tagged variants evaluated left-to-right with
//! short-circuit AND, so the first failure names the violated rule.
//! Toolcard customization builds a different ordered list for the turn
//! instead of wrapping nodes; the chain itself is stateless and reusable.
//!
//! Every check observes grid state from before the hypothetical placement;
//! evaluation never mutates the grid.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::core::{Die, DieColor};
use crate::grid::Grid;

/// Why a placement attempt was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum PlacementViolation {
    /// The target cell already holds a die. Checked once, centrally,
    /// before any chain constraint runs.
    #[error("cell ({row}, {col}) already holds a die")]
    CellOccupied { row: usize, col: usize },

    #[error("cell only accepts {required} dice")]
    ColorMismatch { required: DieColor },

    #[error("cell only accepts dice showing {required}")]
    ValueMismatch { required: u8 },

    #[error("a touching die is also {color}")]
    AdjacentSameColor { color: DieColor },

    #[error("a touching die also shows {value}")]
    AdjacentSameValue { value: u8 },

    #[error("die must touch a previously placed die")]
    NoAdjacentDie,

    #[error("die must not touch any placed die")]
    AdjacentDiePresent,

    #[error("the first die must be placed on a border cell")]
    NotOnBorder,
}

/// Discriminant used by [`RuleOverride`] to omit one chain node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintKind {
    CellValue,
    CellColor,
    AdjacentColor,
    AdjacentValue,
    Adjacency,
    Border,
}

/// One legality constraint.
///
/// Each variant consults only local grid state; all variants are
/// independent, so the chain verdict is their conjunction regardless of
/// order. Order only decides which violation gets reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Constraint {
    /// The cell's value constraint, if present, must match the die face.
    CellValue,

    /// The cell's color constraint, if present, must match the die color.
    CellColor,

    /// No touching die may share the die's color. Skipped entirely on an
    /// empty grid.
    AdjacentColor,

    /// No touching die may share the die's face value. Skipped entirely
    /// on an empty grid.
    AdjacentValue,

    /// At least one of the up-to-8 neighbors must be occupied; with
    /// `invert` set, none may be. Absent neighbors never satisfy either
    /// form.
    Adjacency { invert: bool },

    /// The cell must lie on the first/last row or column. Substituted for
    /// the adjacency requirement on a player's very first placement.
    Border,
}

impl Constraint {
    /// The discriminant used for omission.
    #[must_use]
    pub fn kind(&self) -> ConstraintKind {
        match self {
            Constraint::CellValue => ConstraintKind::CellValue,
            Constraint::CellColor => ConstraintKind::CellColor,
            Constraint::AdjacentColor => ConstraintKind::AdjacentColor,
            Constraint::AdjacentValue => ConstraintKind::AdjacentValue,
            Constraint::Adjacency { .. } => ConstraintKind::Adjacency,
            Constraint::Border => ConstraintKind::Border,
        }
    }

    /// Evaluate this constraint alone against a hypothetical placement.
    ///
    /// The chain verdict is exactly the conjunction of the individual
    /// verdicts plus the central occupied-cell check.
    pub fn check(
        &self,
        grid: &Grid,
        die: &Die,
        row: usize,
        col: usize,
    ) -> Result<(), PlacementViolation> {
        match self {
            Constraint::CellValue => match grid.cell(row, col).value_constraint() {
                Some(required) if required != die.value() => {
                    Err(PlacementViolation::ValueMismatch { required })
                }
                _ => Ok(()),
            },

            Constraint::CellColor => match grid.cell(row, col).color_constraint() {
                Some(required) if required != die.color() => {
                    Err(PlacementViolation::ColorMismatch { required })
                }
                _ => Ok(()),
            },

            Constraint::AdjacentColor => {
                if grid.is_empty() {
                    return Ok(());
                }
                if grid
                    .neighbor_dice(row, col)
                    .iter()
                    .any(|d| d.color() == die.color())
                {
                    Err(PlacementViolation::AdjacentSameColor { color: die.color() })
                } else {
                    Ok(())
                }
            }

            Constraint::AdjacentValue => {
                if grid.is_empty() {
                    return Ok(());
                }
                if grid
                    .neighbor_dice(row, col)
                    .iter()
                    .any(|d| d.value() == die.value())
                {
                    Err(PlacementViolation::AdjacentSameValue { value: die.value() })
                } else {
                    Ok(())
                }
            }

            Constraint::Adjacency { invert } => {
                let touching = grid.has_occupied_neighbor(row, col);
                match (touching, invert) {
                    (false, false) => Err(PlacementViolation::NoAdjacentDie),
                    (true, true) => Err(PlacementViolation::AdjacentDiePresent),
                    _ => Ok(()),
                }
            }

            Constraint::Border => {
                if grid.is_border(row, col) {
                    Ok(())
                } else {
                    Err(PlacementViolation::NotOnBorder)
                }
            }
        }
    }
}

/// Per-effect customization of the chain.
///
/// A toolcard may omit one standard node or flip the adjacency
/// requirement into an isolation requirement; the controller rebuilds the
/// effective chain from this when the effect activates and restores the
/// default when it completes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOverride {
    /// Omit the node of this kind entirely.
    pub omit: Option<ConstraintKind>,

    /// Require isolation instead of contact.
    pub invert_adjacency: bool,
}

impl RuleOverride {
    /// No customization: the standard chain.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Ignore cell color constraints.
    #[must_use]
    pub fn ignore_color() -> Self {
        Self {
            omit: Some(ConstraintKind::CellColor),
            ..Self::default()
        }
    }

    /// Ignore cell value constraints.
    #[must_use]
    pub fn ignore_value() -> Self {
        Self {
            omit: Some(ConstraintKind::CellValue),
            ..Self::default()
        }
    }

    /// Require the die to touch no placed die.
    #[must_use]
    pub fn isolated() -> Self {
        Self {
            omit: None,
            invert_adjacency: true,
        }
    }
}

/// The ordered constraint chain consulted on every placement attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleChain {
    constraints: SmallVec<[Constraint; 6]>,
}

impl RuleChain {
    /// The default chain: value, adjacency, adjacent-color, color,
    /// adjacent-value.
    #[must_use]
    pub fn standard() -> Self {
        Self::customized(&RuleOverride::none(), false)
    }

    /// The chain for a player's very first placement: the adjacency
    /// requirement is replaced by the border requirement, since an empty
    /// grid has nothing to touch.
    #[must_use]
    pub fn first_placement() -> Self {
        Self::customized(&RuleOverride::none(), true)
    }

    /// Build the effective chain for a turn.
    ///
    /// `empty_grid` selects the border requirement in place of adjacency;
    /// the override then omits or inverts nodes on top of that base.
    #[must_use]
    pub fn customized(rule_override: &RuleOverride, empty_grid: bool) -> Self {
        let contact = if empty_grid {
            Constraint::Border
        } else {
            Constraint::Adjacency {
                invert: rule_override.invert_adjacency,
            }
        };

        let constraints = [
            Constraint::CellValue,
            contact,
            Constraint::AdjacentColor,
            Constraint::CellColor,
            Constraint::AdjacentValue,
        ]
        .into_iter()
        .filter(|c| Some(c.kind()) != rule_override.omit)
        .collect();

        Self { constraints }
    }

    /// The constraints in evaluation order.
    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Check a placement attempt, reporting the first violated rule.
    ///
    /// Coordinates must already be validated at the controller boundary;
    /// evaluating the chain out of bounds is a programming bug.
    pub fn check(
        &self,
        grid: &Grid,
        die: &Die,
        row: usize,
        col: usize,
    ) -> Result<(), PlacementViolation> {
        assert!(
            grid.in_bounds(row, col),
            "Rule chain evaluated out of bounds"
        );

        if grid.cell(row, col).has_die() {
            return Err(PlacementViolation::CellOccupied { row, col });
        }

        for constraint in &self.constraints {
            constraint.check(grid, die, row, col)?;
        }
        Ok(())
    }

    /// Convenience wrapper for callers that only need the verdict.
    #[must_use]
    pub fn is_legal(&self, grid: &Grid, die: &Die, row: usize, col: usize) -> bool {
        self.check(grid, die, row, col).is_ok()
    }
}
