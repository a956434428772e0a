//! The composable placement-legality engine.
//!
//! ## Key Types
//!
//! - `Constraint`: One independent legality predicate
//! - `RuleChain`: Ordered constraints evaluated with short-circuit AND
//! - `RuleOverride`: Per-effect customization (omit a node, invert
//!   adjacency); the controller rebuilds the effective chain from it
//! - `PlacementViolation`: The first violated rule, for rejection reporting

pub mod placement;

pub use placement::{Constraint, ConstraintKind, PlacementViolation, RuleChain, RuleOverride};
