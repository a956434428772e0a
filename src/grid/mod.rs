//! The per-player placement surface.
//!
//! ## Key Types
//!
//! - `Cell`: One grid position with optional color/value constraint and
//!   at most one occupying die
//! - `Grid`: Fixed rows x cols of cells with neighbor and border queries
//!
//! Constraints are fixed for the lifetime of the grid; dice arrive only
//! through placements the controller has validated against the rule chain.

pub mod cell;
pub mod surface;

pub use cell::Cell;
pub use surface::Grid;
