//! The turn/round/effect state machine and its orchestrator.
//!
//! ## Key Types
//!
//! - `TurnState`: The mutually exclusive turn phases
//! - `PlayerMove` / `MoveKind`: The uniform operation surface
//! - `MoveRejection` / `MatchError` / `MoveFailure`: Non-fatal rejections
//!   vs fatal invariant violations
//! - `Controller`: Owns the state, the active effect, the effective rule
//!   chain, and the dice supply; drives turn/round advancement and
//!   end-of-game ranking
//!
//! ## Design
//!
//! States are values with a shared dispatch surface, not objects with
//! entry hooks; implicit effect steps run on an iterative trampoline so
//! chain length (which card content controls) never grows the call
//! stack.

pub mod errors;
pub mod moves;
pub mod orchestrator;
pub mod state;

pub use errors::{MatchError, MoveFailure, MoveRejection};
pub use moves::{MoveKind, MoveOutcome, MoveRecord, PlayerMove};
pub use orchestrator::Controller;
pub use state::{ActiveEffect, TurnState};
