//! # vetrata
//!
//! A turn-based dice-drafting board game engine: players draft dice from
//! a shared pool and place them on personal constrained grids, with
//! toolcard effects that temporarily bend the placement rules or the
//! flow of a turn.
//!
//! ## Design Principles
//!
//! 1. **Explicit state machine**: The controller holds one state value
//!    at a time; implicit effect steps run on an iterative trampoline,
//!    never by recursive re-entry.
//!
//! 2. **Composable legality**: Placement rules are an ordered list of
//!    independent constraints evaluated with short-circuit AND; toolcard
//!    customization builds a different list, not a different type.
//!
//! 3. **Exhaustion as values**: "No more turns" and "no more rounds" are
//!    ordinary results the advancement algorithm consumes; only genuine
//!    invariant violations are fatal.
//!
//! 4. **One writer per match**: The host's mutex is the single
//!    serialization point; off-turn and inactive-session moves are
//!    rejected synchronously without mutation.
//!
//! ## Modules
//!
//! - `core`: Players, dice, deterministic RNG, dice supply, configuration
//! - `grid`: Constrained cells and the per-player placement surface
//! - `rules`: The placement rule chain and per-effect overrides
//! - `rounds`: Turn/round progression, draft pool, track
//! - `toolcards`: Effects as data (step sequences + rule overrides)
//! - `controller`: The state machine and match orchestrator
//! - `scoring`: The end-of-game ranking collaborator interface
//! - `host`: Join boundary, move intake, sessions, observer broadcast

pub mod controller;
pub mod core;
pub mod grid;
pub mod host;
pub mod rounds;
pub mod rules;
pub mod scoring;
pub mod toolcards;

// Re-export commonly used types
pub use crate::core::{
    DiceBag, DiceSource, DiceSupplyError, Die, DieColor, GameConfig, GameRng, Player, PlayerId,
    PlayerMap,
};

pub use crate::grid::{Cell, Grid};

pub use crate::rules::{Constraint, ConstraintKind, PlacementViolation, RuleChain, RuleOverride};

pub use crate::rounds::{DraftPool, Game, Round, RoundAdvance, Track, Turn, TurnAdvance};

pub use crate::toolcards::{Activation, EffectStep, ToolCard, ToolCardId, ToolCardRegistry};

pub use crate::controller::{
    ActiveEffect, Controller, MatchError, MoveFailure, MoveKind, MoveOutcome, MoveRecord,
    MoveRejection, PlayerMove, TurnState,
};

pub use crate::scoring::{MatchOutcome, ObjectiveId, Ranker};

pub use crate::host::{
    JoinError, MatchEvent, MatchHost, MatchLobby, MoveReply, StartError, ViewObserver,
};
