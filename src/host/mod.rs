//! The match boundary: joining, move intake, sessions, broadcast.
//!
//! ## Key Types
//!
//! - `MatchLobby`: The join boundary (duplicate names, capacity,
//!   already-running)
//! - `MatchHost`: One running match behind a `Mutex` — the single
//!   serialization point for concurrent per-player sessions
//! - `MoveReply`: Result plus the recomputed permitted-operation set
//! - `MatchEvent` / `ViewObserver`: Fire-and-forget broadcast with
//!   per-observer ordering
//!
//! Network transport and message serialization live outside this crate;
//! sessions hand fully parsed [`crate::controller::PlayerMove`]s in.

pub mod lobby;
pub mod match_host;

pub use lobby::{JoinError, MatchLobby, StartError};
pub use match_host::{MatchEvent, MatchHost, MoveReply, ViewObserver};
