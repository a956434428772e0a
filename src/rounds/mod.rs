//! Turn and round progression.
//!
//! ## Key Types
//!
//! - `Turn`: Per-turn bookkeeping (drafted die, track choice, used card)
//! - `Round`: Serpentine turn order plus the round's draft pool
//! - `DraftPool` / `Track`: Round-scoped dice and the cross-round
//!   holding area
//! - `Game`: The model hierarchy the controller mediates
//!
//! Advancement returns explicit results (`TurnAdvance`, `RoundAdvance`);
//! exhaustion is an ordinary value consumed by the controller's
//! advancement algorithm, never an exception or a silent state.

pub mod game;
pub mod pool;
pub mod round;
pub mod track;
pub mod turn;

pub use game::{Game, RoundAdvance};
pub use pool::DraftPool;
pub use round::{Round, TurnAdvance};
pub use track::{Track, TrackSlot};
pub use turn::{TrackChoice, Turn};
