//! Toolcards: special effects as data.
//!
//! ## Key Types
//!
//! - `EffectStep`: One step of an effect sequence, implicit or input
//! - `ToolCard`: Activation precondition + step sequence + rule override
//! - `ToolCardRegistry`: Definition lookup, with a representative
//!   built-in set
//!
//! The controller hosts the state-machine mechanics; cards stay stateless
//! definitions. Which specific cards exist in a product is card content,
//! out of scope beyond the built-in set used for wiring and tests.

pub mod card;
pub mod registry;
pub mod step;

pub use card::{Activation, ToolCard, ToolCardId};
pub use registry::ToolCardRegistry;
pub use step::EffectStep;
