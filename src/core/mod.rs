//! Core types: players, dice, RNG, dice supply, configuration.

pub mod bag;
pub mod config;
pub mod dice;
pub mod player;
pub mod rng;

pub use bag::{DiceBag, DiceSource, DiceSupplyError};
pub use config::GameConfig;
pub use dice::{Die, DieColor};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
