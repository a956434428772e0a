//! Match configuration.
//!
//! Opaque integers (dice per color, card counts) come from an external
//! config source; this type just carries them into construction with
//! sane defaults and construction-time validation.

use serde::{Deserialize, Serialize};

/// Complete match configuration.
///
/// Built with chained `with_*` methods:
///
/// ```
/// use vetrata::core::GameConfig;
///
/// let config = GameConfig::new()
///     .with_total_rounds(10)
///     .with_dice_per_color(18)
///     .with_toolcard_count(3);
/// assert_eq!(config.total_rounds, 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid rows per player.
    pub grid_rows: usize,

    /// Grid columns per player.
    pub grid_cols: usize,

    /// Rounds played before scoring.
    pub total_rounds: usize,

    /// Dice of each color in the bag.
    pub dice_per_color: usize,

    /// Toolcards revealed for the match.
    pub toolcard_count: usize,

    /// Public objective cards revealed for the match.
    pub objective_count: usize,

    /// Maximum players that may join.
    pub max_players: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_rows: 4,
            grid_cols: 5,
            total_rounds: 10,
            dice_per_color: 18,
            toolcard_count: 3,
            objective_count: 3,
            max_players: 4,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the standard defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grid dimensions.
    #[must_use]
    pub fn with_grid(mut self, rows: usize, cols: usize) -> Self {
        assert!(rows >= 2 && cols >= 2, "Grid must be at least 2x2");
        self.grid_rows = rows;
        self.grid_cols = cols;
        self
    }

    /// Set the number of rounds.
    #[must_use]
    pub fn with_total_rounds(mut self, rounds: usize) -> Self {
        assert!(rounds >= 1, "A game has at least one round");
        self.total_rounds = rounds;
        self
    }

    /// Set the dice-per-color supply count.
    #[must_use]
    pub fn with_dice_per_color(mut self, count: usize) -> Self {
        assert!(count >= 1, "Supply needs at least one die per color");
        self.dice_per_color = count;
        self
    }

    /// Set the number of toolcards revealed.
    #[must_use]
    pub fn with_toolcard_count(mut self, count: usize) -> Self {
        self.toolcard_count = count;
        self
    }

    /// Set the number of public objective cards revealed.
    #[must_use]
    pub fn with_objective_count(mut self, count: usize) -> Self {
        self.objective_count = count;
        self
    }

    /// Set the player capacity.
    #[must_use]
    pub fn with_max_players(mut self, max: usize) -> Self {
        assert!((2..=8).contains(&max), "Player capacity must be 2-8");
        self.max_players = max;
        self
    }

    /// Dice drawn per round for `players` seated players.
    #[must_use]
    pub fn dice_per_round(&self, players: usize) -> usize {
        players * 2 + 1
    }
}
