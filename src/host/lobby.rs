//! The join boundary.
//!
//! Players join with a display name before the match starts; the lobby
//! enforces uniqueness and capacity, assigns seats in join order, and
//! builds the running match.

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::match_host::MatchHost;
use crate::controller::Controller;
use crate::core::{DiceBag, DiceSupplyError, GameConfig, Player, PlayerId, PlayerMap};
use crate::grid::Grid;
use crate::rounds::Game;
use crate::scoring::{ObjectiveId, Ranker};
use crate::toolcards::ToolCardRegistry;

/// Why a join was refused. Surfaced to the joining caller only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum JoinError {
    #[error("that display name is already taken")]
    DuplicateName,

    #[error("the match is full")]
    MatchFull,

    #[error("the match is already running")]
    AlreadyRunning,
}

/// Why the match could not start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StartError {
    #[error("a match needs at least 2 players")]
    NotEnoughPlayers,

    #[error("the match is already running")]
    AlreadyRunning,

    #[error(transparent)]
    DiceSupply(#[from] DiceSupplyError),
}

/// A match waiting for players.
pub struct MatchLobby {
    config: GameConfig,
    players: Vec<Player>,
    names: FxHashMap<String, PlayerId>,
    grids: FxHashMap<PlayerId, Grid>,
    started: bool,
}

impl MatchLobby {
    /// Open a lobby with the given configuration.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            players: Vec::new(),
            names: FxHashMap::default(),
            grids: FxHashMap::default(),
            started: false,
        }
    }

    /// The players joined so far, in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Join with a display name; returns the assigned seat.
    pub fn join(&mut self, name: &str) -> Result<PlayerId, JoinError> {
        if self.started {
            return Err(JoinError::AlreadyRunning);
        }
        if self.players.len() >= self.config.max_players {
            return Err(JoinError::MatchFull);
        }
        if self.names.contains_key(name) {
            return Err(JoinError::DuplicateName);
        }

        let id = PlayerId::new(self.players.len() as u8);
        self.players.push(Player::new(id, name));
        self.names.insert(name.to_string(), id);
        Ok(id)
    }

    /// Assign a constrained grid layout to a seat. Seats without one get
    /// an unconstrained grid of the configured dimensions.
    ///
    /// Panics if the layout's dimensions disagree with the configuration.
    pub fn set_grid(&mut self, player: PlayerId, grid: Grid) {
        assert_eq!(grid.rows(), self.config.grid_rows, "Grid rows mismatch");
        assert_eq!(grid.cols(), self.config.grid_cols, "Grid cols mismatch");
        self.grids.insert(player, grid);
    }

    /// Start the match: build the game, the controller, and the host.
    ///
    /// `seed` drives the dice bag; `registry` is the revealed toolcard
    /// set; `ranker` and `objectives` are the scoring collaborators.
    ///
    /// Panics if the revealed sets disagree with the configured counts.
    pub fn start(
        &mut self,
        seed: u64,
        registry: ToolCardRegistry,
        ranker: Box<dyn Ranker + Send>,
        objectives: Vec<ObjectiveId>,
    ) -> Result<MatchHost, StartError> {
        if self.started {
            return Err(StartError::AlreadyRunning);
        }
        if self.players.len() < 2 {
            return Err(StartError::NotEnoughPlayers);
        }
        assert_eq!(
            registry.len(),
            self.config.toolcard_count,
            "Revealed toolcards must match the configured count"
        );
        assert_eq!(
            objectives.len(),
            self.config.objective_count,
            "Revealed objectives must match the configured count"
        );

        let player_count = self.players.len();
        let grids = PlayerMap::new(player_count, |id| {
            self.grids
                .get(&id)
                .cloned()
                .unwrap_or_else(|| Grid::new(self.config.grid_rows, self.config.grid_cols))
        });

        let mut bag = DiceBag::new(self.config.dice_per_color, seed);
        let game = Game::new(
            self.players.clone(),
            grids,
            self.config.total_rounds,
            &mut bag,
        )?;

        let controller = Controller::new(game, registry, Box::new(bag), ranker, objectives);

        self.started = true;
        Ok(MatchHost::new(controller, player_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap as Map;

    struct NullRanker;

    impl Ranker for NullRanker {
        fn rank(&self, _: &[PlayerId], _: &[ObjectiveId]) -> Map<PlayerId, i32> {
            Map::default()
        }
    }

    #[test]
    fn test_join_assigns_seats_in_order() {
        let mut lobby = MatchLobby::new(GameConfig::new());
        assert_eq!(lobby.join("ada").unwrap(), PlayerId::new(0));
        assert_eq!(lobby.join("grace").unwrap(), PlayerId::new(1));
        assert_eq!(lobby.players().len(), 2);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut lobby = MatchLobby::new(GameConfig::new());
        lobby.join("ada").unwrap();
        assert_eq!(lobby.join("ada"), Err(JoinError::DuplicateName));
    }

    #[test]
    fn test_capacity_rejected() {
        let mut lobby = MatchLobby::new(GameConfig::new().with_max_players(2));
        lobby.join("a").unwrap();
        lobby.join("b").unwrap();
        assert_eq!(lobby.join("c"), Err(JoinError::MatchFull));
    }

    fn startable_config() -> GameConfig {
        GameConfig::new()
            .with_toolcard_count(ToolCardRegistry::builtin().len())
            .with_objective_count(0)
    }

    #[test]
    fn test_join_after_start_rejected() {
        let mut lobby = MatchLobby::new(startable_config());
        lobby.join("ada").unwrap();
        lobby.join("grace").unwrap();
        lobby
            .start(42, ToolCardRegistry::builtin(), Box::new(NullRanker), vec![])
            .unwrap();

        assert_eq!(lobby.join("late"), Err(JoinError::AlreadyRunning));
    }

    #[test]
    fn test_custom_grid_layout_reaches_the_match() {
        use crate::grid::Cell;
        use crate::DieColor;

        let mut lobby = MatchLobby::new(startable_config());
        let ada = lobby.join("ada").unwrap();
        lobby.join("grace").unwrap();

        let mut cells = vec![Cell::new(); 20];
        cells[0] = Cell::with_color(DieColor::Purple);
        lobby.set_grid(ada, Grid::from_cells(4, 5, cells));

        let host = lobby
            .start(42, ToolCardRegistry::builtin(), Box::new(NullRanker), vec![])
            .unwrap();

        host.with_controller(|c| {
            assert_eq!(
                c.game().grid(ada).cell(0, 0).color_constraint(),
                Some(DieColor::Purple)
            );
            // The other seat got the default unconstrained grid.
            assert_eq!(
                c.game().grid(PlayerId::new(1)).cell(0, 0).color_constraint(),
                None
            );
        });
    }

    #[test]
    #[should_panic(expected = "Revealed toolcards must match the configured count")]
    fn test_revealed_set_must_match_config() {
        let mut lobby = MatchLobby::new(GameConfig::new().with_toolcard_count(1));
        lobby.join("ada").unwrap();
        lobby.join("grace").unwrap();
        let _ = lobby.start(42, ToolCardRegistry::builtin(), Box::new(NullRanker), vec![]);
    }

    #[test]
    fn test_start_needs_two_players() {
        let mut lobby = MatchLobby::new(GameConfig::new());
        lobby.join("ada").unwrap();
        let err = lobby
            .start(42, ToolCardRegistry::builtin(), Box::new(NullRanker), vec![])
            .unwrap_err();
        assert_eq!(err, StartError::NotEnoughPlayers);
    }
}
