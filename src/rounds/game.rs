//! The game container: players, grids, track, and round progression.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::round::{Round, TurnAdvance};
use super::track::Track;
use crate::core::{DiceSource, DiceSupplyError, Player, PlayerId, PlayerMap};
use crate::grid::Grid;

/// Result of asking the game for its next round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundAdvance {
    /// A fresh round (with a replenished pool) is now current.
    Advanced,
    /// All rounds have been played.
    Exhausted,
}

/// A running game: the model hierarchy the controller mediates.
///
/// Grids are created once per player here and mutated only through the
/// controller's validated operations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    players: Vec<Player>,
    grids: PlayerMap<Grid>,
    track: Track,
    total_rounds: usize,
    round: Round,
}

impl Game {
    /// Create a game, drawing the first round's dice from the supply.
    ///
    /// The freshly created game has no turn in progress; the controller
    /// advances into turn one.
    pub fn new(
        players: Vec<Player>,
        grids: PlayerMap<Grid>,
        total_rounds: usize,
        supply: &mut dyn DiceSource,
    ) -> Result<Self, DiceSupplyError> {
        assert!(players.len() >= 2, "A game needs at least 2 players");
        assert_eq!(
            players.len(),
            grids.player_count(),
            "One grid per player required"
        );
        assert!(total_rounds >= 1, "A game has at least one round");

        let seats: Vec<PlayerId> = players.iter().map(|p| p.id).collect();
        let dice = supply.draw(players.len() * 2 + 1)?;
        let round = Round::new(0, &seats, dice);

        Ok(Self {
            players,
            grids,
            track: Track::new(),
            total_rounds,
            round,
        })
    }

    /// The seated players, in join order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Seat IDs in join order.
    #[must_use]
    pub fn seats(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id).collect()
    }

    /// A player's grid.
    #[must_use]
    pub fn grid(&self, player: PlayerId) -> &Grid {
        &self.grids[player]
    }

    /// Mutable access to a player's grid.
    pub fn grid_mut(&mut self, player: PlayerId) -> &mut Grid {
        &mut self.grids[player]
    }

    /// The track.
    #[must_use]
    pub fn track(&self) -> &Track {
        &self.track
    }

    /// Mutable access to the track.
    pub fn track_mut(&mut self) -> &mut Track {
        &mut self.track
    }

    /// Total rounds configured.
    #[must_use]
    pub fn total_rounds(&self) -> usize {
        self.total_rounds
    }

    /// The current round.
    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Mutable access to the current round.
    pub fn round_mut(&mut self) -> &mut Round {
        &mut self.round
    }

    /// Ask the current round for its next turn.
    pub fn advance_turn(&mut self) -> TurnAdvance {
        self.round.advance()
    }

    /// Move to the next round, replenishing the pool with
    /// `players * 2 + 1` dice, or report that all rounds are played.
    ///
    /// Either way the finished round's leftover pool is appended to the
    /// track first. No dice are drawn when the game is exhausted.
    pub fn advance_round(
        &mut self,
        supply: &mut dyn DiceSource,
    ) -> Result<RoundAdvance, DiceSupplyError> {
        let leftovers = self.round.pool_mut().drain();
        info!(
            round = self.round.number(),
            leftover_dice = leftovers.len(),
            "round finished"
        );
        self.track.push_slot(leftovers);

        if self.round.index() + 1 >= self.total_rounds {
            return Ok(RoundAdvance::Exhausted);
        }

        let seats = self.seats();
        let dice = supply.draw(seats.len() * 2 + 1)?;
        self.round = Round::new(self.round.index() + 1, &seats, dice);
        info!(round = self.round.number(), "round started");
        Ok(RoundAdvance::Advanced)
    }

    /// Players in reverse turn order of the current round's forward pass,
    /// as the ranking collaborator expects them.
    #[must_use]
    pub fn players_reverse_turn_order(&self) -> Vec<PlayerId> {
        let n = self.players.len();
        let mut order: Vec<PlayerId> = self.round.order()[..n].to_vec();
        order.reverse();
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DiceBag;

    fn two_player_game(total_rounds: usize) -> (Game, DiceBag) {
        let players = vec![
            Player::new(PlayerId::new(0), "ada"),
            Player::new(PlayerId::new(1), "grace"),
        ];
        let grids = PlayerMap::new(2, |_| Grid::new(4, 5));
        let mut bag = DiceBag::new(18, 42);
        let game = Game::new(players, grids, total_rounds, &mut bag).unwrap();
        (game, bag)
    }

    #[test]
    fn test_initial_draw_size() {
        let (game, bag) = two_player_game(10);
        assert_eq!(game.round().pool().len(), 5);
        assert_eq!(bag.remaining(), 85);
    }

    #[test]
    fn test_replenishment_draws_exactly_pool_size() {
        let (mut game, mut bag) = two_player_game(10);
        let before = bag.remaining();

        let result = game.advance_round(&mut bag).unwrap();
        assert_eq!(result, RoundAdvance::Advanced);
        assert_eq!(bag.remaining(), before - 5);
        assert_eq!(game.round().pool().len(), 5);
        assert_eq!(game.round().number(), 2);
    }

    #[test]
    fn test_leftovers_move_to_track() {
        let (mut game, mut bag) = two_player_game(10);
        game.round_mut().pool_mut().take(0);

        game.advance_round(&mut bag).unwrap();
        assert_eq!(game.track().slot_count(), 1);
        assert_eq!(game.track().slot(0).unwrap().dice().len(), 4);
    }

    #[test]
    fn test_game_exhaustion_draws_nothing() {
        let (mut game, mut bag) = two_player_game(1);
        let before = bag.remaining();

        let result = game.advance_round(&mut bag).unwrap();
        assert_eq!(result, RoundAdvance::Exhausted);
        assert_eq!(bag.remaining(), before);
        assert_eq!(game.track().slot_count(), 1);
    }

    #[test]
    fn test_reverse_turn_order() {
        let (game, _) = two_player_game(10);
        let reversed = game.players_reverse_turn_order();
        assert_eq!(reversed, vec![PlayerId::new(1), PlayerId::new(0)]);
    }

    #[test]
    fn test_full_supply_covers_standard_game() {
        // 18 dice per color cover 10 rounds of 9 draws for 4 players.
        let players: Vec<Player> = (0..4)
            .map(|i| Player::new(PlayerId::new(i), format!("p{i}")))
            .collect();
        let grids = PlayerMap::new(4, |_| Grid::new(4, 5));
        let mut bag = DiceBag::new(18, 1);
        let mut game = Game::new(players, grids, 10, &mut bag).unwrap();

        for _ in 0..9 {
            assert_eq!(game.advance_round(&mut bag).unwrap(), RoundAdvance::Advanced);
        }
        assert_eq!(game.advance_round(&mut bag).unwrap(), RoundAdvance::Exhausted);
        assert_eq!(bag.remaining(), 0);
    }
}
