//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. Matches hold between 2 and 8 players.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access, indexed by
//! `PlayerId`. Used for grids and session flags.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier within a match.
///
/// Seat indices are 0-based: the first player to join is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a match with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A joined player: seat plus the display name chosen at the join boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Seat assigned when the player joined.
    pub id: PlayerId,

    /// Display name, unique within the match.
    pub name: String,
}

impl Player {
    /// Create a player with the given seat and display name.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player.
/// Use `PlayerMap::new()` to create with a factory function,
/// or `PlayerMap::with_value()` to initialize all entries to the same value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each seat.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count >= 2, "Must have at least 2 players");
        assert!(player_count <= 8, "At most 8 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(4).collect();
        assert_eq!(players.len(), 4);
        assert_eq!(players[0], PlayerId::new(0));
        assert_eq!(players[3], PlayerId::new(3));
    }

    #[test]
    fn test_player_display_name() {
        let player = Player::new(PlayerId::new(1), "ada");
        assert_eq!(player.id, PlayerId::new(1));
        assert_eq!(player.name, "ada");
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i32> = PlayerMap::new(4, |p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(2)], 20);
        assert_eq!(map.player_count(), 4);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<bool> = PlayerMap::with_value(2, true);

        map[PlayerId::new(1)] = false;

        assert!(map[PlayerId::new(0)]);
        assert!(!map[PlayerId::new(1)]);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<i32> = PlayerMap::new(3, |p| p.index() as i32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], (PlayerId::new(0), &0));
        assert_eq!(pairs[2], (PlayerId::new(2), &2));
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::new(2, |p| p.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 2 players")]
    fn test_player_map_single_player() {
        let _: PlayerMap<i32> = PlayerMap::with_value(1, 0);
    }
}
