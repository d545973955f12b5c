//! Per-game progress: who is playing, which rooms they visited, which
//! challenges they were credited with, and how many misses they logged.
//!
//! Lives in memory for one game only. Nothing here touches disk.

use std::collections::HashMap;

use log::{debug, info};

use crate::game::types::{Player, Room};
use crate::game::GameError;

#[derive(Debug, Clone, Default)]
pub struct GameState {
    players: Vec<Player>,
    rooms: Vec<Room>,
    current_player: Option<String>,
    /// (player id, room id) → failed submissions.
    attempts: HashMap<(String, String), u32>,
}

impl GameState {
    pub fn new(players: Vec<Player>, rooms: Vec<Room>) -> Self {
        Self {
            players,
            rooms,
            current_player: None,
            attempts: HashMap::new(),
        }
    }

    /// Build players from display names; ids are `1`, `2`, ... in order.
    pub fn with_player_names<S: AsRef<str>>(names: &[S], rooms: Vec<Room>) -> Self {
        let players = names
            .iter()
            .enumerate()
            .map(|(idx, name)| Player::new(&(idx + 1).to_string(), name.as_ref()))
            .collect();
        Self::new(players, rooms)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn find_room(&self, room_id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == room_id)
    }

    pub fn find_player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn select_player(&mut self, player_id: &str) -> Result<&Player, GameError> {
        let idx = self
            .players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or_else(|| GameError::UnknownPlayer(player_id.to_string()))?;
        self.current_player = Some(player_id.to_string());
        debug!("selected player {}", player_id);
        Ok(&self.players[idx])
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.current_player
            .as_deref()
            .and_then(|id| self.find_player(id))
    }

    fn current_index(&self) -> Option<usize> {
        let id = self.current_player.as_deref()?;
        self.players.iter().position(|p| p.id == id)
    }

    /// Record a visit for the current player and unlock the room.
    /// Does nothing when no player is selected.
    pub fn mark_room_visited(&mut self, room_id: &str) {
        let Some(idx) = self.current_index() else {
            return;
        };
        let player = &mut self.players[idx];
        if !player.has_visited(room_id) {
            player.rooms_visited.push(room_id.to_string());
        }
        if let Some(room) = self.rooms.iter_mut().find(|r| r.id == room_id) {
            room.unlocked = true;
        }
    }

    /// Credit the current player with a room's challenge.
    ///
    /// A room is credited once per game: if anyone already solved it, no one
    /// gets it again. Returns whether credit was given.
    pub fn mark_challenge_solved(&mut self, room_id: &str) -> bool {
        let Some(idx) = self.current_index() else {
            return false;
        };
        if let Some(holder) = self.solved_by(room_id) {
            debug!("room {} already credited to {}", room_id, holder.id);
            return false;
        }
        let player = &mut self.players[idx];
        player.challenges_solved.push(room_id.to_string());
        info!("{} solved {}", player.name, room_id);
        true
    }

    /// The player credited with `room_id`, if any.
    pub fn solved_by(&self, room_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.has_solved(room_id))
    }

    pub fn attempts_for_room(&self, player_id: &str, room_id: &str) -> u32 {
        self.attempts
            .get(&(player_id.to_string(), room_id.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Returns the new count.
    pub fn increment_attempts_for_room(&mut self, player_id: &str, room_id: &str) -> u32 {
        let count = self
            .attempts
            .entry((player_id.to_string(), room_id.to_string()))
            .or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    /// Players by solved count (most first), ties by id.
    pub fn leaderboard(&self) -> Vec<&Player> {
        let mut board: Vec<&Player> = self.players.iter().collect();
        board.sort_by(|a, b| {
            b.challenges_solved
                .len()
                .cmp(&a.challenges_solved.len())
                .then_with(|| a.id.cmp(&b.id))
        });
        board
    }
}
