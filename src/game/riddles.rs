//! Riddle table keyed by room id.
//!
//! Read-only after construction. The UI layer looks a riddle up here, shows
//! the question and hands the player's reply plus [`Riddle::answer`] to the
//! answer matcher.

use rand::Rng;
use std::collections::BTreeMap;
use std::path::Path;

use crate::game::seed_loader::{load_riddles_from_json, riddles_from_json_str, BUILTIN_RIDDLES};
use crate::game::types::Riddle;
use crate::game::GameError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RiddleTable {
    rooms: BTreeMap<String, Vec<Riddle>>,
}

impl RiddleTable {
    /// The table embedded from `data/riddles.json`.
    pub fn builtin() -> Result<Self, GameError> {
        Self::from_json_str("builtin riddles", BUILTIN_RIDDLES)
    }

    pub fn from_json_str(source_name: &str, contents: &str) -> Result<Self, GameError> {
        Ok(Self {
            rooms: riddles_from_json_str(source_name, contents)?,
        })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        Ok(Self {
            rooms: load_riddles_from_json(path)?,
        })
    }

    /// Add a riddle to a room, creating the room's set if needed.
    ///
    /// Blank answers are refused, same as when loading from JSON.
    pub fn insert(&mut self, room_id: &str, riddle: Riddle) -> Result<(), GameError> {
        if riddle.answer.trim().is_empty() {
            return Err(GameError::InvalidContent {
                source_name: "riddle table".to_string(),
                reason: format!("riddle for room '{}' has an empty answer", room_id),
            });
        }
        self.rooms.entry(room_id.to_string()).or_default().push(riddle);
        Ok(())
    }

    pub fn riddles_for(&self, room_id: &str) -> &[Riddle] {
        self.rooms.get(room_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_riddles(&self, room_id: &str) -> bool {
        !self.riddles_for(room_id).is_empty()
    }

    /// Pick one of the room's riddles uniformly at random.
    pub fn random_for<R: Rng + ?Sized>(&self, room_id: &str, rng: &mut R) -> Option<&Riddle> {
        let riddles = self.riddles_for(room_id);
        if riddles.is_empty() {
            return None;
        }
        riddles.get(rng.gen_range(0..riddles.len()))
    }

    /// Room ids in sorted order.
    pub fn room_ids(&self) -> impl Iterator<Item = &str> {
        self.rooms.keys().map(String::as_str)
    }

    /// Number of rooms with at least one entry.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn riddle_count(&self) -> usize {
        self.rooms.values().map(Vec::len).sum()
    }
}
