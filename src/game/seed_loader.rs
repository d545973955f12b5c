//! Seed data loaders for data-driven content initialization
//!
//! The shipped riddle and room tables live in `data/*.json` and are embedded
//! at compile time. Hosts can point the config at their own copies to swap
//! content without recompiling.

use crate::game::types::{Riddle, Room};
use crate::game::GameError;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Riddle table shipped with the binary (room id → riddles).
pub const BUILTIN_RIDDLES: &str = include_str!("../../data/riddles.json");
/// Town map shipped with the binary.
pub const BUILTIN_ROOMS: &str = include_str!("../../data/rooms.json");

/// Parse a riddle table. `source_name` only labels errors.
pub fn riddles_from_json_str(
    source_name: &str,
    contents: &str,
) -> Result<BTreeMap<String, Vec<Riddle>>, GameError> {
    let table: BTreeMap<String, Vec<Riddle>> =
        serde_json::from_str(contents).map_err(|e| GameError::Json {
            source_name: source_name.to_string(),
            source: e,
        })?;

    for (room, riddles) in &table {
        if let Some(idx) = riddles.iter().position(|r| r.answer.trim().is_empty()) {
            return Err(GameError::InvalidContent {
                source_name: source_name.to_string(),
                reason: format!("riddle {} in room '{}' has an empty answer", idx, room),
            });
        }
    }

    Ok(table)
}

/// Load riddles from a JSON file shaped like `data/riddles.json`.
pub fn load_riddles_from_json<P: AsRef<Path>>(
    path: P,
) -> Result<BTreeMap<String, Vec<Riddle>>, GameError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    riddles_from_json_str(&path.display().to_string(), &contents)
}

/// Parse a room list, rejecting duplicate or blank ids.
pub fn rooms_from_json_str(source_name: &str, contents: &str) -> Result<Vec<Room>, GameError> {
    let rooms: Vec<Room> = serde_json::from_str(contents).map_err(|e| GameError::Json {
        source_name: source_name.to_string(),
        source: e,
    })?;

    let mut seen = std::collections::HashSet::new();
    for room in &rooms {
        if room.id.trim().is_empty() {
            return Err(GameError::InvalidContent {
                source_name: source_name.to_string(),
                reason: format!("room '{}' has a blank id", room.name),
            });
        }
        if !seen.insert(room.id.as_str()) {
            return Err(GameError::InvalidContent {
                source_name: source_name.to_string(),
                reason: format!("duplicate room id '{}'", room.id),
            });
        }
    }

    Ok(rooms)
}

/// Load rooms from a JSON file shaped like `data/rooms.json`.
pub fn load_rooms_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Room>, GameError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    rooms_from_json_str(&path.display().to_string(), &contents)
}

/// The embedded room list.
pub fn builtin_rooms() -> Result<Vec<Room>, GameError> {
    rooms_from_json_str("builtin rooms", BUILTIN_ROOMS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_content_parses() {
        let riddles = riddles_from_json_str("builtin", BUILTIN_RIDDLES).expect("riddles");
        assert_eq!(riddles.len(), 12);
        assert!(riddles.values().all(|set| set.len() == 5));
        let rooms = builtin_rooms().expect("rooms");
        assert_eq!(rooms.len(), 13);
    }

    #[test]
    fn every_riddle_room_is_on_the_map() {
        let riddles = riddles_from_json_str("builtin", BUILTIN_RIDDLES).expect("riddles");
        let rooms = builtin_rooms().expect("rooms");
        for room_id in riddles.keys() {
            assert!(rooms.iter().any(|r| &r.id == room_id), "{} missing", room_id);
        }
    }

    #[test]
    fn empty_answer_rejected() {
        let json = r#"{"bakery": [{"question": "q", "answer": "  "}]}"#;
        let err = riddles_from_json_str("test", json).unwrap_err();
        assert!(matches!(err, GameError::InvalidContent { .. }));
    }

    #[test]
    fn malformed_json_reports_source() {
        let err = riddles_from_json_str("broken.json", "{not json").unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn duplicate_room_rejected() {
        let json = r#"[{"id": "bakery", "name": "Bakery"}, {"id": "bakery", "name": "Again"}]"#;
        let err = rooms_from_json_str("test", json).unwrap_err();
        assert!(err.to_string().contains("duplicate room id"));
    }

    #[test]
    fn room_defaults_applied() {
        let json = r#"[{"id": "museum", "name": "Museum"}]"#;
        let rooms = rooms_from_json_str("test", json).expect("rooms");
        assert!(rooms[0].unlocked);
        assert!(rooms[0].color.is_empty());
    }
}
