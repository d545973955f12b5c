//! Plain records shared by the game layer.

use serde::{Deserialize, Serialize};

/// A shop on the town map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    /// Display colour, `#rrggbb`.
    #[serde(default)]
    pub color: String,
    #[serde(default = "default_unlocked")]
    pub unlocked: bool,
}

fn default_unlocked() -> bool {
    true
}

impl Room {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color: String::new(),
            unlocked: true,
        }
    }

    pub fn locked(mut self) -> Self {
        self.unlocked = false;
        self
    }
}

/// One question with its canonical answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Riddle {
    pub question: String,
    pub answer: String,
}

impl Riddle {
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

/// A participant and the rooms they have been credited with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub rooms_visited: Vec<String>,
    #[serde(default)]
    pub challenges_solved: Vec<String>,
}

impl Player {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            rooms_visited: Vec::new(),
            challenges_solved: Vec::new(),
        }
    }

    pub fn has_visited(&self, room_id: &str) -> bool {
        self.rooms_visited.iter().any(|r| r == room_id)
    }

    pub fn has_solved(&self, room_id: &str) -> bool {
        self.challenges_solved.iter().any(|r| r == room_id)
    }
}
