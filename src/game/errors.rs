use thiserror::Error;

/// Errors raised by the game layer around the answer checker.
#[derive(Debug, Error)]
pub enum GameError {
    /// Wrapper around IO errors (reading seed files, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Seed content could not be parsed.
    #[error("failed to parse {source_name}: {source}")]
    Json {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    /// Seed content parsed but breaks a content rule.
    #[error("invalid content in {source_name}: {reason}")]
    InvalidContent { source_name: String, reason: String },

    #[error("unknown player: {0}")]
    UnknownPlayer(String),

    #[error("unknown room: {0}")]
    UnknownRoom(String),

    /// An action needs a selected player and none is active.
    #[error("no player selected")]
    NoActivePlayer,

    #[error("room is locked: {0}")]
    RoomLocked(String),
}
