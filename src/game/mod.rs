//! # Game Layer
//!
//! Everything around the answer checker that a round of the riddle game needs:
//!
//! - [`types`] - rooms, players and riddles
//! - [`seed_loader`] - JSON content loading (embedded defaults or files on disk)
//! - [`riddles`] - the room id → riddles lookup table
//! - [`state`] - per-game progress (visits, credited solves, miss counters)
//! - [`session`] - one riddle attempt loop wired to the matcher
//! - [`terminal`] - line-oriented front end used by the `play` command
//!
//! ```rust
//! use riddlereef::answer::AnswerMatcher;
//! use riddlereef::game::{GameState, RiddleSession, RiddleTable};
//! use riddlereef::game::seed_loader::builtin_rooms;
//!
//! # fn main() -> Result<(), riddlereef::game::GameError> {
//! let table = RiddleTable::builtin()?;
//! let mut state = GameState::with_player_names(&["Coral", "Finley"], builtin_rooms()?);
//! state.select_player("1")?;
//!
//! let riddle = table.riddles_for("gambling-den")[3].clone();
//! let mut session = RiddleSession::start(&state, "gambling-den", riddle)?;
//! let result = session.submit(&mut state, &AnswerMatcher::default(), "a slot machne")?;
//! assert!(result.correct);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod riddles;
pub mod seed_loader;
pub mod session;
pub mod state;
pub mod terminal;
pub mod types;

pub use errors::GameError;
pub use riddles::RiddleTable;
pub use session::{RiddleSession, Submission};
pub use state::GameState;
pub use types::{Player, Riddle, Room};
