//! One riddle attempt loop for one room.
//!
//! Glue between the answer matcher and [`GameState`]: a correct reply
//! marks the room visited and credits the solver; a wrong one bumps the
//! player's miss counter for the room.

use log::{debug, info};

use crate::answer::{AnswerMatcher, MatchOutcome};
use crate::game::state::GameState;
use crate::game::types::Riddle;
use crate::game::GameError;
use crate::logutil::escape_log;
use crate::metrics;

pub const CORRECT_FEEDBACK: &str = "Correct!";
pub const WRONG_FEEDBACK: &str = "Try again.";

/// Result of one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub correct: bool,
    /// False when the room had already been credited to someone.
    pub credited: bool,
    pub feedback: &'static str,
    /// Misses for this player in this room after the submission.
    pub attempts: u32,
    pub outcome: MatchOutcome,
}

#[derive(Debug, Clone)]
pub struct RiddleSession {
    room_id: String,
    riddle: Riddle,
    solved: bool,
}

impl RiddleSession {
    /// Open a session. The room must exist and be unlocked.
    pub fn start(state: &GameState, room_id: &str, riddle: Riddle) -> Result<Self, GameError> {
        let room = state
            .find_room(room_id)
            .ok_or_else(|| GameError::UnknownRoom(room_id.to_string()))?;
        if !room.unlocked {
            return Err(GameError::RoomLocked(room_id.to_string()));
        }
        debug!("riddle session opened for {}", room_id);
        Ok(Self {
            room_id: room_id.to_string(),
            riddle,
            solved: false,
        })
    }

    pub fn room_id(&self) -> &str {
        &self.room_id
    }

    pub fn question(&self) -> &str {
        &self.riddle.question
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Reveal the canonical answer (used when a player gives up).
    pub fn answer(&self) -> &str {
        &self.riddle.answer
    }

    pub fn submit(
        &mut self,
        state: &mut GameState,
        matcher: &AnswerMatcher,
        input: &str,
    ) -> Result<Submission, GameError> {
        let player_id = state
            .current_player()
            .map(|p| p.id.clone())
            .ok_or(GameError::NoActivePlayer)?;

        let outcome = matcher.evaluate(input, &self.riddle.answer);
        debug!(
            "room={} player={} input=\"{}\" score={:.3} exact={}",
            self.room_id,
            player_id,
            escape_log(input),
            outcome.score,
            outcome.exact
        );

        if outcome.accepted {
            state.mark_room_visited(&self.room_id);
            let credited = state.mark_challenge_solved(&self.room_id);
            self.solved = true;
            metrics::record_solve(&self.room_id);
            info!("player {} answered {} correctly", player_id, self.room_id);
            Ok(Submission {
                correct: true,
                credited,
                feedback: CORRECT_FEEDBACK,
                attempts: state.attempts_for_room(&player_id, &self.room_id),
                outcome,
            })
        } else {
            let attempts = state.increment_attempts_for_room(&player_id, &self.room_id);
            metrics::record_miss(&self.room_id);
            Ok(Submission {
                correct: false,
                credited: false,
                feedback: WRONG_FEEDBACK,
                attempts,
                outcome,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Room;

    fn setup() -> GameState {
        let mut state = GameState::with_player_names(
            &["Coral", "Finley"],
            vec![
                Room::new("fish-pub", "Fish Pub"),
                Room::new("museum", "Museum").locked(),
            ],
        );
        state.select_player("1").expect("player");
        state
    }

    #[test]
    fn locked_and_unknown_rooms_rejected() {
        let state = setup();
        let riddle = Riddle::new("q", "a");
        assert!(matches!(
            RiddleSession::start(&state, "museum", riddle.clone()),
            Err(GameError::RoomLocked(_))
        ));
        assert!(matches!(
            RiddleSession::start(&state, "attic", riddle),
            Err(GameError::UnknownRoom(_))
        ));
    }

    #[test]
    fn wrong_then_right() {
        let mut state = setup();
        let matcher = AnswerMatcher::default();
        let mut session =
            RiddleSession::start(&state, "fish-pub", Riddle::new("Foamy?", "beer")).expect("start");

        let miss = session.submit(&mut state, &matcher, "wine").expect("submit");
        assert!(!miss.correct);
        assert_eq!(miss.feedback, WRONG_FEEDBACK);
        assert_eq!(miss.attempts, 1);
        assert!(!session.is_solved());

        let hit = session.submit(&mut state, &matcher, "Beer!!").expect("submit");
        assert!(hit.correct);
        assert!(hit.credited);
        assert_eq!(hit.feedback, CORRECT_FEEDBACK);
        assert_eq!(hit.attempts, 1);
        assert!(session.is_solved());

        let coral = state.find_player("1").expect("coral");
        assert!(coral.has_visited("fish-pub"));
        assert!(coral.has_solved("fish-pub"));
    }

    #[test]
    fn second_solver_gets_no_credit() {
        let mut state = setup();
        let matcher = AnswerMatcher::default();
        let riddle = Riddle::new("Foamy?", "beer");
        let mut first = RiddleSession::start(&state, "fish-pub", riddle.clone()).expect("start");
        first.submit(&mut state, &matcher, "beer").expect("submit");

        state.select_player("2").expect("player");
        let mut second = RiddleSession::start(&state, "fish-pub", riddle).expect("start");
        let result = second.submit(&mut state, &matcher, "beer").expect("submit");
        assert!(result.correct);
        assert!(!result.credited);
        assert!(state.find_player("2").expect("finley").has_visited("fish-pub"));
    }

    #[test]
    fn requires_player() {
        let mut state = GameState::with_player_names(&["Coral"], vec![Room::new("fish-pub", "Fish Pub")]);
        let matcher = AnswerMatcher::default();
        let mut session =
            RiddleSession::start(&state, "fish-pub", Riddle::new("Foamy?", "beer")).expect("start");
        assert!(matches!(
            session.submit(&mut state, &matcher, "beer"),
            Err(GameError::NoActivePlayer)
        ));
    }
}
