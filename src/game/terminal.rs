//! Line-oriented front end for a pass-the-keyboard game.
//!
//! Reads commands and answers from any `BufRead` and writes prompts to any
//! `Write`, so the binary drives it from stdin/stdout and tests drive it from
//! byte buffers.

use std::io::{BufRead, Write};

use anyhow::Result;
use log::{info, warn};
use rand::Rng;

use crate::answer::{best_match, AnswerMatcher};
use crate::config::Config;
use crate::game::{GameState, RiddleSession, RiddleTable, Room};
use crate::metrics;

/// Room-name guesses scoring at or below this are not followed.
const ROOM_SUGGESTION_MIN: f64 = 0.5;

pub struct Terminal<'a, R, W> {
    config: &'a Config,
    matcher: AnswerMatcher,
    table: RiddleTable,
    state: GameState,
    input: R,
    out: W,
}

enum Step<T> {
    Value(T),
    Quit,
}

impl<'a, R: BufRead, W: Write> Terminal<'a, R, W> {
    pub fn new(config: &'a Config, input: R, out: W) -> Result<Self> {
        Self::with_matcher(config, config.matcher(), input, out)
    }

    /// Like [`Terminal::new`] with a caller-built matcher, e.g. one with a
    /// different scorer. Room-name suggestions go through the same scorer.
    pub fn with_matcher(
        config: &'a Config,
        matcher: AnswerMatcher,
        input: R,
        out: W,
    ) -> Result<Self> {
        Ok(Self {
            matcher,
            table: config.riddle_table()?,
            state: config.new_game()?,
            config,
            input,
            out,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Hand back the writer, e.g. to inspect a buffered transcript.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run until the player quits or input ends, then print the standings.
    pub fn run<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<()> {
        writeln!(self.out, "🐠 {}", self.config.game.name)?;
        if !self.config.game.welcome_message.is_empty() {
            writeln!(self.out, "{}", self.config.game.welcome_message)?;
        }

        loop {
            let player_id = match self.choose_player()? {
                Step::Value(id) => id,
                Step::Quit => break,
            };
            self.state.select_player(&player_id)?;

            let room = match self.choose_room()? {
                Step::Value(room) => room,
                Step::Quit => break,
            };
            let Some(room) = room else {
                continue;
            };

            let Some(riddle) = self.table.random_for(&room.id, rng).cloned() else {
                writeln!(self.out, "{} has no riddle today, only a mini-game.", room.name)?;
                continue;
            };

            let mut session = match RiddleSession::start(&self.state, &room.id, riddle) {
                Ok(session) => session,
                Err(e) => {
                    writeln!(self.out, "{}", e)?;
                    continue;
                }
            };
            if let Step::Quit = self.ask_riddle(&room, &mut session)? {
                break;
            }
        }

        self.print_standings()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn choose_player(&mut self) -> Result<Step<String>> {
        loop {
            writeln!(self.out)?;
            writeln!(self.out, "Who is playing?")?;
            for player in self.state.players() {
                writeln!(
                    self.out,
                    "  {}) {} ({} solved)",
                    player.id,
                    player.name,
                    player.challenges_solved.len()
                )?;
            }
            write!(self.out, "Player (q to quit): ")?;
            self.out.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(Step::Quit);
            };
            if line.eq_ignore_ascii_case("q") {
                return Ok(Step::Quit);
            }
            let found = self
                .state
                .players()
                .iter()
                .find(|p| p.id == line || p.name.eq_ignore_ascii_case(&line))
                .map(|p| p.id.clone());
            match found {
                Some(id) => return Ok(Step::Value(id)),
                None => writeln!(self.out, "No player called '{}'.", line)?,
            }
        }
    }

    /// `Value(None)` means the player typed something we could not place.
    fn choose_room(&mut self) -> Result<Step<Option<Room>>> {
        writeln!(self.out, "Rooms:")?;
        for room in self.state.rooms() {
            let status = match self.state.solved_by(&room.id) {
                Some(p) => format!("solved by {}", p.name),
                None if !self.table.has_riddles(&room.id) => "mini-game only".to_string(),
                None => "open".to_string(),
            };
            writeln!(self.out, "  {:<16} {:<18} {}", room.id, room.name, status)?;
        }
        write!(self.out, "Room: ")?;
        self.out.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(Step::Quit);
        };
        Ok(Step::Value(self.resolve_room(&line)?))
    }

    fn resolve_room(&mut self, query: &str) -> Result<Option<Room>> {
        let rooms = self.state.rooms();
        if let Some(room) = rooms
            .iter()
            .find(|r| r.id.eq_ignore_ascii_case(query) || r.name.eq_ignore_ascii_case(query))
        {
            return Ok(Some(room.clone()));
        }

        let wanted = self.matcher.normalize(query);
        let names: Vec<String> = rooms.iter().map(|r| self.matcher.normalize(&r.name)).collect();
        match best_match(self.matcher.scorer(), &wanted, names.as_slice()) {
            Some(found) if found.best().rating > ROOM_SUGGESTION_MIN => {
                let room = rooms[found.best_index].clone();
                writeln!(self.out, "Heading to {} (closest match).", room.name)?;
                Ok(Some(room))
            }
            _ => {
                writeln!(self.out, "No room like '{}'.", query)?;
                Ok(None)
            }
        }
    }

    fn ask_riddle(&mut self, room: &Room, session: &mut RiddleSession) -> Result<Step<()>> {
        writeln!(self.out)?;
        writeln!(self.out, "[{}] {}", room.name, session.question())?;
        loop {
            write!(self.out, "Answer (blank to give up): ")?;
            self.out.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(Step::Quit);
            };
            if line.is_empty() {
                writeln!(self.out, "The answer was: {}", session.answer())?;
                return Ok(Step::Value(()));
            }

            let result = match session.submit(&mut self.state, &self.matcher, &line) {
                Ok(result) => result,
                Err(e) => {
                    warn!("submission rejected: {}", e);
                    writeln!(self.out, "{}", e)?;
                    return Ok(Step::Value(()));
                }
            };

            if result.correct {
                writeln!(self.out, "{}", result.feedback)?;
                if !result.credited {
                    let holder = self
                        .state
                        .solved_by(&room.id)
                        .map(|p| p.name.clone())
                        .unwrap_or_default();
                    writeln!(self.out, "{} already claimed this room; no extra credit.", holder)?;
                }
                return Ok(Step::Value(()));
            }

            if self.config.game.show_scores {
                writeln!(self.out, "{} (closeness {:.2})", result.feedback, result.outcome.score)?;
            } else {
                writeln!(self.out, "{}", result.feedback)?;
            }
        }
    }

    fn print_standings(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Standings:")?;
        for (rank, player) in self.state.leaderboard().iter().enumerate() {
            writeln!(
                self.out,
                "  {}. {} - {} solved, {} visited",
                rank + 1,
                player.name,
                player.challenges_solved.len(),
                player.rooms_visited.len()
            )?;
        }
        let snap = metrics::snapshot();
        info!(
            "game over: submissions={} solves={}",
            snap.submissions, snap.solves
        );
        Ok(())
    }
}
