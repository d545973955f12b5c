//! # Riddlereef - Riddle Party Game for Reef Town
//!
//! Players wander a fish-themed town of shops ("rooms"). Each room poses a riddle that is
//! answered in free text. The heart of the crate is the answer checker, which forgives
//! case, punctuation, a leading article and small typos.
//!
//! ## Features
//!
//! - **Fuzzy Answer Checking**: normalization plus bigram Dice similarity with a configurable threshold.
//! - **Pluggable Scoring**: any [`answer::SimilarityScorer`] can back the matcher.
//! - **Riddle Content**: 60 riddles across 12 shops, embedded as JSON and overridable from disk.
//! - **Game Progress**: per-player visits, first-solver credit and miss counters.
//! - **Terminal Play**: a `play` command that runs a pass-the-keyboard game on stdin.
//!
//! ## Quick Start
//!
//! ```rust
//! use riddlereef::answer::{matches, AnswerMatcher, MatchSettings};
//!
//! assert!(matches("The Eiffel Tower!!", "eiffel tower"));
//!
//! let strict = AnswerMatcher::new(MatchSettings::default().with_threshold(0.95));
//! assert!(!strict.matches("slot machne", "slot machine"));
//! ```
//!
//! ## Module Organization
//!
//! - [`answer`] - normalization, similarity scoring and the answer matcher
//! - [`game`] - rooms, players, riddle content and riddle sessions
//! - [`config`] - configuration management and validation
//! - [`metrics`] - in-process submission counters
//! - [`logutil`] - log-safe escaping of player input
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   CLI / UI      │ ← reads input, shows feedback
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │   Game Layer    │ ← rooms, players, riddle sessions
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │ Answer Matcher  │ ← pure: (input, answer) → bool
//! └─────────────────┘
//! ```

pub mod answer;
pub mod config;
pub mod game;
pub mod logutil;
pub mod metrics;
