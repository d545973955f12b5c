//! # Answer Checking
//!
//! Decides whether a player's free-text reply to a riddle is correct.
//!
//! ## Pipeline
//!
//! ```text
//! raw input ──► normalize ──┐
//!                           ├─► equal? ──yes──► accept
//! canonical ──► normalize ──┘      │
//!                                  no
//!                                  ▼
//!                       SimilarityScorer::score > threshold ?
//! ```
//!
//! - [`normalize`] - case folding, punctuation removal, whitespace collapse, leading article strip
//! - [`similarity`] - the [`SimilarityScorer`] seam and the default [`DiceBigram`] metric
//! - [`matcher`] - [`AnswerMatcher`] and its [`MatchSettings`]
//!
//! Everything here is pure and synchronous; a matcher can be shared freely across threads.
//!
//! ```rust
//! use riddlereef::answer::matches;
//!
//! assert!(matches("The Eiffel Tower", "eiffel tower"));
//! assert!(!matches("dice", "roulette"));
//! ```

pub mod matcher;
pub mod normalize;
pub mod similarity;

pub use matcher::{matches, AnswerMatcher, MatchOutcome, MatchSettings, DEFAULT_THRESHOLD};
pub use normalize::{normalize, normalize_with_articles, DEFAULT_ARTICLES};
pub use similarity::{best_match, dice_coefficient, BestMatch, DiceBigram, Rating, SimilarityScorer};
