//! Free-text answer matching.
//!
//! An answer is accepted when both sides normalize to the same text, or when
//! the scorer rates them strictly above the configured threshold.

use serde::{Deserialize, Serialize};

use super::normalize::{normalize_with_articles, DEFAULT_ARTICLES};
use super::similarity::{DiceBigram, SimilarityScorer};

/// Similarity a fuzzy match must exceed when nothing else is configured.
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Strictness knobs for [`AnswerMatcher`]. Loaded from `[matcher]` in config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSettings {
    /// Fuzzy matches need a score strictly greater than this.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Leading words dropped during normalization (first hit only).
    #[serde(default = "default_articles")]
    pub articles: Vec<String>,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_articles() -> Vec<String> {
    DEFAULT_ARTICLES.iter().map(|a| a.to_string()).collect()
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            articles: default_articles(),
        }
    }
}

impl MatchSettings {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_articles<I, S>(mut self, articles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.articles = articles.into_iter().map(Into::into).collect();
        self
    }
}

/// Full record of one comparison. `accepted` is the decision.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    pub normalized_input: String,
    pub normalized_answer: String,
    /// 1.0 on an exact match; the scorer's rating otherwise.
    pub score: f64,
    pub exact: bool,
    pub accepted: bool,
}

/// Decides whether a submission counts as the canonical answer.
pub struct AnswerMatcher {
    settings: MatchSettings,
    scorer: Box<dyn SimilarityScorer>,
}

impl std::fmt::Debug for AnswerMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnswerMatcher")
            .field("settings", &self.settings)
            .field("scorer", &self.scorer.name())
            .finish()
    }
}

impl Default for AnswerMatcher {
    fn default() -> Self {
        Self::new(MatchSettings::default())
    }
}

impl AnswerMatcher {
    /// Matcher scoring with [`DiceBigram`].
    pub fn new(settings: MatchSettings) -> Self {
        Self::with_scorer(settings, DiceBigram)
    }

    pub fn with_scorer<S>(settings: MatchSettings, scorer: S) -> Self
    where
        S: SimilarityScorer + 'static,
    {
        Self {
            settings,
            scorer: Box::new(scorer),
        }
    }

    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    pub fn scorer(&self) -> &dyn SimilarityScorer {
        self.scorer.as_ref()
    }

    pub fn normalize(&self, input: &str) -> String {
        normalize_with_articles(input, self.settings.articles.as_slice())
    }

    pub fn evaluate(&self, user_input: &str, correct_answer: &str) -> MatchOutcome {
        let normalized_input = self.normalize(user_input);
        let normalized_answer = self.normalize(correct_answer);

        if normalized_input == normalized_answer {
            return MatchOutcome {
                normalized_input,
                normalized_answer,
                score: 1.0,
                exact: true,
                accepted: true,
            };
        }

        let score = self.scorer.score(&normalized_input, &normalized_answer);
        MatchOutcome {
            accepted: score > self.settings.threshold,
            normalized_input,
            normalized_answer,
            score,
            exact: false,
        }
    }

    pub fn matches(&self, user_input: &str, correct_answer: &str) -> bool {
        self.evaluate(user_input, correct_answer).accepted
    }
}

/// Check an answer with the default threshold, articles and scorer.
pub fn matches(user_input: &str, correct_answer: &str) -> bool {
    AnswerMatcher::default().matches(user_input, correct_answer)
}
