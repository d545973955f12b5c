//! String similarity scoring.
//!
//! [`SimilarityScorer`] is the seam the matcher scores through; [`DiceBigram`]
//! is the default implementation. Scores are always within `0.0..=1.0`.

use std::collections::HashMap;

use crate::answer::normalize::is_separator;

/// A similarity metric over two strings.
pub trait SimilarityScorer: Send + Sync {
    /// Score `a` against `b`. 1.0 means identical, 0.0 means nothing shared.
    fn score(&self, a: &str, b: &str) -> f64;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Sørensen–Dice coefficient over character bigrams.
///
/// Whitespace is ignored entirely, so `"top hat"` and `"tophat"` score 1.0.
/// Two strings that are equal after whitespace removal (both empty included)
/// score 1.0; otherwise a side with fewer than two characters scores 0.0,
/// since no bigram can be formed from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiceBigram;

impl SimilarityScorer for DiceBigram {
    fn score(&self, a: &str, b: &str) -> f64 {
        dice_coefficient(a, b)
    }

    fn name(&self) -> &'static str {
        "dice-bigram"
    }
}

/// Bigram Dice coefficient of two strings. See [`DiceBigram`].
pub fn dice_coefficient(a: &str, b: &str) -> f64 {
    let first: Vec<char> = a.chars().filter(|&c| !is_separator(c)).collect();
    let second: Vec<char> = b.chars().filter(|&c| !is_separator(c)).collect();

    if first == second {
        return 1.0;
    }
    if first.len() < 2 || second.len() < 2 {
        return 0.0;
    }

    let mut remaining: HashMap<(char, char), usize> = HashMap::with_capacity(first.len());
    for pair in first.windows(2) {
        *remaining.entry((pair[0], pair[1])).or_insert(0) += 1;
    }

    let mut intersection = 0usize;
    for pair in second.windows(2) {
        if let Some(count) = remaining.get_mut(&(pair[0], pair[1])) {
            if *count > 0 {
                *count -= 1;
                intersection += 1;
            }
        }
    }

    let total = (first.len() - 1) + (second.len() - 1);
    (2 * intersection) as f64 / total as f64
}

/// Rating of one candidate in a [`best_match`] search.
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub target: String,
    pub rating: f64,
}

/// Result of rating one string against a list of candidates.
#[derive(Debug, Clone, PartialEq)]
pub struct BestMatch {
    /// One rating per candidate, in input order.
    pub ratings: Vec<Rating>,
    /// Index into `ratings` of the highest score. Earliest wins ties.
    pub best_index: usize,
}

impl BestMatch {
    pub fn best(&self) -> &Rating {
        &self.ratings[self.best_index]
    }
}

/// Rate `main` against every target and pick the closest.
///
/// Returns `None` for an empty target list.
pub fn best_match<S, T>(scorer: &S, main: &str, targets: &[T]) -> Option<BestMatch>
where
    S: SimilarityScorer + ?Sized,
    T: AsRef<str>,
{
    if targets.is_empty() {
        return None;
    }
    let mut ratings = Vec::with_capacity(targets.len());
    let mut best_index = 0;
    let mut best_rating = f64::NEG_INFINITY;
    for (idx, target) in targets.iter().enumerate() {
        let target = target.as_ref();
        let rating = scorer.score(main, target);
        if rating > best_rating {
            best_index = idx;
            best_rating = rating;
        }
        ratings.push(Rating {
            target: target.to_string(),
            rating,
        });
    }
    Some(BestMatch {
        ratings,
        best_index,
    })
}
