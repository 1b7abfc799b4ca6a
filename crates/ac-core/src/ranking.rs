//! Composite ranking: static weight × usage frequency × recency.
//!
//! `total = base * score + frequency_mult * frequency`, then entries that have
//! been used get `total * (1 + recency_mult / hours_since_last_used)`. Entries
//! that were never used (`last_used == 0`) sit in a lower tier of their own and
//! are ordered by `total` alone.

use std::cmp::Ordering;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::settings::ScoreWeights;
use crate::suggestion::Suggestion;

/// Floor for the elapsed-hours divisor (one minute).
pub const MIN_ELAPSED_HOURS: f64 = 1.0 / 60.0;

pub fn now_epoch() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Comparable rank of one entry at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rank {
    pub used: bool,
    pub total: f64,
}

impl Rank {
    /// Best-first ordering: used tier above never-used, then higher total.
    pub fn cmp_best_first(&self, other: &Rank) -> Ordering {
        other
            .used
            .cmp(&self.used)
            .then_with(|| other.total.total_cmp(&self.total))
    }
}

pub fn recency_multiplier(weights: &ScoreWeights, last_used: u64, now: u64) -> Option<f64> {
    if last_used == 0 {
        return None;
    }
    let hours = (now.saturating_sub(last_used) as f64 / 3600.0).max(MIN_ELAPSED_HOURS);
    Some(1.0 + weights.recency / hours)
}

pub fn rank(weights: &ScoreWeights, score: f64, frequency: u32, last_used: u64, now: u64) -> Rank {
    let total = weights.base * score + weights.frequency * f64::from(frequency);
    match recency_multiplier(weights, last_used, now) {
        Some(mult) => Rank {
            used: true,
            total: total * mult,
        },
        None => Rank {
            used: false,
            total,
        },
    }
}

pub fn rank_suggestion(weights: &ScoreWeights, s: &Suggestion, now: u64) -> Rank {
    rank(weights, s.score, s.frequency, s.last_used, now)
}

/// Sort best-first; equal ranks fall back to lexical word order.
pub fn sort_suggestions(suggestions: &mut [Suggestion], weights: &ScoreWeights, now: u64) {
    // Rank once per entry rather than once per comparison.
    suggestions.sort_by_cached_key(|s| RankKey {
        rank: rank_suggestion(weights, s, now),
        word: s.word.clone(),
    });
}

struct RankKey {
    rank: Rank,
    word: String,
}

impl PartialEq for RankKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankKey {}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp_best_first(&other.rank)
            .then_with(|| self.word.cmp(&other.word))
    }
}
