//! Mutable prefix tree with ranked completion, usage tracking and pruning.
//!
//! Words are case-folded on every entry point, so "Elastic" and "ELASTIC"
//! share one node. `Trie` itself has no interior locking; callers that share
//! it across threads wrap it in a `Mutex` (the cache is mutated on reads).
//!
//! Every time-dependent operation has an `_at` variant taking the current
//! instant as Unix epoch seconds.

mod node;

use std::time::Duration;

use tracing::{debug, debug_span, trace};

use crate::cache::ResultCache;
use crate::ranking::{now_epoch, sort_suggestions};
use crate::settings::{Config, ConfigError, ScoreWeights};
use crate::suggestion::Suggestion;

use node::Node;

/// Canonical case used for keys and stored words.
///
/// Folds per character, so the fold of a prefix is a prefix of the fold of
/// the word. `str::to_lowercase` breaks that for a word-final `Σ`.
pub fn normalize(word: &str) -> String {
    word.chars().flat_map(char::to_lowercase).collect()
}

pub struct Trie {
    root: Node,
    cache: ResultCache,
    weights: ScoreWeights,
    words: usize,
}

impl Trie {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            root: Node::default(),
            cache: ResultCache::new(config.cache.capacity),
            weights: config.weights,
            words: 0,
        })
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.root.count()
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Snapshot of a stored word, if present.
    pub fn get(&self, word: &str) -> Option<Suggestion> {
        let key = normalize(word);
        if key.is_empty() {
            return None;
        }
        self.root.descend(&key).and_then(Node::snapshot)
    }

    pub fn insert(&mut self, word: &str, score: f64) {
        self.insert_at(word, score, now_epoch());
    }

    /// Insert or re-score a word. Usage history of an existing word is kept.
    pub fn insert_at(&mut self, word: &str, score: f64, now: u64) {
        let key = normalize(word);
        if key.is_empty() {
            debug!("ignoring empty word");
            return;
        }
        let node = self.root.descend_or_insert(&key);
        if node.word.is_none() {
            node.word = Some(key.clone());
            self.words += 1;
        }
        node.score = score;
        node.updated_at = now;
        let dropped = self.cache.invalidate_word(&key);
        trace!(word = key.as_str(), score, dropped, "insert");
    }

    pub fn search(&mut self, prefix: &str, limit: usize) -> Vec<Suggestion> {
        self.search_at(prefix, limit, now_epoch())
    }

    /// Ranked completions of `prefix`, at most `limit` of them.
    pub fn search_at(&mut self, prefix: &str, limit: usize, now: u64) -> Vec<Suggestion> {
        let _span = debug_span!("search", prefix, limit).entered();
        if prefix.is_empty() || limit == 0 {
            return Vec::new();
        }

        if let Some(hit) = self.cache.get(prefix, limit) {
            trace!(count = hit.len(), "cache hit");
            return hit;
        }

        let key = normalize(prefix);
        let Some(start) = self.root.descend(&key) else {
            debug!("prefix not found");
            return Vec::new();
        };

        let mut results = Vec::new();
        start.collect(&mut results);
        let candidates = results.len();
        sort_suggestions(&mut results, &self.weights, now);
        results.truncate(limit);

        debug!(candidates, returned = results.len(), "cache miss");
        self.cache.put(prefix.to_string(), limit, results.clone());
        results
    }

    pub fn record_selection(&mut self, word: &str) -> bool {
        self.record_selection_at(word, now_epoch())
    }

    /// Count one use of `word`. Only an exact terminal match is touched;
    /// returns `false` (and changes nothing) otherwise.
    pub fn record_selection_at(&mut self, word: &str, now: u64) -> bool {
        let key = normalize(word);
        if key.is_empty() {
            return false;
        }
        let Some(node) = self.root.descend_mut(&key) else {
            trace!(word = key.as_str(), "selection of unknown word");
            return false;
        };
        if node.word.as_deref() != Some(key.as_str()) {
            trace!(word = key.as_str(), "selection of non-terminal prefix");
            return false;
        }
        node.frequency = node.frequency.saturating_add(1);
        node.last_used = now;
        let frequency = node.frequency;
        self.cache.invalidate_word(&key);
        debug!(word = key.as_str(), frequency, "selection recorded");
        true
    }

    pub fn cleanup(&mut self, max_age: Duration) -> usize {
        self.cleanup_at(max_age, now_epoch())
    }

    /// Prune every node that is stale (or non-terminal) and has no live
    /// descendants. The root is never removed. Returns the number of nodes
    /// dropped.
    pub fn cleanup_at(&mut self, max_age: Duration, now: u64) -> usize {
        let _span = debug_span!("cleanup", max_age_secs = max_age.as_secs()).entered();
        let before = self.words;
        let removed = self.root.prune_children(now, max_age);
        if removed > 0 {
            self.words = self.root.word_count();
            self.cache.clear();
        }
        debug!(removed, words_before = before, words_after = self.words, "cleanup done");
        removed
    }
}
