//! Fixed-capacity, least-recently-used cache of ranked search results.
//!
//! Keys are the raw query prefixes as typed by the caller. Each slot also
//! remembers the limit it was computed with, so a later query asking for more
//! results than were kept is a miss instead of a silently short answer.

use std::collections::{BTreeMap, HashMap};

use crate::suggestion::Suggestion;
use crate::trie::normalize;

struct Slot {
    limit: usize,
    results: Vec<Suggestion>,
    tick: u64,
}

impl Slot {
    /// True when this slot holds the full top-`limit` answer.
    fn covers(&self, limit: usize) -> bool {
        limit <= self.limit || self.results.len() < self.limit
    }
}

pub struct ResultCache {
    capacity: usize,
    entries: HashMap<String, Slot>,
    /// access tick → key, oldest first
    order: BTreeMap<u64, String>,
    tick: u64,
}

impl ResultCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity.min(1024)),
            order: BTreeMap::new(),
            tick: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.entries.contains_key(prefix)
    }

    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    /// Look up a prefix, marking it most recently used on a hit.
    pub fn get(&mut self, prefix: &str, limit: usize) -> Option<Vec<Suggestion>> {
        let tick = self.next_tick();
        let slot = self.entries.get_mut(prefix)?;
        if !slot.covers(limit) {
            return None;
        }
        self.order.remove(&slot.tick);
        slot.tick = tick;
        self.order.insert(tick, prefix.to_string());
        Some(slot.results.iter().take(limit).cloned().collect())
    }

    /// Store a ranked result list, evicting the least recently used entry
    /// when the cache is full.
    pub fn put(&mut self, prefix: String, limit: usize, results: Vec<Suggestion>) {
        if self.capacity == 0 {
            return;
        }
        let tick = self.next_tick();
        if let Some(old) = self.entries.remove(&prefix) {
            self.order.remove(&old.tick);
        } else if self.entries.len() >= self.capacity {
            if let Some((_, lru_key)) = self.order.pop_first() {
                self.entries.remove(&lru_key);
            }
        }
        self.order.insert(tick, prefix.clone());
        self.entries.insert(
            prefix,
            Slot {
                limit,
                results,
                tick,
            },
        );
    }

    pub fn remove(&mut self, prefix: &str) -> bool {
        match self.entries.remove(prefix) {
            Some(slot) => {
                self.order.remove(&slot.tick);
                true
            }
            None => false,
        }
    }

    /// Drop every entry whose case-folded prefix leads to `word`.
    ///
    /// `word` must already be case-folded. Returns the number of entries removed.
    pub fn invalidate_word(&mut self, word: &str) -> usize {
        let stale: Vec<String> = self
            .entries
            .keys()
            .filter(|key| word.starts_with(normalize(key).as_str()))
            .cloned()
            .collect();
        for key in &stale {
            self.remove(key);
        }
        stale.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(words: &[&str]) -> Vec<Suggestion> {
        words
            .iter()
            .map(|w| Suggestion {
                word: w.to_string(),
                score: 1.0,
                frequency: 0,
                last_used: 0,
            })
            .collect()
    }

    fn words(results: &[Suggestion]) -> Vec<&str> {
        results.iter().map(|s| s.word.as_str()).collect()
    }

    #[test]
    fn test_get_miss_on_empty() {
        let mut c = ResultCache::new(2);
        assert!(c.get("a", 5).is_none());
        assert!(c.is_empty());
    }

    #[test]
    fn test_put_then_get() {
        let mut c = ResultCache::new(2);
        c.put("el".into(), 5, list(&["elastic", "elephant"]));
        let hit = c.get("el", 5).unwrap();
        assert_eq!(words(&hit), vec!["elastic", "elephant"]);
    }

    #[test]
    fn test_evicts_least_recently_used() {
        let mut c = ResultCache::new(2);
        c.put("a".into(), 5, list(&["a"]));
        c.put("b".into(), 5, list(&["b"]));
        // touch "a" so "b" becomes the eviction victim
        assert!(c.get("a", 5).is_some());
        c.put("c".into(), 5, list(&["c"]));
        assert_eq!(c.len(), 2);
        assert!(c.contains("a"));
        assert!(!c.contains("b"));
        assert!(c.contains("c"));
    }

    #[test]
    fn test_overwrite_does_not_evict() {
        let mut c = ResultCache::new(2);
        c.put("a".into(), 5, list(&["a"]));
        c.put("b".into(), 5, list(&["b"]));
        c.put("a".into(), 5, list(&["a2"]));
        assert_eq!(c.len(), 2);
        assert_eq!(words(&c.get("a", 5).unwrap()), vec!["a2"]);
        assert!(c.contains("b"));
    }

    #[test]
    fn test_smaller_limit_is_truncated_hit() {
        let mut c = ResultCache::new(4);
        c.put("e".into(), 3, list(&["x", "y", "z"]));
        assert_eq!(words(&c.get("e", 2).unwrap()), vec!["x", "y"]);
    }

    #[test]
    fn test_larger_limit_misses_when_truncated() {
        let mut c = ResultCache::new(4);
        c.put("e".into(), 2, list(&["x", "y"]));
        assert!(c.get("e", 3).is_none());
    }

    #[test]
    fn test_larger_limit_hits_when_exhaustive() {
        let mut c = ResultCache::new(4);
        c.put("e".into(), 5, list(&["x", "y"]));
        assert_eq!(words(&c.get("e", 50).unwrap()), vec!["x", "y"]);
    }

    #[test]
    fn test_invalidate_word_uses_case_folded_keys() {
        let mut c = ResultCache::new(8);
        c.put("EL".into(), 5, list(&["elastic"]));
        c.put("ela".into(), 5, list(&["elastic"]));
        c.put("elb".into(), 5, list(&["elbow"]));
        c.put("x".into(), 5, list(&[]));
        assert_eq!(c.invalidate_word("elastic"), 2);
        assert!(!c.contains("EL"));
        assert!(!c.contains("ela"));
        assert!(c.contains("elb"));
        assert!(c.contains("x"));
    }

    #[test]
    fn test_invalidate_word_folds_final_sigma_per_char() {
        let mut c = ResultCache::new(4);
        c.put("ΟΔΟΣ".into(), 5, list(&["οδοστρωμα"]));
        assert_eq!(c.invalidate_word("οδοστρωμα"), 1);
        assert!(c.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut c = ResultCache::new(2);
        c.put("a".into(), 5, list(&["a"]));
        c.clear();
        assert!(c.is_empty());
        assert!(c.get("a", 5).is_none());
    }

    #[test]
    fn test_zero_capacity_stores_nothing() {
        let mut c = ResultCache::new(0);
        c.put("a".into(), 5, list(&["a"]));
        assert!(c.is_empty());
    }
}
