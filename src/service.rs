use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use ac_core::{Config, Suggestion, Trie};
use tracing::{debug, info};

use crate::AutocompleteError;

/// The operations an interactive caller needs from the engine.
///
/// "Not found" is never an error: unknown prefixes give an empty list and
/// unknown words are ignored by `record_selection`.
pub trait AutocompleteService: Send + Sync {
    fn search(&self, prefix: &str, limit: usize) -> Result<Vec<Suggestion>, AutocompleteError>;
    fn add_word(&self, word: &str, score: f64) -> Result<(), AutocompleteError>;
    fn record_selection(&self, word: &str) -> Result<(), AutocompleteError>;
    fn cleanup(&self, max_age: Duration) -> Result<(), AutocompleteError>;
}

pub struct TrieAutocompleteService {
    trie: Mutex<Trie>,
    config: Config,
}

impl TrieAutocompleteService {
    pub fn new(config: Config) -> Result<Self, AutocompleteError> {
        Self::with_vocabulary(config, std::iter::empty::<(&str, f64)>())
    }

    /// Build the engine and seed it with `(word, score)` pairs.
    pub fn with_vocabulary<I, S>(config: Config, vocabulary: I) -> Result<Self, AutocompleteError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new(&config)?;
        for (word, score) in vocabulary {
            trie.insert(word.as_ref(), score);
        }
        info!(
            words = trie.len(),
            cache_capacity = config.cache.capacity,
            "autocomplete service ready"
        );
        Ok(Self {
            trie: Mutex::new(trie),
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn lock(&self) -> Result<MutexGuard<'_, Trie>, AutocompleteError> {
        self.trie
            .lock()
            .map_err(|e| AutocompleteError::Internal { msg: e.to_string() })
    }

    /// Search with the configured `search.max_results` limit.
    pub fn search_default(&self, prefix: &str) -> Result<Vec<Suggestion>, AutocompleteError> {
        self.search(prefix, self.config.search.max_results)
    }

    /// Like `cleanup`, but reports how many nodes were pruned.
    pub fn prune(&self, max_age: Duration) -> Result<usize, AutocompleteError> {
        Ok(self.lock()?.cleanup(max_age))
    }

    /// Prune with the configured `cleanup.max_age_secs`.
    pub fn cleanup_default(&self) -> Result<usize, AutocompleteError> {
        self.prune(self.config.cleanup_age())
    }

    /// Number of stored words.
    pub fn len(&self) -> Result<usize, AutocompleteError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, AutocompleteError> {
        Ok(self.lock()?.is_empty())
    }

    /// Current snapshot of one word, if stored.
    pub fn lookup(&self, word: &str) -> Result<Option<Suggestion>, AutocompleteError> {
        Ok(self.lock()?.get(word))
    }
}

impl AutocompleteService for TrieAutocompleteService {
    fn search(&self, prefix: &str, limit: usize) -> Result<Vec<Suggestion>, AutocompleteError> {
        Ok(self.lock()?.search(prefix, limit))
    }

    fn add_word(&self, word: &str, score: f64) -> Result<(), AutocompleteError> {
        self.lock()?.insert(word, score);
        Ok(())
    }

    fn record_selection(&self, word: &str) -> Result<(), AutocompleteError> {
        let recorded = self.lock()?.record_selection(word);
        if !recorded {
            debug!(word, "selection ignored");
        }
        Ok(())
    }

    fn cleanup(&self, max_age: Duration) -> Result<(), AutocompleteError> {
        self.prune(max_age).map(|_| ())
    }
}
