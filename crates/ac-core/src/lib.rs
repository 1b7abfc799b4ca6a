//! In-memory prefix autocomplete engine.
//!
//! `Trie` stores weighted words, ranks completions with the composite score
//! in [`ranking`], memoizes ranked results in a [`cache::ResultCache`] and
//! prunes entries that have not been used for a configured age.

pub mod cache;
pub mod ranking;
pub mod settings;
pub mod suggestion;
pub mod trie;

pub use settings::{Config, ConfigError, ScoreWeights};
pub use suggestion::Suggestion;
pub use trie::Trie;
