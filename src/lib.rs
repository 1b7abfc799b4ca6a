//! Autocomplete service facade over the `ac-core` prefix engine.
//!
//! [`TrieAutocompleteService`] owns one [`Trie`](ac_core::Trie) behind a
//! single mutex: search, insert, selection and cleanup are fully serialized
//! because a search may write to the result cache.

mod error;
mod service;
mod trace_init;

pub use ac_core::settings::{self, Config, ConfigError, ScoreWeights};
pub use ac_core::Suggestion;
pub use error::AutocompleteError;
pub use service::{AutocompleteService, TrieAutocompleteService};
pub use trace_init::{init_tracing, trace_file, DEFAULT_TRACE_FILTER, TRACE_FILTER_ENV};

pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
