use serde::{Deserialize, Serialize};

/// Snapshot of a terminal node, detached from the live tree.
///
/// `score` is the static weight given at insert time; `last_used` is Unix
/// epoch seconds, `0` when the word has never been selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub word: String,
    pub score: f64,
    pub frequency: u32,
    pub last_used: u64,
}

impl Suggestion {
    pub fn is_used(&self) -> bool {
        self.last_used != 0
    }
}
