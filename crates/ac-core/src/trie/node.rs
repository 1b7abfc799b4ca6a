use std::collections::BTreeMap;
use std::time::Duration;

use crate::suggestion::Suggestion;

/// One prefix node. The word lives only on terminal nodes.
#[derive(Debug, Default)]
pub(crate) struct Node {
    pub children: BTreeMap<char, Node>,
    pub word: Option<String>,
    pub score: f64,
    pub frequency: u32,
    /// epoch seconds, 0 = never selected
    pub last_used: u64,
    pub updated_at: u64,
}

impl Node {
    pub fn is_terminal(&self) -> bool {
        self.word.is_some()
    }

    /// Follow `key` one character at a time.
    pub fn descend(&self, key: &str) -> Option<&Node> {
        key.chars()
            .try_fold(self, |node, ch| node.children.get(&ch))
    }

    pub fn descend_mut(&mut self, key: &str) -> Option<&mut Node> {
        key.chars()
            .try_fold(self, |node, ch| node.children.get_mut(&ch))
    }

    /// Walk `key`, creating missing nodes along the way.
    pub fn descend_or_insert(&mut self, key: &str) -> &mut Node {
        key.chars()
            .fold(self, |node, ch| node.children.entry(ch).or_default())
    }

    pub fn snapshot(&self) -> Option<Suggestion> {
        self.word.as_ref().map(|word| Suggestion {
            word: word.clone(),
            score: self.score,
            frequency: self.frequency,
            last_used: self.last_used,
        })
    }

    /// Snapshot every terminal node in this subtree, depth first.
    pub fn collect(&self, out: &mut Vec<Suggestion>) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.extend(node.snapshot());
            stack.extend(node.children.values());
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        let mut total = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            total += 1;
            stack.extend(node.children.values());
        }
        total
    }

    pub fn word_count(&self) -> usize {
        let mut total = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            total += usize::from(node.is_terminal());
            stack.extend(node.children.values());
        }
        total
    }

    pub fn is_stale(&self, now: u64, max_age: Duration) -> bool {
        self.last_used != 0 && Duration::from_secs(now.saturating_sub(self.last_used)) > max_age
    }

    fn is_removable(&self, now: u64, max_age: Duration) -> bool {
        self.children.is_empty() && (!self.is_terminal() || self.is_stale(now, max_age))
    }

    /// Post-order prune of dead descendants. `self` is never removed here;
    /// the caller decides that. Returns the number of nodes dropped.
    pub fn prune_children(&mut self, now: u64, max_age: Duration) -> usize {
        let mut removed = 0;
        self.children.retain(|_, child| {
            removed += child.prune_children(now, max_age);
            if child.is_removable(now, max_age) {
                removed += 1;
                false
            } else {
                true
            }
        });
        removed
    }
}
