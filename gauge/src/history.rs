//! Rolling conversion history

use std::collections::VecDeque;
use serde::Serialize;

/// Maximum number of entries kept
pub const HISTORY_CAPACITY: usize = 10;

/// Bounded FIFO of human-readable conversion records, oldest first
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct History {
    entries: VecDeque<String>,
}

impl History {
    pub fn new() -> Self {
        Self { entries: VecDeque::with_capacity(HISTORY_CAPACITY + 1) }
    }

    /// Append an entry, evicting the oldest once over capacity
    pub fn record(&mut self, entry: impl Into<String>) {
        self.entries.push_back(entry.into());
        while self.entries.len() > HISTORY_CAPACITY {
            self.entries.pop_front();
        }
    }

    /// Entries oldest first, most recent last
    pub fn list(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        HISTORY_CAPACITY
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// `"{category}:\n{value} {from} = {result} {to}"`
pub fn format_entry(category: &str, value: &str, from: &str, result: &str, to: &str) -> String {
    format!("{}:\n{} {} = {} {}", category, value, from, result, to)
}
