//! Bounded suggestion cache
//!
//! Keeps the most recent suggestions in insertion order. The backing ring
//! buffer is allocated once at capacity; pushing into a full cache evicts the
//! oldest entry.

use std::collections::VecDeque;

use super::suggestion::Suggestion;

#[derive(Debug)]
pub struct SuggestionCache {
    entries: VecDeque<Suggestion>,
    capacity: usize,
}

impl SuggestionCache {
    /// Create an empty cache holding at most `capacity` suggestions.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a suggestion, returning the evicted one if the cache was full
    pub fn push(&mut self, suggestion: Suggestion) -> Option<Suggestion> {
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(suggestion);
        evicted
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Suggestion> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&Suggestion> {
        self.entries.back()
    }
}

impl Default for SuggestionCache {
    fn default() -> Self {
        Self::new(crate::config::completion_types::DEFAULT_CACHE_SIZE)
    }
}
