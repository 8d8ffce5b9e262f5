//! Bounded history of killed text.
//!
//! Entries are kept oldest to newest. A rotation cursor marks the entry that
//! the next yank will insert; pushing resets it to the newest entry and
//! rotating walks it back toward older kills, wrapping to the newest.

use crate::logging;
use std::collections::VecDeque;

/// Number of kills remembered when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 100;

#[derive(Debug, Clone)]
pub struct KillRing {
    ring: VecDeque<String>,
    max_size: usize,
    /// `None` exactly when `ring` is empty.
    cursor: Option<usize>,
}

impl KillRing {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a ring holding at most `max_size` entries (at least one).
    pub fn with_capacity(max_size: usize) -> Self {
        let max_size = max_size.max(1);
        Self {
            ring: VecDeque::with_capacity(max_size),
            max_size,
            cursor: None,
        }
    }

    /// Append `text` as the newest entry, evicting the oldest when full.
    ///
    /// Empty text is stored as-is; the controller never pushes it.
    pub fn push(&mut self, text: String) {
        while self.ring.len() >= self.max_size {
            self.ring.pop_front();
        }
        self.ring.push_back(text);
        self.cursor = Some(self.ring.len() - 1);

        if logging::log_ring() {
            log::debug!(
                "kill_ring push: len={}, cursor={:?}",
                self.ring.len(),
                self.cursor
            );
        }
    }

    /// Extend the entry under the cursor. Does nothing on an empty ring.
    pub fn concat(&mut self, text: &str) {
        let Some(entry) = self.cursor.and_then(|i| self.ring.get_mut(i)) else {
            return;
        };
        entry.push_str(text);

        if logging::log_ring() {
            log::debug!(
                "kill_ring concat: cursor={:?}, entry_len={}",
                self.cursor,
                entry.len()
            );
        }
    }

    /// The entry under the cursor, if any.
    pub fn peek(&self) -> Option<&str> {
        self.cursor
            .and_then(|i| self.ring.get(i))
            .map(String::as_str)
    }

    /// Step the cursor to the next-older entry, wrapping to the newest.
    pub fn rotate(&mut self) {
        let Some(index) = self.cursor else {
            return;
        };
        let next = match index {
            0 => self.ring.len() - 1,
            i => i - 1,
        };
        self.cursor = Some(next);

        if logging::log_ring() {
            log::debug!("kill_ring rotate: cursor {} -> {}", index, next);
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.max_size
    }

    /// Entries from oldest to newest.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.ring.iter().map(String::as_str)
    }
}

impl Default for KillRing {
    fn default() -> Self {
        Self::new()
    }
}
