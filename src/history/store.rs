// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! History store implementation
//!
//! An in-memory, newest-first list of past (input, output) pairs. State
//! lives for the length of the session only; nothing is written to disk.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One past generation kept in history
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// Entry ID, unique within a session
    pub id: Uuid,
    /// The user input that produced the result
    pub input: String,
    /// The generated result text
    pub output: String,
    /// When the entry was created
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create a new entry
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            input: input.into(),
            output: output.into(),
            created_at: Utc::now(),
        }
    }

    /// A short preview of the input for list rendering
    pub fn input_preview(&self, max_chars: usize) -> String {
        let flat = self.input.replace('\n', " ");
        let chars: Vec<char> = flat.chars().collect();
        if chars.len() > max_chars {
            format!("{}...", chars[..max_chars.saturating_sub(3)].iter().collect::<String>())
        } else {
            flat
        }
    }
}

/// History store for a single screen
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry at the front (most-recent-first ordering)
    pub fn append(&mut self, input: impl Into<String>, output: impl Into<String>) -> Uuid {
        let entry = HistoryEntry::new(input, output);
        let id = entry.id;
        self.entries.insert(0, entry);
        id
    }

    /// Delete one entry by ID. Returns true if an entry was removed.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let initial_len = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() < initial_len
    }

    /// Empty the list
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Get an entry by ID
    pub fn get(&self, id: Uuid) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// All entries, newest first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
