//! Saved-state registry.
//!
//! The persistence collaborator behind selection survival: given an opaque
//! key, persist and later retrieve one integer index. The registry itself is
//! a plain in-memory store; hosts carry it across process death by JSON
//! round-tripping it wherever they keep session state.
//!
//! Out-of-range indices are stored as-is — clamping to the live list happens
//! when a selector adopts the value, so stale saved state never faults.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::source_id::SourceId;

/// Key-value store mapping a widget key to one saved selection index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavedStateRegistry {
    entries: HashMap<u64, u64>,
}

impl SavedStateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist `index` under `key`, replacing any previous value.
    pub fn save(&mut self, key: SourceId, index: usize) {
        self.entries.insert(key.raw(), index as u64);
    }

    /// Retrieve the index saved under `key`, if any.
    pub fn restore(&self, key: SourceId) -> Option<usize> {
        self.entries.get(&key.raw()).map(|&v| v as usize)
    }

    /// Drop the entry for `key`, returning the saved index if present.
    pub fn remove(&mut self, key: SourceId) -> Option<usize> {
        self.entries.remove(&key.raw()).map(|v| v as usize)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the registry to JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Reconstruct a registry from JSON produced by `to_json`.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
