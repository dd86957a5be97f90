// SPDX-License-Identifier: MIT

//! Mountain metadata and per-user ascent logs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A mountain belonging to one or more peak lists.
///
/// Identity is the `id`; the remaining fields are display metadata carried
/// through from the list record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mountain {
    /// Stable mountain identifier (document ID in the stored list)
    pub id: String,
    /// Mountain name (e.g., "Mount Washington")
    pub name: String,
    /// Summit elevation in meters, when known
    pub elevation_meters: Option<f64>,
}

impl Mountain {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            elevation_meters: None,
        }
    }
}

/// One user's raw ascent record: mountain id → canonical date-strings.
///
/// Order within a mountain's list is irrelevant; entries are immutable once
/// recorded and removed wholesale. An entry of all placeholders
/// (`XXXX-XX-XX-XX-XX`) means "ascended on an unknown date" and still
/// counts for variants that need no date matching.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AscentLog {
    dates: HashMap<String, Vec<String>>,
}

impl AscentLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an ascent date for a mountain.
    pub fn record(&mut self, mountain_id: impl Into<String>, date: impl Into<String>) {
        self.dates
            .entry(mountain_id.into())
            .or_default()
            .push(date.into());
    }

    /// Remove one ascent date from a mountain's list.
    ///
    /// Returns `true` if an entry was removed. Only the first matching
    /// entry is removed when duplicates exist.
    pub fn remove(&mut self, mountain_id: &str, date: &str) -> bool {
        let Some(entries) = self.dates.get_mut(mountain_id) else {
            return false;
        };
        let Some(pos) = entries.iter().position(|d| d == date) else {
            return false;
        };
        entries.remove(pos);
        if entries.is_empty() {
            self.dates.remove(mountain_id);
        }
        true
    }

    /// The raw date-strings recorded for a mountain (empty if none).
    pub fn dates_for(&self, mountain_id: &str) -> &[String] {
        self.dates.get(mountain_id).map_or(&[], Vec::as_slice)
    }

    /// Number of mountains with at least one recorded ascent.
    pub fn mountain_count(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
