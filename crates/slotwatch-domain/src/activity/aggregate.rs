use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::ActivityLogEntry;

/// Hard cap on retained entries; the oldest are evicted on overflow
pub const ACTIVITY_LOG_CAPACITY: usize = 50;

/// Bounded, newest-first audit trail.
///
/// Append-only from the engine's perspective: truncation on overflow is the
/// only deletion that ever happens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityLog {
    entries: VecDeque<ActivityLogEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = ActivityLogEntry>) -> Self {
        let mut log = Self::new();
        let mut items: Vec<_> = entries.into_iter().collect();
        // Stored newest-first; replay oldest-first so append keeps the order
        items.reverse();
        for entry in items {
            log.append(entry);
        }
        log
    }

    pub fn append(&mut self, entry: ActivityLogEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(ACTIVITY_LOG_CAPACITY);
    }

    /// Entries newest-first.
    pub fn entries(&self) -> impl Iterator<Item = &ActivityLogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
