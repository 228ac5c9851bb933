use std::collections::VecDeque;

use crate::entities::{LogEntry, Severity};

/// Maximum number of entries kept by an [`EventLog`]
pub const LOG_CAPACITY: usize = 100;

/// Bounded, newest-first trail of human-readable lines.
///
/// Once full, every insertion evicts the oldest entry.
#[derive(Debug, Clone)]
pub struct EventLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl EventLog {
    pub fn new() -> Self {
        Self::with_capacity(LOG_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Prepend a line stamped with the current wall-clock time
    pub fn record(&mut self, text: impl Into<String>, severity: Severity) {
        let entry = LogEntry::new(text, severity);
        match severity {
            Severity::Error => tracing::warn!(%severity, "{}", entry.text),
            Severity::Info | Severity::Success => tracing::info!(%severity, "{}", entry.text),
        }

        self.entries.push_front(entry);
        if self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Snapshot of the entries, newest first
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}
