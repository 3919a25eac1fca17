//! Activity log — lines the dashboard writes to the work-log panel itself.

use std::collections::VecDeque;

use crate::time::{Timestamp, clock_label};

/// Most local lines kept before the oldest are dropped.
pub const ACTIVITY_LIMIT: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    at: Timestamp,
    line: String,
}

/// Local work-log entries, newest first.
///
/// An entry outlives the first backend work-log fetch after it was written
/// and is dropped by the second one, so action results stay visible on the
/// page rendered right after the action's own refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityLog {
    entries: VecDeque<Entry>,
    last_rebuild: Option<Timestamp>,
}

impl ActivityLog {
    /// Prepend `[HH:MM] message`, evicting the oldest entry past the limit.
    pub fn record(&mut self, at: Timestamp, message: impl AsRef<str>) {
        self.entries.push_front(Entry {
            at,
            line: format!("[{}] {}", clock_label(at), message.as_ref()),
        });
        self.entries.truncate(ACTIVITY_LIMIT);
    }

    /// Note a successful backend work-log fetch for the cycle that started
    /// at `started_at`.
    ///
    /// Drops entries written before the previous successful fetch started.
    pub fn rebuilt(&mut self, started_at: Timestamp) {
        if let Some(cutoff) = self.last_rebuild {
            self.entries.retain(|entry| entry.at > cutoff);
        }
        self.last_rebuild = Some(started_at);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.line.as_str())
    }
}
