//! Snapshot — the latest known state of every dashboard panel.
//!
//! A refresh cycle produces a [`PollResult`] with one optional value per
//! section. Folding it into the [`Snapshot`] replaces every section whose
//! fetch succeeded, wholesale, and leaves every failed section exactly as
//! it was. A panel is therefore always the most recent *successful*
//! response for its endpoint, never a partial overwrite.

use serde::Serialize;

use crate::status::ClaudeStatus;
use crate::summary::Summary;
use crate::time::Timestamp;
use crate::work_item::WorkItem;

/// One backend-bound panel of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Summary,
    Tasks,
    Approvals,
    WorkLog,
    ClaudeLog,
}

impl Section {
    pub const ALL: [Self; 5] = [
        Self::Summary,
        Self::Tasks,
        Self::Approvals,
        Self::WorkLog,
        Self::ClaudeLog,
    ];
}

/// Raw outcome of one refresh cycle. `None` means "unavailable this cycle".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollResult {
    /// Wall-clock time at which the cycle began.
    pub started_at: Timestamp,
    pub summary: Option<Summary>,
    pub tasks: Option<Vec<WorkItem>>,
    pub approvals: Option<Vec<WorkItem>>,
    pub work_log: Option<Vec<String>>,
    pub claude_log: Option<Vec<String>>,
}

impl PollResult {
    /// A cycle in which nothing could be fetched.
    #[must_use]
    pub fn empty(started_at: Timestamp) -> Self {
        Self {
            started_at,
            summary: None,
            tasks: None,
            approvals: None,
            work_log: None,
            claude_log: None,
        }
    }
}

/// Header metrics shown above the lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub open_tasks: usize,
    pub pending_approvals: usize,
}

/// Aggregate in-memory state built from successful polls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub summary: Option<Summary>,
    pub counts: Counts,
    pub last_sync: Option<Timestamp>,
    pub claude: ClaudeStatus,
    pub tasks: Vec<WorkItem>,
    pub approvals: Vec<WorkItem>,
    /// Backend work-log lines, oldest first as served.
    pub work_log: Vec<String>,
    /// Backend Claude-log lines, oldest first as served.
    pub claude_log: Vec<String>,
}

impl Snapshot {
    /// Fold one poll cycle into the snapshot and report which sections changed.
    ///
    /// The summary region (counts, last-sync label, Claude status) updates
    /// only when the summary itself was fetched. Its counts use this cycle's
    /// lists when they arrived and the last known lists otherwise.
    pub fn apply(&mut self, poll: PollResult) -> Vec<Section> {
        let mut updated = Vec::with_capacity(Section::ALL.len());

        if let Some(summary) = poll.summary {
            self.counts = Counts {
                open_tasks: poll.tasks.as_ref().map_or(self.tasks.len(), Vec::len),
                pending_approvals: poll
                    .approvals
                    .as_ref()
                    .map_or(self.approvals.len(), Vec::len),
            };
            self.last_sync = Some(poll.started_at);
            self.claude = ClaudeStatus::from_running(summary.claude_running);
            self.summary = Some(summary);
            updated.push(Section::Summary);
        }
        if let Some(tasks) = poll.tasks {
            self.tasks = tasks;
            updated.push(Section::Tasks);
        }
        if let Some(approvals) = poll.approvals {
            self.approvals = approvals;
            updated.push(Section::Approvals);
        }
        if let Some(lines) = poll.work_log {
            self.work_log = lines;
            updated.push(Section::WorkLog);
        }
        if let Some(lines) = poll.claude_log {
            self.claude_log = lines;
            updated.push(Section::ClaudeLog);
        }

        updated
    }

    /// Move the last-sync label to `at` without touching anything else.
    pub fn touch_sync(&mut self, at: Timestamp) {
        self.last_sync = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::now;

    fn item(path: &str) -> WorkItem {
        WorkItem::new(path, format!("Title {path}"), "task")
    }

    fn full_poll() -> PollResult {
        PollResult {
            started_at: now(),
            summary: Some(Summary::with_claude_running(true)),
            tasks: Some(vec![item("a.md"), item("b.md")]),
            approvals: Some(vec![item("c.md")]),
            work_log: Some(vec!["one".into(), "two".into()]),
            claude_log: Some(vec!["claude".into()]),
        }
    }

    #[test]
    fn should_replace_every_section_on_full_success() {
        let mut snapshot = Snapshot::default();
        let poll = full_poll();
        let started_at = poll.started_at;

        let updated = snapshot.apply(poll);

        assert_eq!(updated, Section::ALL.to_vec());
        assert_eq!(snapshot.tasks.len(), 2);
        assert_eq!(snapshot.approvals.len(), 1);
        assert_eq!(snapshot.counts.open_tasks, 2);
        assert_eq!(snapshot.counts.pending_approvals, 1);
        assert_eq!(snapshot.last_sync, Some(started_at));
        assert_eq!(snapshot.claude, ClaudeStatus::Running);
    }

    #[test]
    fn should_keep_stale_section_when_its_fetch_failed() {
        let mut snapshot = Snapshot::default();
        snapshot.apply(full_poll());
        let before = snapshot.clone();

        let mut poll = full_poll();
        poll.tasks = None;
        poll.approvals = Some(vec![]);
        let updated = snapshot.apply(poll);

        assert!(!updated.contains(&Section::Tasks));
        assert_eq!(snapshot.tasks, before.tasks);
        assert!(snapshot.approvals.is_empty());
        assert_eq!(snapshot.work_log, before.work_log);
    }

    #[test]
    fn should_not_touch_other_panels_when_one_fetch_fails() {
        let mut snapshot = Snapshot::default();
        snapshot.apply(full_poll());

        let mut poll = full_poll();
        poll.claude_log = None;
        poll.work_log = Some(vec!["three".into()]);
        snapshot.apply(poll);

        assert_eq!(snapshot.claude_log, vec!["claude".to_string()]);
        assert_eq!(snapshot.work_log, vec!["three".to_string()]);
    }

    #[test]
    fn should_leave_summary_region_alone_when_summary_failed() {
        let mut snapshot = Snapshot::default();
        snapshot.apply(full_poll());
        let last_sync = snapshot.last_sync;

        let mut poll = full_poll();
        poll.summary = None;
        poll.tasks = Some(vec![]);
        snapshot.apply(poll);

        assert_eq!(snapshot.counts.open_tasks, 2);
        assert_eq!(snapshot.last_sync, last_sync);
        assert_eq!(snapshot.claude, ClaudeStatus::Running);
        assert!(snapshot.tasks.is_empty());
    }

    #[test]
    fn should_count_last_known_list_when_list_fetch_failed() {
        let mut snapshot = Snapshot::default();
        snapshot.apply(full_poll());

        let mut poll = full_poll();
        poll.tasks = None;
        poll.summary = Some(Summary::with_claude_running(false));
        snapshot.apply(poll);

        assert_eq!(snapshot.counts.open_tasks, 2);
        assert_eq!(snapshot.claude, ClaudeStatus::Stopped);
    }

    #[test]
    fn should_change_nothing_when_every_fetch_failed() {
        let mut snapshot = Snapshot::default();
        snapshot.apply(full_poll());
        let before = snapshot.clone();

        let updated = snapshot.apply(PollResult::empty(now()));

        assert!(updated.is_empty());
        assert_eq!(snapshot, before);
    }

    #[test]
    fn should_be_idempotent_for_identical_polls() {
        let poll = full_poll();
        let mut once = Snapshot::default();
        once.apply(poll.clone());
        let mut twice = once.clone();
        twice.apply(poll);
        assert_eq!(once, twice);
    }
}
