//! Per-assignee leaderboard statistics.

use super::{hours_between, mean, percentage};
use crate::workflow::domain::{AssigneeEmail, Status, Task};
use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Maximum number of performers returned by [`top_performers`].
pub const TOP_PERFORMER_LIMIT: usize = 10;

/// Grouping key for leaderboard statistics.
///
/// Tasks without an assignee are grouped under
/// [`PerformerKey::Unassigned`], never dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum PerformerKey {
    /// Tasks assigned to a concrete person.
    Assignee(AssigneeEmail),
    /// Tasks without an assignee.
    Unassigned,
}

impl PerformerKey {
    /// Returns the canonical display name of the key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Assignee(email) => email.as_str(),
            Self::Unassigned => "unassigned",
        }
    }
}

impl From<Option<&AssigneeEmail>> for PerformerKey {
    fn from(assignee: Option<&AssigneeEmail>) -> Self {
        assignee.map_or(Self::Unassigned, |email| Self::Assignee(email.clone()))
    }
}

impl fmt::Display for PerformerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Leaderboard statistics for one assignee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformerStats {
    /// The assignee this row aggregates.
    pub assignee: PerformerKey,
    /// Total tasks assigned.
    pub total: usize,
    /// Tasks in `cerrada` status.
    pub completed: usize,
    /// Tasks completed inside the ranking window.
    pub completed_in_window: usize,
    /// Completed share of assigned tasks as a percentage.
    pub completion_rate: f64,
    /// Mean completion time in hours over closed tasks, `0.0` when none.
    pub avg_completion_hours: f64,
    /// Share of completions that landed on or before the deadline, `0.0`
    /// when nothing was completed.
    pub on_time_rate: f64,
}

#[derive(Debug, Default)]
struct PerformerAccumulator {
    total: usize,
    completed: usize,
    completed_in_window: usize,
    on_time: usize,
    completion_hours: Vec<f64>,
}

/// Computes the assignee leaderboard for a task snapshot.
///
/// Rows are sorted descending by completions inside `window` (ending at
/// `now`); ties keep the order assignees first appear in the snapshot. The
/// result is truncated to [`TOP_PERFORMER_LIMIT`] rows. Callers ranking a
/// weekly board pass a 7-day window.
#[must_use]
pub fn top_performers(
    tasks: &[Task],
    now: DateTime<Utc>,
    window: TimeDelta,
) -> Vec<PerformerStats> {
    let window_start = now - window;
    let mut order: Vec<PerformerKey> = Vec::new();
    let mut groups: HashMap<PerformerKey, PerformerAccumulator> = HashMap::new();

    for task in tasks {
        let key = PerformerKey::from(task.assigned_to());
        if !groups.contains_key(&key) {
            order.push(key.clone());
        }
        let acc = groups.entry(key).or_default();
        acc.total += 1;
        if task.status() != Status::Closed {
            continue;
        }
        acc.completed += 1;
        if let Some(completed_at) = task.completed_at() {
            acc.completion_hours.push(hours_between(task.created_at(), completed_at));
            if completed_at >= window_start && completed_at <= now {
                acc.completed_in_window += 1;
            }
            if completed_at <= task.due_at() {
                acc.on_time += 1;
            }
        }
    }

    let mut rows: Vec<PerformerStats> = order
        .into_iter()
        .filter_map(|key| {
            let acc = groups.remove(&key)?;
            Some(PerformerStats {
                assignee: key,
                total: acc.total,
                completed: acc.completed,
                completed_in_window: acc.completed_in_window,
                completion_rate: percentage(acc.completed, acc.total),
                avg_completion_hours: mean(&acc.completion_hours),
                on_time_rate: percentage(acc.on_time, acc.completed),
            })
        })
        .collect();

    // Stable sort keeps first-seen order for tied window counts.
    rows.sort_by(|a, b| b.completed_in_window.cmp(&a.completed_in_window));
    rows.truncate(TOP_PERFORMER_LIMIT);
    rows
}
