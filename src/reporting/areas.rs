//! Per-area task statistics.

use super::{hours_between, mean, percentage};
use crate::workflow::domain::{Area, Status, Task, is_overdue};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Grouping key for per-area statistics.
///
/// Tasks without an area are grouped under [`AreaBucket::Unassigned`],
/// never dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AreaBucket {
    /// Tasks belonging to a concrete area.
    Assigned(Area),
    /// Tasks without an area.
    Unassigned,
}

impl AreaBucket {
    /// Returns the canonical display name of the bucket.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assigned(area) => area.as_str(),
            Self::Unassigned => "unassigned",
        }
    }
}

impl From<Option<Area>> for AreaBucket {
    fn from(area: Option<Area>) -> Self {
        area.map_or(Self::Unassigned, Self::Assigned)
    }
}

impl fmt::Display for AreaBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Statistics for one area bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AreaStats {
    /// Total tasks in the bucket.
    pub total: usize,
    /// Tasks in `cerrada` status.
    pub completed: usize,
    /// Tasks in `pendiente` status.
    pub pending: usize,
    /// Tasks past their deadline and not closed.
    pub overdue: usize,
    /// Mean completion time in hours over closed tasks, `0.0` when none.
    pub avg_completion_hours: f64,
    /// Completed share of the bucket as a percentage, `0.0` when empty.
    pub completion_rate: f64,
}

#[derive(Debug, Default)]
struct AreaAccumulator {
    stats: AreaStats,
    completion_hours: Vec<f64>,
}

/// Computes per-area statistics for a task snapshot.
#[must_use]
pub fn area_stats(tasks: &[Task], now: DateTime<Utc>) -> BTreeMap<AreaBucket, AreaStats> {
    let mut buckets: BTreeMap<AreaBucket, AreaAccumulator> = BTreeMap::new();
    for task in tasks {
        let acc = buckets.entry(AreaBucket::from(task.area())).or_default();
        acc.stats.total += 1;
        match task.status() {
            Status::Closed => acc.stats.completed += 1,
            Status::Pending => acc.stats.pending += 1,
            Status::InProgress | Status::InReview => {}
        }
        if is_overdue(task, now) {
            acc.stats.overdue += 1;
        }
        if task.status() == Status::Closed {
            if let Some(completed_at) = task.completed_at() {
                acc.completion_hours.push(hours_between(task.created_at(), completed_at));
            }
        }
    }

    buckets
        .into_iter()
        .map(|(bucket, mut acc)| {
            acc.stats.avg_completion_hours = mean(&acc.completion_hours);
            acc.stats.completion_rate = percentage(acc.stats.completed, acc.stats.total);
            (bucket, acc.stats)
        })
        .collect()
}
