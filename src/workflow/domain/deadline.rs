//! Deadline evaluation: time remaining, overdue checks, and display
//! formatting.
//!
//! All functions take `now` explicitly rather than reading a global clock,
//! so they stay deterministic and testable.

use super::{Status, Task};
use chrono::{DateTime, TimeDelta, Utc};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3600;
const SECONDS_PER_DAY: i64 = 86_400;

/// Returns the time remaining until the task's deadline.
///
/// Negative once the deadline has passed.
#[must_use]
pub fn remaining(task: &Task, now: DateTime<Utc>) -> TimeDelta {
    task.due_at() - now
}

/// Returns `true` when the task's deadline has been reached and the task is
/// not closed.
///
/// The boundary is inclusive: a task is overdue at exactly its due instant.
/// Closed tasks are never overdue.
#[must_use]
pub fn is_overdue(task: &Task, now: DateTime<Utc>) -> bool {
    remaining(task, now) <= TimeDelta::zero() && task.status() != Status::Closed
}

/// Formats a remaining duration for display.
///
/// Zero or negative durations yield `"overdue"`. A day or more remaining
/// yields `"{days}d {hours:02}h"`; anything shorter yields `"HH:MM:SS"`.
#[must_use]
pub fn format_remaining(remaining: TimeDelta) -> String {
    if remaining.num_milliseconds() <= 0 {
        return "overdue".to_owned();
    }
    let total_seconds = remaining.num_seconds();

    let days = total_seconds / SECONDS_PER_DAY;
    if days >= 1 {
        let hours = (total_seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
        return format!("{days}d {hours:02}h");
    }

    let hours = total_seconds / SECONDS_PER_HOUR;
    let minutes = (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = total_seconds % SECONDS_PER_MINUTE;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
