//! General dashboard metrics over a task snapshot.

use super::{hours_between, mean, percentage};
use crate::workflow::domain::{Priority, Status, Task, is_overdue};
use chrono::{DateTime, NaiveTime, TimeDelta, Utc};
use serde::Serialize;

/// Task counts bucketed by priority. Tasks without a priority are counted
/// in none of the buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityBreakdown {
    /// Tasks with `alta` priority.
    pub high: usize,
    /// Tasks with `media` priority.
    pub medium: usize,
    /// Tasks with `baja` priority.
    pub low: usize,
}

/// Creation and completion counts inside a time window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WindowActivity {
    /// Tasks created inside the window.
    pub created: usize,
    /// Tasks completed inside the window.
    pub completed: usize,
}

/// Summary statistics for a task snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metrics {
    /// Total number of tasks.
    pub total: usize,
    /// Tasks in `cerrada` status.
    pub completed: usize,
    /// Tasks in `pendiente` status.
    pub pending: usize,
    /// Tasks in `en_proceso` status.
    pub in_progress: usize,
    /// Tasks in `en_revision` status.
    pub in_review: usize,
    /// Tasks past their deadline and not closed.
    pub overdue: usize,
    /// Completed share of the snapshot as a percentage, `0.0` when empty.
    pub completion_rate: f64,
    /// Mean completion time in hours over closed tasks, `0.0` when none.
    pub avg_completion_hours: f64,
    /// Counts by priority.
    pub by_priority: PriorityBreakdown,
    /// Activity since UTC midnight.
    pub today: WindowActivity,
    /// Activity over the last 7 days.
    pub week: WindowActivity,
    /// Activity over the last 30 days.
    pub month: WindowActivity,
    /// Tasks completed this week as a percentage of tasks created this
    /// week, `0.0` when nothing was created.
    pub weekly_productivity: f64,
}

/// Computes summary statistics for a task snapshot.
#[must_use]
pub fn general_metrics(tasks: &[Task], now: DateTime<Utc>) -> Metrics {
    let mut metrics = Metrics {
        total: tasks.len(),
        ..Metrics::default()
    };

    let today_start = now.date_naive().and_time(NaiveTime::MIN).and_utc();
    let week_start = now - TimeDelta::days(7);
    let month_start = now - TimeDelta::days(30);

    let mut completion_hours = Vec::new();
    for task in tasks {
        count_status(&mut metrics, task);
        count_priority(&mut metrics.by_priority, task);
        if is_overdue(task, now) {
            metrics.overdue += 1;
        }
        if let Some(completed_at) = closed_completion(task) {
            completion_hours.push(hours_between(task.created_at(), completed_at));
        }

        count_window(&mut metrics.today, task, today_start, now);
        count_window(&mut metrics.week, task, week_start, now);
        count_window(&mut metrics.month, task, month_start, now);
    }

    metrics.completion_rate = percentage(metrics.completed, metrics.total);
    metrics.avg_completion_hours = mean(&completion_hours);
    metrics.weekly_productivity = percentage(metrics.week.completed, metrics.week.created);
    metrics
}

fn count_status(metrics: &mut Metrics, task: &Task) {
    match task.status() {
        Status::Pending => metrics.pending += 1,
        Status::InProgress => metrics.in_progress += 1,
        Status::InReview => metrics.in_review += 1,
        Status::Closed => metrics.completed += 1,
    }
}

fn count_priority(breakdown: &mut PriorityBreakdown, task: &Task) {
    match task.priority() {
        Some(Priority::High) => breakdown.high += 1,
        Some(Priority::Medium) => breakdown.medium += 1,
        Some(Priority::Low) => breakdown.low += 1,
        None => {}
    }
}

fn count_window(
    window: &mut WindowActivity,
    task: &Task,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) {
    if task.created_at() >= start && task.created_at() <= end {
        window.created += 1;
    }
    if let Some(completed_at) = closed_completion(task) {
        if completed_at >= start && completed_at <= end {
            window.completed += 1;
        }
    }
}

/// Completion timestamp for tasks that are currently closed.
fn closed_completion(task: &Task) -> Option<DateTime<Utc>> {
    (task.status() == Status::Closed)
        .then(|| task.completed_at())
        .flatten()
}
