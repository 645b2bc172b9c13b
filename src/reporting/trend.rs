//! Daily creation/completion trend series.

use crate::workflow::domain::Task;
use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Creation and completion counts for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    /// Calendar day (UTC).
    pub date: NaiveDate,
    /// Short display label, `DD/MM`.
    pub label: String,
    /// Tasks created on the day.
    pub created: usize,
    /// Tasks completed on the day.
    pub completed: usize,
}

#[derive(Debug, Clone, Copy, Default)]
struct DayCounts {
    created: usize,
    completed: usize,
}

/// Computes a dense daily trend series.
///
/// Returns exactly `days` entries covering the calendar days from
/// `reference - days + 1` through `reference`, in ascending order. Days
/// with no activity appear with zero counts.
#[must_use]
pub fn trend_series(tasks: &[Task], days: u32, reference: DateTime<Utc>) -> Vec<TrendPoint> {
    let by_day = bucket_by_day(tasks);
    daily_range(days, reference)
        .map(|date| {
            let counts = by_day.get(&date).copied().unwrap_or_default();
            TrendPoint {
                date,
                label: date.format("%d/%m").to_string(),
                created: counts.created,
                completed: counts.completed,
            }
        })
        .collect()
}

fn bucket_by_day(tasks: &[Task]) -> HashMap<NaiveDate, DayCounts> {
    let mut by_day: HashMap<NaiveDate, DayCounts> = HashMap::new();
    for task in tasks {
        by_day
            .entry(task.created_at().date_naive())
            .or_default()
            .created += 1;
        if let Some(completed_at) = task.completed_at() {
            by_day.entry(completed_at.date_naive()).or_default().completed += 1;
        }
    }
    by_day
}

/// Iterates the `days` calendar days ending at `reference`, ascending.
pub(crate) fn daily_range(
    days: u32,
    reference: DateTime<Utc>,
) -> impl Iterator<Item = NaiveDate> {
    let last = reference.date_naive();
    (0..days).map(move |offset| {
        let back = u64::from(days - 1 - offset);
        last.checked_sub_days(Days::new(back)).unwrap_or(NaiveDate::MIN)
    })
}
