//! Daily activity heatmap with quantised intensity levels.

use super::trend::daily_range;
use crate::workflow::domain::Task;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Activity on one calendar day with its display intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeatmapCell {
    /// Calendar day (UTC).
    pub date: NaiveDate,
    /// Creation plus completion events on the day.
    pub count: usize,
    /// Quantised intensity, `0..=4`.
    pub level: u8,
}

/// Computes a dense daily activity heatmap.
///
/// Returns exactly `days` cells covering the calendar days from
/// `reference - days + 1` through `reference`, ascending. A day's `count`
/// is the number of tasks created plus tasks completed on it; `level`
/// quantises the count with fixed thresholds
/// `{0 → 0, 1 → 1, 2-3 → 2, 4-5 → 3, 6+ → 4}`.
#[must_use]
pub fn activity_heatmap(tasks: &[Task], days: u32, reference: DateTime<Utc>) -> Vec<HeatmapCell> {
    let mut by_day: HashMap<NaiveDate, usize> = HashMap::new();
    for task in tasks {
        *by_day.entry(task.created_at().date_naive()).or_default() += 1;
        if let Some(completed_at) = task.completed_at() {
            *by_day.entry(completed_at.date_naive()).or_default() += 1;
        }
    }

    daily_range(days, reference)
        .map(|date| {
            let count = by_day.get(&date).copied().unwrap_or_default();
            HeatmapCell {
                date,
                count,
                level: intensity(count),
            }
        })
        .collect()
}

const fn intensity(count: usize) -> u8 {
    match count {
        0 => 0,
        1 => 1,
        2..=3 => 2,
        4..=5 => 3,
        _ => 4,
    }
}
