//! Reporting and aggregation engine for Tablero.
//!
//! Every function here folds an in-memory task snapshot into summary data:
//! dashboard metrics, daily trend series, per-area statistics, assignee
//! leaderboards, estimate accuracy, and activity heatmaps. All functions
//! are pure — no I/O, no mutation of input, deterministic given
//! `(tasks, now)` — and tolerate empty input. Ratios over an empty
//! denominator are `0.0`, never `NaN` or a panic.
//!
//! Durations in reports are expressed as fractional hours. Calendar-day
//! bucketing uses the UTC calendar day of the stored timestamps.
//!
//! [`DashboardService`] assembles a full report through the repository
//! port.

mod areas;
mod estimates;
mod heatmap;
mod metrics;
mod performers;
mod service;
mod trend;

pub use areas::{AreaBucket, AreaStats, area_stats};
pub use estimates::{EstimateEntry, EstimateReport, estimated_vs_real};
pub use heatmap::{HeatmapCell, activity_heatmap};
pub use metrics::{Metrics, PriorityBreakdown, WindowActivity, general_metrics};
pub use performers::{PerformerKey, PerformerStats, TOP_PERFORMER_LIMIT, top_performers};
pub use service::{DashboardReport, DashboardService, ReportError, ReportResult};
pub use trend::{TrendPoint, trend_series};

#[cfg(test)]
mod tests;

use chrono::{DateTime, Utc};

const MILLISECONDS_PER_HOUR: f64 = 3_600_000.0;

/// Percentage of `part` in `whole`, `0.0` when `whole` is zero.
pub(crate) fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

/// Elapsed time between two instants in fractional hours.
pub(crate) fn hours_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / MILLISECONDS_PER_HOUR
}

/// Mean of a slice of values, `0.0` when empty.
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
