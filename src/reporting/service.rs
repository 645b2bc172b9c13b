//! Dashboard assembly service over the repository port.

use super::{
    AreaBucket, AreaStats, EstimateReport, HeatmapCell, Metrics, PerformerStats, TrendPoint,
    activity_heatmap, area_stats, estimated_vs_real, general_metrics, top_performers,
    trend_series,
};
use crate::workflow::{
    domain::{Task, TaskFilter},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::TimeDelta;
use mockable::Clock;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Ranking window used for the dashboard leaderboard.
const PERFORMER_WINDOW_DAYS: i64 = 7;

/// Errors returned by reporting services.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Snapshot retrieval failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for reporting service operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Everything a board dashboard displays, assembled from one snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    /// Summary statistics.
    pub metrics: Metrics,
    /// Daily creation/completion trend.
    pub trend: Vec<TrendPoint>,
    /// Per-area statistics.
    pub areas: BTreeMap<AreaBucket, AreaStats>,
    /// Weekly assignee leaderboard.
    pub performers: Vec<PerformerStats>,
    /// Estimate accuracy report.
    pub estimates: EstimateReport,
    /// Daily activity heatmap.
    pub heatmap: Vec<HeatmapCell>,
}

/// Reporting orchestration service.
///
/// Fetches the task snapshot once per request and folds it with the pure
/// aggregation functions; the clock is injected so reports stay
/// deterministic under test.
#[derive(Clone)]
pub struct DashboardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> DashboardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new dashboard service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Assembles the full dashboard report.
    ///
    /// `trend_days` controls how many calendar days the trend series and
    /// heatmap cover.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Repository`] when the snapshot cannot be
    /// fetched.
    pub async fn dashboard(&self, trend_days: u32) -> ReportResult<DashboardReport> {
        let tasks = self.snapshot().await?;
        let now = self.clock.utc();
        debug!(tasks = tasks.len(), trend_days, "assembling dashboard report");

        Ok(DashboardReport {
            metrics: general_metrics(&tasks, now),
            trend: trend_series(&tasks, trend_days, now),
            areas: area_stats(&tasks, now),
            performers: top_performers(&tasks, now, TimeDelta::days(PERFORMER_WINDOW_DAYS)),
            estimates: estimated_vs_real(&tasks),
            heatmap: activity_heatmap(&tasks, trend_days, now),
        })
    }

    /// Computes summary statistics over the filtered snapshot.
    ///
    /// The filter predicate is applied before aggregation, so the report
    /// reflects exactly the tasks a scoped board view displays.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Repository`] when the snapshot cannot be
    /// fetched.
    pub async fn filtered_metrics(&self, filter: &TaskFilter) -> ReportResult<Metrics> {
        let tasks = self.snapshot().await?;
        let now = self.clock.utc();
        let scoped: Vec<Task> = filter.apply(&tasks, now).into_iter().cloned().collect();
        Ok(general_metrics(&scoped, now))
    }

    async fn snapshot(&self) -> ReportResult<Vec<Task>> {
        Ok(self.repository.list_all().await?)
    }
}
