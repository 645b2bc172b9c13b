//! Estimate-versus-actual accuracy report.

use super::{hours_between, mean};
use crate::workflow::domain::{Status, Task, TaskId};
use serde::Serialize;

/// Estimate accuracy for one closed task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateEntry {
    /// The task this row describes.
    pub task_id: TaskId,
    /// Estimated hours recorded on the task.
    pub estimated_hours: f64,
    /// Actual hours from creation to completion.
    pub real_hours: f64,
    /// Accuracy percentage, `0..=100`.
    pub accuracy: f64,
}

/// Aggregate estimate accuracy over a task snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EstimateReport {
    /// Mean estimated hours over the eligible tasks.
    pub avg_estimated_hours: f64,
    /// Mean actual hours over the eligible tasks.
    pub avg_real_hours: f64,
    /// Mean per-task accuracy.
    pub accuracy: f64,
    /// Per-task breakdown in snapshot order.
    pub breakdown: Vec<EstimateEntry>,
}

/// Compares estimated against actual completion time.
///
/// Only closed tasks carrying both an estimate and a completion timestamp
/// are eligible. Per-task accuracy is
/// `100 - min(100, |real - estimated| / estimated * 100)`, or `0` for a
/// zero-hour estimate. An empty or ineligible snapshot yields the all-zero
/// report.
#[must_use]
pub fn estimated_vs_real(tasks: &[Task]) -> EstimateReport {
    let breakdown: Vec<EstimateEntry> = tasks
        .iter()
        .filter(|task| task.status() == Status::Closed)
        .filter_map(|task| {
            let estimated_hours = task.estimated_hours()?;
            let completed_at = task.completed_at()?;
            let real_hours = hours_between(task.created_at(), completed_at);
            Some(EstimateEntry {
                task_id: task.id(),
                estimated_hours,
                real_hours,
                accuracy: entry_accuracy(estimated_hours, real_hours),
            })
        })
        .collect();

    let estimated: Vec<f64> = breakdown.iter().map(|entry| entry.estimated_hours).collect();
    let real: Vec<f64> = breakdown.iter().map(|entry| entry.real_hours).collect();
    let accuracies: Vec<f64> = breakdown.iter().map(|entry| entry.accuracy).collect();

    EstimateReport {
        avg_estimated_hours: mean(&estimated),
        avg_real_hours: mean(&real),
        accuracy: mean(&accuracies),
        breakdown,
    }
}

fn entry_accuracy(estimated_hours: f64, real_hours: f64) -> f64 {
    if estimated_hours == 0.0 {
        return 0.0;
    }
    let deviation = ((real_hours - estimated_hours) / estimated_hours).abs() * 100.0;
    100.0 - deviation.min(100.0)
}
