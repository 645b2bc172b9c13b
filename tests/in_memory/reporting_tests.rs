//! Dashboard assembly tests over a seeded snapshot.

use super::helpers::{FixedClock, SeedTask, reference_time, repo, seed_tasks};
use chrono::TimeDelta;
use rstest::rstest;
use std::sync::Arc;
use tablero::reporting::{AreaBucket, DashboardService};
use tablero::workflow::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Area, Priority, TaskFilter},
};

fn dashboard_service(
    repo: InMemoryTaskRepository,
) -> DashboardService<InMemoryTaskRepository, FixedClock> {
    DashboardService::new(Arc::new(repo), Arc::new(FixedClock(reference_time())))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dashboard_over_an_empty_board_is_all_zeros(repo: InMemoryTaskRepository) {
    let service = dashboard_service(repo);

    let report = service.dashboard(7).await.expect("dashboard assembles");

    assert_eq!(report.metrics.total, 0);
    assert_eq!(report.trend.len(), 7);
    assert_eq!(report.heatmap.len(), 7);
    assert!(report.areas.is_empty());
    assert!(report.performers.is_empty());
    assert!(report.estimates.breakdown.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dashboard_aggregates_the_seeded_snapshot(repo: InMemoryTaskRepository) {
    let mut legal_done = SeedTask::closed(
        "Legal review finished",
        TimeDelta::days(3),
        TimeDelta::days(1),
    );
    legal_done.area = Some(Area::Legal);
    legal_done.assignee = Some("ana@example.com");
    legal_done.estimated_hours = Some(48.0);

    let mut works_open = SeedTask::pending("Street light survey");
    works_open.area = Some(Area::Works);
    works_open.assignee = Some("bruno@example.com");
    works_open.priority = Some(Priority::High);

    seed_tasks(&repo, vec![legal_done, works_open, SeedTask::pending("Unfiled chore")]).await;
    let service = dashboard_service(repo);

    let report = service.dashboard(7).await.expect("dashboard assembles");

    assert_eq!(report.metrics.total, 3);
    assert_eq!(report.metrics.completed, 1);
    assert_eq!(report.metrics.pending, 2);
    assert_eq!(report.metrics.by_priority.high, 1);

    assert_eq!(report.areas.len(), 3);
    assert!(report.areas.contains_key(&AreaBucket::Assigned(Area::Legal)));
    assert!(report.areas.contains_key(&AreaBucket::Unassigned));

    let top = report.performers.first().expect("leaderboard has rows");
    assert_eq!(top.assignee.as_str(), "ana@example.com");
    assert_eq!(top.completed_in_window, 1);

    // Closed 2 days after creation with a 48-hour estimate.
    let entry = report.estimates.breakdown.first().expect("one eligible task");
    assert!((entry.real_hours - 48.0).abs() < 1e-9);
    assert!((entry.accuracy - 100.0).abs() < 1e-9);

    let trend_completed: usize = report.trend.iter().map(|point| point.completed).sum();
    assert_eq!(trend_completed, 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn filtered_metrics_scope_the_snapshot(repo: InMemoryTaskRepository) {
    let mut legal_one = SeedTask::pending("Draft bylaw amendment");
    legal_one.area = Some(Area::Legal);
    let mut legal_two = SeedTask::closed(
        "Contract signed",
        TimeDelta::days(5),
        TimeDelta::days(2),
    );
    legal_two.area = Some(Area::Legal);
    let mut treasury = SeedTask::pending("Budget reconciliation");
    treasury.area = Some(Area::Treasury);

    seed_tasks(&repo, vec![legal_one, legal_two, treasury]).await;
    let service = dashboard_service(repo);

    let metrics = service
        .filtered_metrics(&TaskFilter::new().with_area(Area::Legal))
        .await
        .expect("filtered metrics assemble");

    assert_eq!(metrics.total, 2);
    assert_eq!(metrics.completed, 1);
    assert_eq!(metrics.pending, 1);

    let everything = service
        .filtered_metrics(&TaskFilter::new())
        .await
        .expect("identity filter assembles");
    assert_eq!(everything.total, 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn closed_tasks_do_not_show_as_overdue(repo: InMemoryTaskRepository) {
    let mut late_closed = SeedTask::closed(
        "Finished after deadline",
        TimeDelta::days(5),
        TimeDelta::days(1),
    );
    late_closed.due_in = TimeDelta::days(-2);
    let mut late_open = SeedTask::pending("Still dragging");
    late_open.due_in = TimeDelta::days(-2);

    seed_tasks(&repo, vec![late_closed, late_open]).await;
    let service = dashboard_service(repo);

    let report = service.dashboard(7).await.expect("dashboard assembles");

    assert_eq!(report.metrics.overdue, 1);
    assert_eq!(report.metrics.completed, 1);
}
