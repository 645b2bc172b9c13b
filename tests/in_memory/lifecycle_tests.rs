//! End-to-end task lifecycle tests through the public API.

use super::helpers::{TestWorkflowService, service};
use chrono::{TimeDelta, Utc};
use rstest::rstest;
use tablero::workflow::{
    domain::{Priority, Status},
    services::{CreateTaskRequest, TransitionTaskRequest},
};

fn request(title: &str) -> CreateTaskRequest {
    CreateTaskRequest::new(title, Utc::now() + TimeDelta::days(3))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_cycle_returns_to_pending_without_completion(service: TestWorkflowService) {
    let created = service
        .create_task(request("Walk the whole board"))
        .await
        .expect("task creation succeeds");
    assert_eq!(created.status(), Status::Pending);

    let mut task = created;
    for expected in [
        Status::InProgress,
        Status::InReview,
        Status::Closed,
        Status::Pending,
    ] {
        task = service
            .advance_task(task.id())
            .await
            .expect("advance succeeds");
        assert_eq!(task.status(), expected);
    }

    // Back at pending after the wrap-around reopen, with no stale
    // completion timestamp.
    assert_eq!(task.completed_at(), None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_reflects_persisted_edits(service: TestWorkflowService) {
    let first = service
        .create_task(request("First").with_priority(Priority::Low))
        .await
        .expect("task creation succeeds");
    service
        .create_task(request("Second"))
        .await
        .expect("task creation succeeds");

    service
        .transition_task(TransitionTaskRequest::new(first.id(), "en_proceso"))
        .await
        .expect("transition succeeds");

    let tasks = service.list_tasks().await.expect("listing succeeds");
    assert_eq!(tasks.len(), 2);
    let first_listed = tasks
        .iter()
        .find(|task| task.id() == first.id())
        .expect("first task is listed");
    assert_eq!(first_listed.status(), Status::InProgress);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_task_returns_none_for_unknown_id(service: TestWorkflowService) {
    let missing = service
        .find_task(tablero::workflow::domain::TaskId::new())
        .await
        .expect("lookup succeeds");
    assert!(missing.is_none());
}
