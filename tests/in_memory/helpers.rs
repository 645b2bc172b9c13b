//! Shared test helpers for in-memory integration tests.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use mockable::{Clock, DefaultClock};
use rstest::fixture;
use std::sync::Arc;
use tablero::workflow::{
    adapters::memory::InMemoryTaskRepository,
    domain::{
        Area, AssigneeEmail, PersistedTaskData, Priority, Status, TagSet, Task, TaskId,
    },
    ports::TaskRepository,
    services::TaskWorkflowService,
};

/// Service type used by the integration tests.
pub type TestWorkflowService = TaskWorkflowService<InMemoryTaskRepository, DefaultClock>;

/// Clock pinned to a fixed instant for deterministic reporting assertions.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<chrono::Local> {
        self.0.with_timezone(&chrono::Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A fixed reference instant used across integration tests.
pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

/// Provides a workflow service over a fresh repository.
#[fixture]
pub fn service() -> TestWorkflowService {
    TaskWorkflowService::new(Arc::new(InMemoryTaskRepository::new()), Arc::new(DefaultClock))
}

/// Specification for seeding one snapshot task.
pub struct SeedTask {
    pub title: &'static str,
    pub status: Status,
    pub area: Option<Area>,
    pub assignee: Option<&'static str>,
    pub priority: Option<Priority>,
    pub created_ago: TimeDelta,
    pub due_in: TimeDelta,
    pub completed_ago: Option<TimeDelta>,
    pub estimated_hours: Option<f64>,
}

impl SeedTask {
    /// A pending task created a day ago and due tomorrow.
    pub fn pending(title: &'static str) -> Self {
        Self {
            title,
            status: Status::Pending,
            area: None,
            assignee: None,
            priority: None,
            created_ago: TimeDelta::days(1),
            due_in: TimeDelta::days(1),
            completed_ago: None,
            estimated_hours: None,
        }
    }

    /// A task closed `completed_ago` before the reference instant.
    pub fn closed(title: &'static str, created_ago: TimeDelta, completed_ago: TimeDelta) -> Self {
        Self {
            title,
            status: Status::Closed,
            area: None,
            assignee: None,
            priority: None,
            created_ago,
            due_in: TimeDelta::days(1),
            completed_ago: Some(completed_ago),
            estimated_hours: None,
        }
    }
}

/// Stores seed tasks relative to the reference instant and returns them.
pub async fn seed_tasks(
    repo: &InMemoryTaskRepository,
    seeds: Vec<SeedTask>,
) -> Vec<Task> {
    let now = reference_time();
    let mut tasks = Vec::new();
    for seed in seeds {
        let created_at = now - seed.created_ago;
        let task = Task::from_persisted(PersistedTaskData {
            id: TaskId::new(),
            title: seed.title.to_owned(),
            description: None,
            area: seed.area,
            assigned_to: seed
                .assignee
                .map(|email| AssigneeEmail::new(email).expect("valid email")),
            priority: seed.priority,
            status: seed.status,
            due_at: now + seed.due_in,
            created_at,
            updated_at: created_at,
            completed_at: seed.completed_ago.map(|ago| now - ago),
            estimated_hours: seed.estimated_hours,
            tags: TagSet::empty(),
        });
        repo.store(&task).await.expect("seed task stores");
        tasks.push(task);
    }
    tasks
}
