//! Shared world state for task workflow BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use tablero::workflow::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{TaskWorkflowError, TaskWorkflowService},
};

/// Service type used by the BDD world.
pub type TestWorkflowService = TaskWorkflowService<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for task workflow behaviour tests.
pub struct TaskWorkflowWorld {
    pub service: TestWorkflowService,
    pub last_created_task: Option<Task>,
    pub last_transition_result: Option<Result<Task, TaskWorkflowError>>,
}

impl TaskWorkflowWorld {
    /// Creates a world with empty pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskWorkflowService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            last_created_task: None,
            last_transition_result: None,
        }
    }
}

impl Default for TaskWorkflowWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskWorkflowWorld {
    TaskWorkflowWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
