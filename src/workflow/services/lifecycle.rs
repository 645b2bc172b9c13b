//! Service layer for task creation, status changes, and field edits.

use crate::workflow::{
    domain::{
        Area, AssigneeEmail, NewTaskData, Priority, Status, TagSet, Task, TaskId,
        WorkflowDomainError,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTaskRequest {
    title: String,
    due_at: DateTime<Utc>,
    description: Option<String>,
    area: Option<Area>,
    assigned_to: Option<String>,
    priority: Option<Priority>,
    estimated_hours: Option<f64>,
    tags: Vec<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, due_at: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            due_at,
            description: None,
            area: None,
            assigned_to: None,
            priority: None,
            estimated_hours: None,
            tags: Vec::new(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the organisational area.
    #[must_use]
    pub const fn with_area(mut self, area: Area) -> Self {
        self.area = Some(area);
        self
    }

    /// Sets the responsible person by email address.
    #[must_use]
    pub fn assigned_to(mut self, assignee: impl Into<String>) -> Self {
        self.assigned_to = Some(assignee.into());
        self
    }

    /// Sets the priority level.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the time-to-complete estimate in hours.
    #[must_use]
    pub const fn with_estimated_hours(mut self, hours: f64) -> Self {
        self.estimated_hours = Some(hours);
        self
    }

    /// Sets the task tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }
}

/// Request payload for a status transition.
///
/// Carries the requested status as the raw wire string so callers at the
/// edge (UI handlers, API routes) can pass user input straight through and
/// get a domain-level parse error back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTaskRequest {
    task_id: TaskId,
    requested_status: String,
}

impl TransitionTaskRequest {
    /// Creates a transition request.
    #[must_use]
    pub fn new(task_id: TaskId, requested_status: impl Into<String>) -> Self {
        Self {
            task_id,
            requested_status: requested_status.into(),
        }
    }
}

/// Service-level errors for task workflow operations.
#[derive(Debug, Error)]
pub enum TaskWorkflowError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] WorkflowDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task workflow service operations.
pub type TaskWorkflowResult<T> = Result<T, TaskWorkflowError>;

/// Task workflow orchestration service.
#[derive(Clone)]
pub struct TaskWorkflowService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskWorkflowService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task workflow service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a new task in `Pending` status and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError`] when input validation fails or the
    /// repository rejects persistence.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskWorkflowResult<Task> {
        let assigned_to = request.assigned_to.map(AssigneeEmail::new).transpose()?;
        let tags = TagSet::new(request.tags)?;

        let task = Task::new(
            NewTaskData {
                title: request.title,
                description: request.description,
                area: request.area,
                assigned_to,
                priority: request.priority,
                due_at: request.due_at,
                estimated_hours: request.estimated_hours,
                tags,
            },
            &*self.clock,
        )?;
        self.repository.store(&task).await?;
        info!(task_id = %task.id(), title = task.title(), "task created");
        Ok(task)
    }

    /// Applies a requested status to a task and persists the change.
    ///
    /// Any of the four statuses is a legal target; closing records the
    /// completion timestamp and reopening clears it.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowDomainError::UnknownStatus`] for an unrecognised
    /// status string, or [`TaskRepositoryError::NotFound`] when the task
    /// does not exist.
    pub async fn transition_task(
        &self,
        request: TransitionTaskRequest,
    ) -> TaskWorkflowResult<Task> {
        let requested = Status::try_from(request.requested_status.as_str())
            .map_err(TaskWorkflowError::Domain)?;
        let mut task = self.load(request.task_id).await?;

        let previous = task.status();
        task.set_status(requested, &*self.clock);
        self.repository.update(&task).await?;
        debug!(
            task_id = %task.id(),
            from = previous.as_str(),
            to = requested.as_str(),
            "task status changed"
        );
        Ok(task)
    }

    /// Moves a task to the next status on the workflow cycle.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    pub async fn advance_task(&self, task_id: TaskId) -> TaskWorkflowResult<Task> {
        let mut task = self.load(task_id).await?;
        task.set_status(task.status().next(), &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Reassigns a task, or removes the assignee when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowDomainError::InvalidAssigneeEmail`] for a malformed
    /// address, or [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    pub async fn reassign_task(
        &self,
        task_id: TaskId,
        assignee: Option<String>,
    ) -> TaskWorkflowResult<Task> {
        let assignee = assignee.map(AssigneeEmail::new).transpose()?;
        let mut task = self.load(task_id).await?;
        task.assign(assignee, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Moves a task's deadline.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    pub async fn reschedule_task(
        &self,
        task_id: TaskId,
        due_at: DateTime<Utc>,
    ) -> TaskWorkflowResult<Task> {
        let mut task = self.load(task_id).await?;
        task.reschedule(due_at, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Changes a task's priority, or clears it when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    pub async fn reprioritize_task(
        &self,
        task_id: TaskId,
        priority: Option<Priority>,
    ) -> TaskWorkflowResult<Task> {
        let mut task = self.load(task_id).await?;
        task.reprioritize(priority, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_task(&self, task_id: TaskId) -> TaskWorkflowResult<Option<Task>> {
        Ok(self.repository.find_by_id(task_id).await?)
    }

    /// Returns the full task snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::Repository`] when persistence lookup
    /// fails.
    pub async fn list_tasks(&self) -> TaskWorkflowResult<Vec<Task>> {
        Ok(self.repository.list_all().await?)
    }

    /// Returns all tasks assigned to the given person.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::Repository`] when persistence lookup
    /// fails.
    pub async fn tasks_for_assignee(
        &self,
        assignee: &AssigneeEmail,
    ) -> TaskWorkflowResult<Vec<Task>> {
        Ok(self.repository.list_by_assignee(assignee).await?)
    }

    async fn load(&self, task_id: TaskId) -> TaskWorkflowResult<Task> {
        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskWorkflowError::Repository(TaskRepositoryError::NotFound(
                task_id,
            )))
    }
}
