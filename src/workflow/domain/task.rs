//! Task aggregate root and related lifecycle types.

use super::{Area, AssigneeEmail, Priority, Status, TagSet, TaskId, WorkflowDomainError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// The canonical mutable copy lives in the external document store; values
/// of this type are read-only snapshots except when mutated through the
/// methods below, which keep `updated_at` and `completed_at` consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    area: Option<Area>,
    assigned_to: Option<AssigneeEmail>,
    priority: Option<Priority>,
    status: Status,
    due_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    estimated_hours: Option<f64>,
    tags: TagSet,
}

/// Validated input for creating a new task.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTaskData {
    /// Task title; must not be empty after trimming.
    pub title: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Organisational area, if known.
    pub area: Option<Area>,
    /// Responsible person, if assigned.
    pub assigned_to: Option<AssigneeEmail>,
    /// Priority level, if set.
    pub priority: Option<Priority>,
    /// Deadline.
    pub due_at: DateTime<Utc>,
    /// Optional time-to-complete estimate in hours.
    pub estimated_hours: Option<f64>,
    /// Normalised tag set.
    pub tags: TagSet,
}

/// Parameter object for reconstructing a persisted task aggregate.
///
/// Values are trusted as-is; validation happened when the task was first
/// created.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted area, if any.
    pub area: Option<Area>,
    /// Persisted assignee, if any.
    pub assigned_to: Option<AssigneeEmail>,
    /// Persisted priority, if any.
    pub priority: Option<Priority>,
    /// Persisted workflow status.
    pub status: Status,
    /// Persisted deadline.
    pub due_at: DateTime<Utc>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Persisted completion timestamp, if the task is closed.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted estimate in hours, if any.
    pub estimated_hours: Option<f64>,
    /// Persisted tags.
    pub tags: TagSet,
}

impl Task {
    /// Creates a new task in `Pending` status.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowDomainError::EmptyTitle`] when the title trims to
    /// nothing, or [`WorkflowDomainError::InvalidEstimate`] when the
    /// estimate is negative or not finite.
    pub fn new(data: NewTaskData, clock: &impl Clock) -> Result<Self, WorkflowDomainError> {
        let title = data.title.trim().to_owned();
        if title.is_empty() {
            return Err(WorkflowDomainError::EmptyTitle);
        }
        if let Some(hours) = data.estimated_hours {
            if !hours.is_finite() || hours < 0.0 {
                return Err(WorkflowDomainError::InvalidEstimate(hours));
            }
        }

        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            title,
            description: data.description,
            area: data.area,
            assigned_to: data.assigned_to,
            priority: data.priority,
            status: Status::Pending,
            due_at: data.due_at,
            created_at: timestamp,
            updated_at: timestamp,
            completed_at: None,
            estimated_hours: data.estimated_hours,
            tags: data.tags,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            area: data.area,
            assigned_to: data.assigned_to,
            priority: data.priority,
            status: data.status,
            due_at: data.due_at,
            created_at: data.created_at,
            updated_at: data.updated_at,
            completed_at: data.completed_at,
            estimated_hours: data.estimated_hours,
            tags: data.tags,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the organisational area, if any.
    #[must_use]
    pub const fn area(&self) -> Option<Area> {
        self.area
    }

    /// Returns the responsible person, if assigned.
    #[must_use]
    pub const fn assigned_to(&self) -> Option<&AssigneeEmail> {
        self.assigned_to.as_ref()
    }

    /// Returns the priority level, if set.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn due_at(&self) -> DateTime<Utc> {
        self.due_at
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the completion timestamp while the task is closed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the estimate in hours, if any.
    #[must_use]
    pub const fn estimated_hours(&self) -> Option<f64> {
        self.estimated_hours
    }

    /// Returns the tag set.
    #[must_use]
    pub const fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Sets the workflow status.
    ///
    /// Any of the four statuses may be requested from any current status;
    /// the cycle exposed by [`Status::next`] is a board convenience, not an
    /// enforced edge set. Entering `Closed` records `completed_at`; leaving
    /// `Closed` clears it.
    pub fn set_status(&mut self, requested: Status, clock: &impl Clock) {
        let was_closed = self.status == Status::Closed;
        self.status = requested;
        if requested == Status::Closed {
            self.completed_at = Some(clock.utc());
        } else if was_closed {
            self.completed_at = None;
        }
        self.touch(clock);
    }

    /// Reassigns the task, or removes the assignee when `None`.
    pub fn assign(&mut self, assignee: Option<AssigneeEmail>, clock: &impl Clock) {
        self.assigned_to = assignee;
        self.touch(clock);
    }

    /// Moves the deadline.
    pub fn reschedule(&mut self, due_at: DateTime<Utc>, clock: &impl Clock) {
        self.due_at = due_at;
        self.touch(clock);
    }

    /// Changes the priority, or clears it when `None`.
    pub fn reprioritize(&mut self, priority: Option<Priority>, clock: &impl Clock) {
        self.priority = priority;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
