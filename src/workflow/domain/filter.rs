//! Composable filter predicate over task lists.

use super::{Area, AssigneeEmail, Priority, Task, deadline};
use chrono::{DateTime, Utc};

/// Filter specification applied to a task list before display or scoped
/// aggregation.
///
/// Every constraint is optional; active constraints combine with logical
/// AND. A filter with no constraints is the identity: it keeps every task
/// in its original order.
///
/// The `overdue_only` constraint uses the same semantics as
/// [`is_overdue`](super::is_overdue), so closed tasks are never kept by it. The
/// application this engine was extracted from compared raw due dates here
/// instead; unifying on one overdue definition is a deliberate deviation,
/// recorded in `DESIGN.md`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    search_text: Option<String>,
    area: Option<Area>,
    assignee: Option<AssigneeEmail>,
    priority: Option<Priority>,
    overdue_only: bool,
}

impl TaskFilter {
    /// Creates a filter with no constraints.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            search_text: None,
            area: None,
            assignee: None,
            priority: None,
            overdue_only: false,
        }
    }

    /// Keeps tasks whose title contains the given text, case-insensitively.
    ///
    /// Text that trims to nothing leaves the filter unchanged.
    #[must_use]
    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        let normalized = text.into().trim().to_lowercase();
        if !normalized.is_empty() {
            self.search_text = Some(normalized);
        }
        self
    }

    /// Keeps tasks belonging to the given area.
    #[must_use]
    pub const fn with_area(mut self, area: Area) -> Self {
        self.area = Some(area);
        self
    }

    /// Keeps tasks assigned to the given person.
    #[must_use]
    pub fn with_assignee(mut self, assignee: AssigneeEmail) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Keeps tasks with the given priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Keeps only overdue tasks.
    #[must_use]
    pub const fn overdue_only(mut self) -> Self {
        self.overdue_only = true;
        self
    }

    /// Returns `true` when no constraint is active.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.search_text.is_none()
            && self.area.is_none()
            && self.assignee.is_none()
            && self.priority.is_none()
            && !self.overdue_only
    }

    /// Returns `true` when the task satisfies every active constraint.
    #[must_use]
    pub fn matches(&self, task: &Task, now: DateTime<Utc>) -> bool {
        if let Some(needle) = &self.search_text {
            if !task.title().to_lowercase().contains(needle) {
                return false;
            }
        }
        if let Some(area) = self.area {
            if task.area() != Some(area) {
                return false;
            }
        }
        if let Some(assignee) = &self.assignee {
            if task.assigned_to() != Some(assignee) {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if task.priority() != Some(priority) {
                return false;
            }
        }
        if self.overdue_only && !deadline::is_overdue(task, now) {
            return false;
        }
        true
    }

    /// Applies the filter to a task list, preserving order.
    #[must_use]
    pub fn apply<'a>(&self, tasks: &'a [Task], now: DateTime<Utc>) -> Vec<&'a Task> {
        tasks.iter().filter(|task| self.matches(task, now)).collect()
    }
}
