//! Domain model for task workflow management.
//!
//! The workflow domain models validated task creation, status changes,
//! deadline evaluation, and list filtering while keeping all infrastructure
//! concerns outside of the domain boundary.

mod deadline;
mod error;
mod filter;
mod ids;
mod status;
mod task;

pub use deadline::{format_remaining, is_overdue, remaining};
pub use error::WorkflowDomainError;
pub use filter::TaskFilter;
pub use ids::{AssigneeEmail, TagSet, TaskId};
pub use status::{Area, Priority, Status};
pub use task::{NewTaskData, PersistedTaskData, Task};
