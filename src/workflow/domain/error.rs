//! Error types for workflow domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WorkflowDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The assignee value is not a plausible email address.
    #[error("invalid assignee email: {0}")]
    InvalidAssigneeEmail(String),

    /// A tag is empty after trimming.
    #[error("tags must not be empty")]
    EmptyTag,

    /// More tags were supplied than a task may carry.
    #[error("too many tags: {0}, at most 10 allowed")]
    TooManyTags(usize),

    /// The estimated-hours value is negative or not finite.
    #[error("invalid estimated hours: {0}")]
    InvalidEstimate(f64),

    /// The status value is not one of the four workflow statuses.
    #[error("unknown task status: {0}")]
    UnknownStatus(String),

    /// The priority value is not one of the three priority levels.
    #[error("unknown task priority: {0}")]
    UnknownPriority(String),

    /// The area value is not a recognised organisational area.
    #[error("unknown area: {0}")]
    UnknownArea(String),
}
