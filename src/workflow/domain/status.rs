//! Workflow status, priority, and organisational-area enumerations.

use super::WorkflowDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task workflow status.
///
/// The four statuses form a cycle
/// `Pending → InProgress → InReview → Closed → Pending`; [`Status::next`]
/// walks it. The cycle is advisory (a board column convenience), not an
/// enforced edge set: [`super::Task::set_status`] accepts any target status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Task has been created but work has not started.
    #[default]
    #[serde(rename = "pendiente")]
    Pending,
    /// Task is being worked on.
    #[serde(rename = "en_proceso")]
    InProgress,
    /// Task is awaiting review.
    #[serde(rename = "en_revision")]
    InReview,
    /// Task has been completed.
    #[serde(rename = "cerrada")]
    Closed,
}

impl Status {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pendiente",
            Self::InProgress => "en_proceso",
            Self::InReview => "en_revision",
            Self::Closed => "cerrada",
        }
    }

    /// Returns the next status on the workflow cycle.
    ///
    /// `Closed` wraps around to `Pending` (reopen), so composing `next`
    /// four times yields the starting status.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Pending => Self::InProgress,
            Self::InProgress => Self::InReview,
            Self::InReview => Self::Closed,
            Self::Closed => Self::Pending,
        }
    }
}

impl TryFrom<&str> for Status {
    type Error = WorkflowDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pendiente" => Ok(Self::Pending),
            "en_proceso" => Ok(Self::InProgress),
            "en_revision" => Ok(Self::InReview),
            "cerrada" => Ok(Self::Closed),
            _ => Err(WorkflowDomainError::UnknownStatus(value.to_owned())),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Task priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Urgent work.
    #[serde(rename = "alta")]
    High,
    /// Default importance.
    #[serde(rename = "media")]
    Medium,
    /// Background work.
    #[serde(rename = "baja")]
    Low,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "alta",
            Self::Medium => "media",
            Self::Low => "baja",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = WorkflowDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "alta" => Ok(Self::High),
            "media" => Ok(Self::Medium),
            "baja" => Ok(Self::Low),
            _ => Err(WorkflowDomainError::UnknownPriority(value.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Organisational area a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Area {
    /// Legal department.
    #[serde(rename = "legal")]
    Legal,
    /// Public works department.
    #[serde(rename = "works")]
    Works,
    /// Treasury department.
    #[serde(rename = "treasury")]
    Treasury,
    /// General administration.
    #[serde(rename = "administration")]
    Administration,
    /// Human resources.
    #[serde(rename = "hr")]
    HumanResources,
}

impl Area {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Legal => "legal",
            Self::Works => "works",
            Self::Treasury => "treasury",
            Self::Administration => "administration",
            Self::HumanResources => "hr",
        }
    }
}

impl TryFrom<&str> for Area {
    type Error = WorkflowDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "legal" => Ok(Self::Legal),
            "works" => Ok(Self::Works),
            "treasury" => Ok(Self::Treasury),
            "administration" => Ok(Self::Administration),
            "hr" => Ok(Self::HumanResources),
            _ => Err(WorkflowDomainError::UnknownArea(value.to_owned())),
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
