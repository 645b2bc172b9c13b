//! Identifier and validated scalar types for the workflow domain.

use super::WorkflowDomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a task record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new random task identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a task identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for TaskId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalised email address of the person responsible for a task.
///
/// Stored lowercase. Validation is deliberately shallow: the identity
/// provider owns real address verification, this type only rejects values
/// that cannot be an address at all.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssigneeEmail(String);

impl AssigneeEmail {
    /// Creates a validated assignee email.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowDomainError::InvalidAssigneeEmail`] when the value
    /// is empty, contains whitespace, or lacks a local part and domain
    /// separated by `@`.
    pub fn new(value: impl Into<String>) -> Result<Self, WorkflowDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();
        let mut segments = normalized.split('@');
        let local = segments.next().unwrap_or_default();
        let domain = segments.next().unwrap_or_default();
        let has_more_segments = segments.next().is_some();
        let is_valid = !local.is_empty()
            && !domain.is_empty()
            && !has_more_segments
            && !normalized.chars().any(char::is_whitespace);

        if !is_valid {
            return Err(WorkflowDomainError::InvalidAssigneeEmail(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the address as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AssigneeEmail {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AssigneeEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalised set of free-form task tags.
///
/// Tags are trimmed, lowercased, and deduplicated on construction; the
/// empty string is rejected and at most [`TagSet::MAX_TAGS`] distinct tags
/// are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    /// Largest number of tags a task may carry.
    pub const MAX_TAGS: usize = 10;

    /// Creates an empty tag set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(BTreeSet::new())
    }

    /// Creates a validated tag set from raw values.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowDomainError::EmptyTag`] when any value trims to the
    /// empty string, or [`WorkflowDomainError::TooManyTags`] when more than
    /// [`Self::MAX_TAGS`] distinct tags remain after normalisation.
    pub fn new(
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, WorkflowDomainError> {
        let mut tags = BTreeSet::new();
        for value in values {
            let normalized = value.into().trim().to_lowercase();
            if normalized.is_empty() {
                return Err(WorkflowDomainError::EmptyTag);
            }
            tags.insert(normalized);
        }
        if tags.len() > Self::MAX_TAGS {
            return Err(WorkflowDomainError::TooManyTags(tags.len()));
        }
        Ok(Self(tags))
    }

    /// Returns the number of tags in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the set holds no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` when the set contains the given tag.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    /// Iterates over the tags in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
