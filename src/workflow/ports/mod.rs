//! Port contracts for the workflow module.

mod repository;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
