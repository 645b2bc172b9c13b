//! In-memory task repository for tests and ephemeral boards.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::workflow::{
    domain::{AssigneeEmail, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    assignee_index: HashMap<String, Vec<TaskId>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn index_assignee(state: &mut InMemoryTaskState, task: &Task) {
    if let Some(assignee) = task.assigned_to() {
        let key = assignee.as_str().to_owned();
        state.assignee_index.entry(key).or_default().push(task.id());
    }
}

/// Removes a task ID from the assignee index, cleaning up the entry if
/// empty.
fn remove_from_index(index: &mut HashMap<String, Vec<TaskId>>, task_id: TaskId, key: &str) {
    if let Some(ids) = index.get_mut(key) {
        ids.retain(|id| *id != task_id);
        if ids.is_empty() {
            index.remove(key);
        }
    }
}

/// Sorts a task list into the repository's stable output order.
fn sort_snapshot(tasks: &mut [Task]) {
    tasks.sort_by_key(|task| (task.created_at(), task.id()));
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }

        index_assignee(&mut state, task);
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let old_task = state
            .tasks
            .get(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?
            .clone();

        // Remove the old assignee index entry before adding the updated one.
        if let Some(old_assignee) = old_task.assigned_to() {
            remove_from_index(&mut state.assignee_index, task.id(), old_assignee.as_str());
        }

        index_assignee(&mut state, task);
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut tasks: Vec<Task> = state.tasks.values().cloned().collect();
        sort_snapshot(&mut tasks);
        Ok(tasks)
    }

    async fn list_by_assignee(
        &self,
        assignee: &AssigneeEmail,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut tasks: Vec<Task> = state
            .assignee_index
            .get(assignee.as_str())
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.tasks.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        sort_snapshot(&mut tasks);
        Ok(tasks)
    }
}
