use std::sync::Arc;

use serde::Deserialize;

use crate::models::task::{Task, TaskId};
use crate::models::user::UserId;
use crate::store::{StoreError, TaskStore};

#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("task not found")]
    NotFound,
    #[error("caller does not own this task")]
    Forbidden,
    #[error("{0}")]
    InvalidInput(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Partial update. Absent fields retain their prior values.
#[derive(Debug, Default, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

/// Ownership-scoped task operations. Every method takes the caller's
/// identity from context; a caller-supplied owner id does not exist in this
/// API. Existence is checked before ownership, so a non-owner sees
/// `Forbidden` rather than `NotFound` for someone else's task id.
#[derive(Clone)]
pub struct TaskService {
    tasks: Arc<dyn TaskStore>,
}

impl TaskService {
    pub fn new(tasks: Arc<dyn TaskStore>) -> Self {
        Self { tasks }
    }

    /// All tasks owned by the caller, newest first.
    pub async fn list(&self, caller: UserId) -> Result<Vec<Task>, TaskError> {
        Ok(self.tasks.list_by_owner(caller).await?)
    }

    /// Create a task owned by the caller. New tasks start incomplete.
    pub async fn create(&self, caller: UserId, title: Option<&str>) -> Result<Task, TaskError> {
        let title = title.map(str::trim).unwrap_or_default();
        if title.is_empty() {
            return Err(TaskError::InvalidInput("Title is required".to_string()));
        }

        let task = Task::new(caller, title.to_string());
        self.tasks.insert(task.clone()).await?;
        Ok(task)
    }

    /// Apply a patch to an owned task and return the updated record.
    pub async fn update(
        &self,
        caller: UserId,
        id: TaskId,
        patch: TaskPatch,
    ) -> Result<Task, TaskError> {
        let mut task = self.tasks.find(id).await?.ok_or(TaskError::NotFound)?;
        if task.owner_id != caller {
            return Err(TaskError::Forbidden);
        }

        if let Some(title) = patch.title {
            let title = title.trim();
            // The non-empty title invariant holds through updates too.
            if title.is_empty() {
                return Err(TaskError::InvalidInput(
                    "Title must not be empty".to_string(),
                ));
            }
            task.title = title.to_string();
        }
        if let Some(completed) = patch.completed {
            task.completed = completed;
        }

        self.tasks.update(task.clone()).await?;
        Ok(task)
    }

    /// Remove an owned task. Deleting an already-deleted id reports
    /// `NotFound`.
    pub async fn delete(&self, caller: UserId, id: TaskId) -> Result<(), TaskError> {
        let task = self.tasks.find(id).await?.ok_or(TaskError::NotFound)?;
        if task.owner_id != caller {
            return Err(TaskError::Forbidden);
        }

        self.tasks.remove(id).await?;
        Ok(())
    }
}
