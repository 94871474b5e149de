use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A task record. `owner_id` is set at creation and never changes; there is
/// no transfer-of-ownership operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// New task owned by `owner_id`. Tasks always start incomplete.
    pub fn new(owner_id: UserId, title: String) -> Self {
        Self {
            id: TaskId::new(),
            title,
            completed: false,
            owner_id,
            created_at: Utc::now(),
        }
    }
}
