pub mod memory;

use async_trait::async_trait;

use crate::models::session::{SessionId, SessionRecord};
use crate::models::task::{Task, TaskId};
use crate::models::user::{User, UserId};

/// Backing-store failure. `Conflict` is the only kind callers recover from;
/// everything else surfaces as an internal error at the boundary.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Identity records, keyed by opaque id with a unique-email constraint.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user. Fails with [`StoreError::Conflict`] if the email is
    /// already registered.
    async fn insert(&self, user: User) -> Result<(), StoreError>;
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
}

/// Live sessions, keyed by the token's `jti`.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert(&self, session: SessionRecord) -> Result<(), StoreError>;
    async fn find(&self, id: SessionId) -> Result<Option<SessionRecord>, StoreError>;
    async fn remove(&self, id: SessionId) -> Result<(), StoreError>;
}

/// Task records. Single-record operations are atomic; `list_by_owner` never
/// crosses an ownership boundary.
#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn insert(&self, task: Task) -> Result<(), StoreError>;
    async fn find(&self, id: TaskId) -> Result<Option<Task>, StoreError>;
    /// All tasks owned by `owner`, newest first.
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Task>, StoreError>;
    /// Replace an existing task wholesale, keyed by its id.
    async fn update(&self, task: Task) -> Result<(), StoreError>;
    async fn remove(&self, id: TaskId) -> Result<(), StoreError>;
}
