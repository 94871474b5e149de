//! In-process document store. One `RwLock`-guarded table per record kind
//! gives the atomic single-record read-modify-write the services assume.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::session::{SessionId, SessionRecord};
use crate::models::task::{Task, TaskId};
use crate::models::user::{User, UserId};
use crate::store::{SessionStore, StoreError, TaskStore, UserStore};

#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<UserId, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, user: User) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(StoreError::Conflict(format!(
                "email '{}' is already registered",
                user.email
            )));
        }
        users.insert(user.id, user);
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }
}

#[derive(Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<SessionId, SessionRecord>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn insert(&self, session: SessionRecord) -> Result<(), StoreError> {
        self.sessions.write().await.insert(session.id, session);
        Ok(())
    }

    async fn find(&self, id: SessionId) -> Result<Option<SessionRecord>, StoreError> {
        Ok(self.sessions.read().await.get(&id).cloned())
    }

    async fn remove(&self, id: SessionId) -> Result<(), StoreError> {
        self.sessions.write().await.remove(&id);
        Ok(())
    }
}

struct StoredTask {
    task: Task,
    // Insertion sequence; breaks creation-time ties so listing order is stable.
    seq: u64,
}

#[derive(Default)]
pub struct MemoryTaskStore {
    inner: RwLock<TaskTable>,
}

#[derive(Default)]
struct TaskTable {
    rows: HashMap<TaskId, StoredTask>,
    next_seq: u64,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn insert(&self, task: Task) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.rows.insert(task.id, StoredTask { task, seq });
        Ok(())
    }

    async fn find(&self, id: TaskId) -> Result<Option<Task>, StoreError> {
        Ok(self.inner.read().await.rows.get(&id).map(|s| s.task.clone()))
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Task>, StoreError> {
        let inner = self.inner.read().await;
        let mut rows: Vec<&StoredTask> = inner
            .rows
            .values()
            .filter(|s| s.task.owner_id == owner)
            .collect();
        rows.sort_by(|a, b| {
            b.task
                .created_at
                .cmp(&a.task.created_at)
                .then(b.seq.cmp(&a.seq))
        });
        Ok(rows.into_iter().map(|s| s.task.clone()).collect())
    }

    async fn update(&self, task: Task) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        match inner.rows.get_mut(&task.id) {
            Some(stored) => {
                stored.task = task;
                Ok(())
            }
            None => Err(StoreError::Backend(format!(
                "update of missing task {}",
                task.id
            ))),
        }
    }

    async fn remove(&self, id: TaskId) -> Result<(), StoreError> {
        self.inner.write().await.rows.remove(&id);
        Ok(())
    }
}
