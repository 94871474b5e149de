use std::sync::Arc;

use crate::services::auth_service::AuthService;
use crate::services::task_service::TaskService;
use crate::store::memory::{MemorySessionStore, MemoryTaskStore, MemoryUserStore};

/// Shared application state, passed to handlers through axum's `State`
/// extractor. There is no ambient "current user" global; per-request identity
/// travels in request extensions only.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub tasks: TaskService,
}

impl AppState {
    /// State backed by the in-process document store.
    pub fn in_memory() -> Self {
        Self {
            auth: AuthService::new(
                Arc::new(MemoryUserStore::new()),
                Arc::new(MemorySessionStore::new()),
            ),
            tasks: TaskService::new(Arc::new(MemoryTaskStore::new())),
        }
    }
}
