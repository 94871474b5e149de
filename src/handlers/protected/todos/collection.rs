use axum::extract::State;
use axum::{Extension, Json};
use serde::Deserialize;

use crate::middleware::auth::CurrentUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::models::task::Task;
use crate::state::AppState;

/// GET /todos - All tasks owned by the caller, newest first
pub async fn get(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Vec<Task>> {
    let tasks = state.tasks.list(user.id).await?;
    Ok(ApiResponse::success(tasks))
}

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
}

/// POST /todos - Create a task owned by the caller
///
/// `completed` always starts false; the owner is the authenticated identity,
/// never a request field. `400` when the title is missing or empty.
pub async fn post(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<CreateTaskRequest>,
) -> ApiResult<Task> {
    let task = state.tasks.create(user.id, payload.title.as_deref()).await?;
    Ok(ApiResponse::created(task))
}
