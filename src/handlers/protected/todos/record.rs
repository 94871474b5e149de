use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde_json::{json, Value};

use crate::middleware::auth::CurrentUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::models::task::{Task, TaskId};
use crate::services::task_service::TaskPatch;
use crate::state::AppState;

/// PUT /todos/:id - Patch title and/or completed on an owned task
///
/// `404` if the id does not exist, `403` if it exists but belongs to someone
/// else; the existence check runs first.
pub async fn put(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<TaskId>,
    Json(patch): Json<TaskPatch>,
) -> ApiResult<Task> {
    let task = state.tasks.update(user.id, id, patch).await?;
    Ok(ApiResponse::success(task))
}

/// DELETE /todos/:id - Remove an owned task
///
/// Returns a confirmation, not the deleted record. Same existence and
/// ownership checks as update; repeating a delete yields `404`.
pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<TaskId>,
) -> ApiResult<Value> {
    state.tasks.delete(user.id, id).await?;
    Ok(ApiResponse::success(json!({ "message": "Task removed" })))
}
