use axum::extract::State;
use axum::response::IntoResponse;
use axum::Extension;
use axum_extra::extract::CookieJar;
use serde_json::json;

use crate::error::ApiError;
use crate::middleware::auth::{clear_session_cookie, CurrentUser};
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::models::user::UserSummary;
use crate::state::AppState;

/// GET /auth/me - Identity summary for the active session
pub async fn me(Extension(user): Extension<CurrentUser>) -> ApiResult<UserSummary> {
    Ok(ApiResponse::success(UserSummary {
        id: user.id,
        username: user.username,
        email: user.email,
    }))
}

/// POST /auth/logout - Revoke the current session and clear the cookie
///
/// The session record is deleted server-side, so a replay of the old token
/// is unauthenticated even if the client kept it.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    Extension(user): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    state.auth.logout(user.session_id).await?;
    tracing::info!("logout: {} ({})", user.username, user.id);

    let jar = jar.remove(clear_session_cookie());
    Ok((jar, ApiResponse::success(json!({ "message": "Logged out" }))))
}
