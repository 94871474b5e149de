use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::error::ApiError;
use crate::middleware::auth::session_cookie;
use crate::middleware::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /auth/login - Authenticate with email + password
///
/// On success the response carries the identity summary and sets the session
/// cookie. Unknown email and wrong password produce the same `401`; nothing
/// in the response says which one it was.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = payload.email.unwrap_or_default();
    let password = payload.password.unwrap_or_default();

    let (user, token) = state.auth.login(&email, &password).await?;
    tracing::info!("login: {} ({})", user.username, user.id);

    Ok((jar.add(session_cookie(token)), ApiResponse::success(user)))
}
