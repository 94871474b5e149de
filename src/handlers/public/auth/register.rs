use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::error::ApiError;
use crate::middleware::auth::session_cookie;
use crate::middleware::response::ApiResponse;
use crate::services::auth_service::Registration;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /auth/register - Create an account and open its first session
///
/// Expected Input:
/// ```json
/// {
///   "username": "string",   // Required: 3-50 chars, alphanumeric/_/-
///   "email": "string",      // Required: login key, unique
///   "password": "string"    // Required: at least 8 chars
/// }
/// ```
///
/// Returns `201` with the identity summary (never the credential hash) and
/// sets the session cookie; `400` on any invalid input.
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let registration = Registration {
        username: payload.username.unwrap_or_default(),
        email: payload.email.unwrap_or_default(),
        password: payload.password.unwrap_or_default(),
    };

    let (user, token) = state.auth.register(registration).await?;
    tracing::info!("registered: {} ({})", user.username, user.id);

    Ok((jar.add(session_cookie(token)), ApiResponse::created(user)))
}
