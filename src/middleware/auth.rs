use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::config;
use crate::error::ApiError;
use crate::models::session::SessionId;
use crate::models::user::UserId;
use crate::state::AppState;

/// Authenticated caller context, attached to the request by
/// [`session_auth_middleware`]. Downstream handlers read it from request
/// extensions and never re-derive identity.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub session_id: SessionId,
}

/// Session authentication middleware. Extracts the credential token, resolves
/// it to an identity, and injects a [`CurrentUser`] into the request. Missing
/// token, bad signature, expired or revoked session, and vanished user all
/// produce the same `401` body.
pub async fn session_auth_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token(&jar, request.headers())
        .ok_or_else(|| ApiError::unauthenticated("Not authenticated"))?;

    let (user, session_id) = state.auth.authenticate(&token).await.map_err(|e| {
        // Cause stays in the server log; the client sees one uniform failure
        tracing::debug!("request authentication failed: {}", e);
        ApiError::unauthenticated("Not authenticated")
    })?;

    request.extensions_mut().insert(CurrentUser {
        id: user.id,
        username: user.username,
        email: user.email,
        session_id,
    });

    Ok(next.run(request).await)
}

/// Pull the session token from the cookie, falling back to a bearer header.
fn extract_token(jar: &CookieJar, headers: &HeaderMap) -> Option<String> {
    let cookie_name = &config::config().security.cookie_name;
    if let Some(cookie) = jar.get(cookie_name) {
        let value = cookie.value();
        if !value.is_empty() {
            return Some(value.to_string());
        }
    }

    let auth_str = headers.get("authorization")?.to_str().ok()?;
    let token = auth_str.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Session cookie carrying `token`: http-only, same-site, path-wide. The
/// `Secure` flag follows environment config.
pub fn session_cookie(token: String) -> Cookie<'static> {
    let security = &config::config().security;

    Cookie::build((security.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(security.cookie_secure)
        .build()
}

/// Cookie matching the session cookie's name and path, for removal on logout.
pub fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((config::config().security.cookie_name.clone(), ""))
        .path("/")
        .http_only(true)
        .build()
}
