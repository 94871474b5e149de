use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::{middleware as axum_middleware, Router};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod store;

use crate::state::AppState;

/// Build the application router. Public auth routes skip the session
/// middleware; every route in the protected groups passes through it and
/// reaches its handler only with a resolved identity in request extensions.
pub fn app(state: AppState) -> Router {
    let protected = todos_routes()
        .merge(auth_protected_routes())
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::session_auth_middleware,
        ));

    let mut router = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Public auth routes
        .merge(auth_public_routes())
        // Protected API
        .merge(protected);

    if config::config().security.enable_cors {
        router = router.layer(cors_layer());
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

fn auth_public_routes() -> Router<AppState> {
    use axum::routing::post;
    use handlers::public::auth;

    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

fn auth_protected_routes() -> Router<AppState> {
    use axum::routing::post;
    use handlers::protected::auth;

    Router::new()
        .route("/auth/me", get(auth::me))
        .route("/auth/logout", post(auth::logout))
}

fn todos_routes() -> Router<AppState> {
    use axum::routing::put;
    use handlers::protected::todos;

    Router::new()
        // Collection-level operations
        .route("/todos", get(todos::todos_get).post(todos::todos_post))
        // Record-level operations
        .route("/todos/:id", put(todos::todo_put).delete(todos::todo_delete))
}

/// CORS for browser clients: explicit origin allow-list with credentials, so
/// the session cookie survives cross-origin requests.
fn cors_layer() -> CorsLayer {
    let origins: Vec<HeaderValue> = config::config()
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Todo API (Rust)",
            "version": version,
            "description": "Session-authenticated personal task tracker built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "public_auth": "/auth/register, /auth/login (public - session acquisition)",
                "auth": "/auth/me, /auth/logout (protected)",
                "todos": "/todos[/:id] (protected)",
            }
        }
    }))
}

async fn health() -> axum::response::Json<Value> {
    axum::response::Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now(),
        }
    }))
}
