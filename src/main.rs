use todo_api_rust::state::AppState;
use todo_api_rust::{app, config};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up SECURITY_SESSION_SECRET etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting todo API in {:?} mode", config.environment);

    let app = app(AppState::in_memory());

    // Allow tests or deployments to override port via env
    let port = std::env::var("TODO_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("todo API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
