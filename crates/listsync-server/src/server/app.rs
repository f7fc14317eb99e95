use crate::server::{routes, ws};
use crate::state::AppState;
use axum::{
    http::HeaderValue,
    routing::get,
    Router,
};
use std::net::SocketAddr;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the Axum application
pub fn build_app(state: AppState) -> Router {
    // CORS defaults to local origins; override only for explicit demo use.
    let allow_any_origin = std::env::var("LISTSYNC_ALLOW_ANY_ORIGIN")
        .ok()
        .is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));
    let cors = if allow_any_origin {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list([
                HeaderValue::from_static("http://localhost:3000"),
                HeaderValue::from_static("http://127.0.0.1:3000"),
            ]))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // API routes
    let api_routes = Router::new()
        .route(
            "/strings",
            get(routes::get_strings).post(routes::add_string),
        )
        .route("/strings/binary", get(routes::get_binary_strings))
        .route(
            "/strings/:index",
            axum::routing::put(routes::update_string).delete(routes::delete_string),
        );

    Router::new()
        .route("/health", get(routes::health))
        .nest("/api", api_routes)
        .route("/ws/changes", get(ws::changes_handler))
        .route("/ws/changes/binary", get(ws::binary_changes_handler))
        .route("/ws/notifications", get(ws::notifications_handler))
        .layer(cors)
        .with_state(state)
}

/// Run the server until ctrl-c
pub async fn run_server(addr: SocketAddr) -> anyhow::Result<()> {
    let app = build_app(AppState::new());

    tracing::info!("Starting listsync server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received, draining connections");
}
