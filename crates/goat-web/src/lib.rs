//! GOAT Todo Web Server
//!
//! Axum-based server rendering the todo list with HTMX fragments and
//! pushing change notifications to browsers over server-sent events.

pub mod config;
pub mod events;
pub mod hub;
pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use goat_db::DbPool;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

pub use config::ServerConfig;
pub use hub::EventHub;
pub use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::todos::index))
        .route("/todos", get(routes::todos::list).post(routes::todos::create))
        .route("/todos/{id}/toggle", post(routes::todos::toggle))
        .route("/todos/{id}/delete", post(routes::todos::delete))
        .route("/events", get(events::live_stream))
        .route("/health", get(routes::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server until Ctrl+C.
///
/// On shutdown the root token is cancelled first so open live streams end
/// and unregister, letting the graceful shutdown complete.
pub async fn run_server(db: Arc<DbPool>, config: ServerConfig) -> anyhow::Result<()> {
    let shutdown = CancellationToken::new();
    let state = AppState::new(db, &config, shutdown.clone());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    info!("Web server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal(shutdown: CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl+C");
        // Without a signal handler, wait for an external cancel instead.
        shutdown.cancelled().await;
        return;
    }
    info!("Shutdown requested, closing live streams");
    shutdown.cancel();
}
