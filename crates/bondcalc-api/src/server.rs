//! Server configuration and startup.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Create the API router with CORS enabled.
pub fn create_router(state: AppState) -> Router {
    create_router_with_cors(state, true)
}

/// Create the API router, optionally allowing cross-origin requests.
pub fn create_router_with_cors(state: AppState, cors_enabled: bool) -> Router {
    let router = Router::new()
        // Health check
        .route("/health", get(routes::health::health_check))
        // Unversioned path kept for existing form clients
        .route("/bond/calculate", post(routes::bond::calculate))
        // API v1
        .nest("/api/v1", api_v1_routes());

    let router = if cors_enabled {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

/// API v1 routes.
fn api_v1_routes() -> Router<AppState> {
    Router::new().route("/bond/calculate", post(routes::bond::calculate))
}

/// Run the server.
pub async fn run_server(state: AppState, config: &ServerConfig) -> anyhow::Result<()> {
    let app = create_router_with_cors(state, config.cors_enabled);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Bondcalc API Server listening on http://{}", addr);
    tracing::info!("API endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  POST /api/v1/bond/calculate");
    tracing::info!("  POST /bond/calculate");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Shutdown signal handler.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C handler: {}", err);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}
