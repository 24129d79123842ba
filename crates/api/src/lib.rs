pub mod routes;
pub mod state;

use axum::Router;
use crossrate_engine::RateCache;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the Axum application router.
pub fn build_router(cache: RateCache, stale_after: chrono::Duration) -> Router {
    let app_state = Arc::new(state::AppState::new(cache, stale_after));

    Router::new()
        .merge(routes::routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Start the API server.
pub async fn start_server(
    cache: RateCache,
    stale_after: chrono::Duration,
    bind_addr: &str,
) -> anyhow::Result<()> {
    let app = build_router(cache, stale_after);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("API server listening on {}", bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
