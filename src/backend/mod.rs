mod error;
mod handlers;
mod routes;

use axum::{
    routing::get,
    Router,
};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;

use crate::config::ServerConfig;
use crate::store::ExpenseStore;

#[derive(Clone)]
pub struct AppState {
    pub store: ExpenseStore,
}

/// Builds the full router. Split out of [`run_server`] so tests can
/// mount it on an ephemeral port.
pub fn app(store: ExpenseStore) -> Router {
    let state = AppState { store };

    Router::new()
        .route("/health", get(|| async { "Backend is running" }))
        .merge(routes::api_routes())
        // The dashboard client is served from another origin.
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run_server(store: ExpenseStore, config: &ServerConfig) -> anyhow::Result<()> {
    let app = app(store);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
