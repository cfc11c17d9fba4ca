// This project was developed with assistance from GitHub Copilot
// Server setup and configuration

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::endpoints::{AppState, auth_handler, jwks_handler};
use crate::error::Result;
use crate::key_management::KeyStore;

/// Create the application router with all endpoints
pub fn create_app(app_state: AppState) -> Router {
    Router::new()
        .route("/.well-known/jwks.json", get(jwks_handler))
        .route("/jwks", get(jwks_handler)) // Alternative endpoint
        .route("/auth", post(auth_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

pub async fn start_server(config: Config) -> Result<()> {
    // Keys live in memory only; a restart means a fresh pair
    let app_state = Arc::new(KeyStore::new()?);

    let app = create_app(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "JWKS server listening");
    tracing::info!("  GET  /.well-known/jwks.json - JWKS endpoint");
    tracing::info!("  GET  /jwks                   - Alternative JWKS endpoint");
    tracing::info!("  POST /auth                   - Authentication endpoint");
    tracing::info!("  POST /auth?expired           - Auth with expired key");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("JWKS server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_app() {
        let app_state = Arc::new(KeyStore::new().expect("store init failed"));

        // This should not panic
        let _app = create_app(app_state);
    }
}
