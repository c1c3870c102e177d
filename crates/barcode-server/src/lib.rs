//! HTTP front end for `barcode-core`.
//!
//! # Endpoints
//!
//! - `GET /` - usage text
//! - `GET /health` - liveness check, always `OK`
//! - `GET /generate/{symbology}/{width}x{height}?data={payload}` - PNG image
//!
//! Anything else is a plain-text 404.

pub mod config;
pub mod error;
pub mod routes;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError};

use axum::routing::get;
use axum::Router;
use barcode_core::GenerateOptions;
use tokio::net::TcpListener;

/// Read-only state shared by all handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppState {
    pub options: GenerateOptions,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/health", get(routes::health))
        .route("/generate/{symbology}/{size}", get(routes::generate))
        .fallback(routes::not_found)
        .with_state(state)
}

/// Bind to the configured address and serve until Ctrl-C.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if the address can not be bound and
/// [`ServerError::Serve`] if the accept loop fails.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| ServerError::Bind {
            address: address.clone(),
            source,
        })?;

    let state = AppState {
        options: config.generate_options(),
    };
    log::info!(
        "listening on {address} (max dimension {})",
        state.options.max_dimension
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    log::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::warn!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    log::info!("shutdown signal received");
}
