//! Server initialization and routing
//!
//! This module handles the Axum setup for both services:
//! - Router configuration for the provider and the consumer
//! - Shared middleware stack (request id, logging, timeout, CORS, tracing)
//! - Graceful shutdown handling

use crate::config::ServerConfig;
use crate::middleware::{json_content_type, log_requests, request_id};
use crate::routes::{addresses, health, not_found, suggestions};
use crate::state::{ConsumerState, ProviderState};
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Middleware shared by both services (applied outermost last):
/// 1. Timeout handling
/// 2. CORS
/// 3. Request logging
/// 4. Request ID tracking
/// 5. HTTP tracing spans
fn with_common_layers<S>(router: Router<S>, config: &ServerConfig) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let cors = if config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    router
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.timeout(),
        ))
        .layer(cors)
        .layer(from_fn(log_requests))
        .layer(from_fn(request_id))
        .layer(TraceLayer::new_for_http())
}

/// Build the provider router
///
/// - `GET /addresses`, `POST /addresses`
/// - `GET /addresses/available`
/// - `GET /addresses/{id}`
/// - `GET /health`
pub fn build_provider_router(state: Arc<ProviderState>) -> Router {
    let router = Router::new()
        .route(
            "/addresses",
            get(addresses::list_addresses).post(addresses::create_address),
        )
        .route("/addresses/available", get(addresses::list_available))
        .route("/addresses/{id}", get(addresses::get_address))
        .layer(from_fn(json_content_type))
        .route("/health", get(health::provider_health))
        .fallback(not_found);

    with_common_layers(router, &state.config).with_state(state)
}

/// Build the consumer router
///
/// - `GET /suggestions/{address_id}`
/// - `GET /health`
pub fn build_consumer_router(state: Arc<ConsumerState>) -> Router {
    let router = Router::new()
        .route(
            "/suggestions/{address_id}",
            get(suggestions::get_suggestions),
        )
        .route("/suggestions", get(suggestions::missing_address_id))
        .route("/suggestions/", get(suggestions::missing_address_id))
        .route("/health", get(health::consumer_health))
        .fallback(not_found);

    with_common_layers(router, &state.config).with_state(state)
}

/// Install the JSON tracing subscriber.
///
/// Returns `false` when a global subscriber was already set; the existing one
/// keeps receiving events and the refusal is logged through it.
fn init_tracing(config: &ServerConfig) -> bool {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(config.log_level.as_str())
        .with_target(false)
        .with_thread_ids(true)
        .json()
        .try_init();

    match installed {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "tracing subscriber not installed");
            false
        }
    }
}

/// Start the provider service
///
/// Seeds the repository (unless disabled), binds the configured address and
/// serves until SIGTERM or Ctrl+C.
pub async fn start_provider(config: ServerConfig) -> anyhow::Result<()> {
    init_tracing(&config);

    let state = Arc::new(ProviderState::new(config.clone())?);
    let records = state.read()?.len();
    let app = build_provider_router(state);

    let addr: SocketAddr = config.socket_addr()?;
    tracing::info!("Starting CEP provider on {} with {} records", addr, records);
    tracing::info!(
        "Timeout: {}s, CORS: {}",
        config.timeout_secs,
        config.enable_cors
    );

    serve(addr, app).await
}

/// Start the consumer service
///
/// The provider is not contacted until the first request arrives.
pub async fn start_consumer(config: ServerConfig) -> anyhow::Result<()> {
    init_tracing(&config);

    let state = Arc::new(ConsumerState::new(config.clone()));
    let app = build_consumer_router(state);

    let addr: SocketAddr = config.socket_addr()?;
    tracing::info!(
        "Starting CEP consumer on {} using provider {}",
        addr,
        config.provider_url
    );
    tracing::info!(
        "Timeout: {}s, CORS: {}",
        config.timeout_secs,
        config.enable_cors
    );

    serve(addr, app).await
}

async fn serve(addr: SocketAddr, app: Router) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_tracing_init_reports_existing_subscriber() {
        let config = ServerConfig::default();
        init_tracing(&config);
        assert!(!init_tracing(&config));
    }
}
