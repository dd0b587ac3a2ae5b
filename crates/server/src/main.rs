//! Meteor Server - Public JSON API for the storefront.
//!
//! This binary serves the storefront API on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework, JSON in/out
//! - `meteor-store` data service behind every route: a hosted row-store
//!   when `METEOR_REMOTE_URL`/`METEOR_REMOTE_KEY` are configured, the
//!   seeded local fallback otherwise
//! - Demo authentication only: admin routes re-check Basic credentials
//!   per request; no sessions, no tokens
//!
//! # Security
//!
//! The authentication model is demo scaffolding (two hardcoded accounts,
//! plaintext registered users). Do not expose this binary beyond demo
//! deployments.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod config;
mod error;
mod middleware;
mod routes;
mod state;

use config::ServerConfig;
use state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "meteor_server=info,meteor_store=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Wire the data service (selects remote vs fallback mode once)
    let state = AppState::new(config).expect("Failed to initialize application state");
    tracing::info!(mode = %state.store().mode(), "data service ready");

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes::routes(&state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state.clone());

    // Start server
    let addr = state.config().socket_addr();
    tracing::info!("server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies the backing store is reachable before returning OK.
/// Returns 503 Service Unavailable otherwise.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.store().probe().await {
        Ok(()) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
