//! JWT Pizza fixture server - mock backend for end-to-end UI testing.
//!
//! This binary serves the mock JWT Pizza API, by default on port 3100.
//!
//! # Architecture
//!
//! - Axum with a single fallback handler running an ordered route-rule table
//! - All state in memory, scoped to the process, reset by restarting
//! - Point the UI under test at this server instead of a real backend
//!
//! State is per-process: logins, registrations, and deletions accumulate
//! until the server restarts, which is exactly a test run's lifetime.

#![cfg_attr(not(test), forbid(unsafe_code))]

use pizza_fixture_server::config::FixtureConfig;
use pizza_fixture_server::{FixtureOptions, FixtureRouter};

#[tokio::main]
async fn main() {
    // Load a .env file when present, then configuration from environment
    dotenvy::dotenv().ok();
    let config = FixtureConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pizza_fixture_server=info,tower_http=debug".into());

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut options = FixtureOptions::default();
    if let Some(email) = config.initial_user.clone() {
        options = options.with_initial_user(email);
    }

    let app = FixtureRouter::new(options).into_router();

    let addr = config.socket_addr();
    tracing::info!("fixture listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
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
