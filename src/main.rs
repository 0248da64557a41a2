//! # Fast Food Auth API
//!
//! Minimal authentication service built with Rust, Axum, and Tokio. Clients
//! authenticate with a CPF; the service resolves it against an AWS Cognito
//! user pool and issues a signed 24-hour session token.
//!
//! ## Architecture
//! The server is organized into modules:
//! - `server`: Core server initialization and route wiring
//! - `config`: Environment variable configuration management
//! - `routes`: HTTP route handlers (`auth`, `greeting`)
//! - `auth`: JWT session token service and payload models
//! - `directory`: identity directory seam (Cognito-backed in production)
//! - `error`: uniform JSON error envelope
//!
//! ## Environment Setup
//! Copy `.env.example` to `.env` and configure:
//! ```bash
//! cp .env.example .env
//! # Edit .env with your pool id and signing secret
//! ```
//!
//! ## Running the Server
//! ```bash
//! cargo run
//! ```
//!
//! Any request outside `/auth` answers with a greeting payload, which doubles
//! as the health check:
//! ```bash
//! curl http://localhost:3000/
//! ```

mod auth;
mod config;
mod directory;
mod error;
mod routes;
mod server;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Application entry point.
///
/// Initializes the tracing/logging system and starts the HTTP server.
/// Startup fails hard on configuration defects (missing signing secret)
/// rather than booting with an insecure default.
#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false) // Don't show module targets for cleaner output
                .compact(),
        )
        .init();

    tracing::info!("🏁 Starting Fast Food Auth API...");
    tracing::info!(
        "📦 Package: {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    if let Err(e) = server::start().await {
        tracing::error!("Fatal: {e:#}");
        std::process::exit(1);
    }
}
