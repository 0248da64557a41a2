//! # Server Module
//!
//! HTTP server setup and route configuration for the auth service.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{Method, header};
use axum::Router;
use axum::routing::post;
use aws_config::{BehaviorVersion, Region};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::auth::jwt::JwtService;
use crate::config::Config;
use crate::directory::UserDirectory;
use crate::directory::cognito::CognitoDirectory;
use crate::routes::auth::{authenticate, preflight};
use crate::routes::greeting::greeting;

/// Application state shared across all route handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub directory: Arc<dyn UserDirectory>,
    pub jwt_service: Arc<JwtService>,
}

/// Build the application router for the given state.
///
/// Split out from [`start`] so tests can drive the exact production router
/// with an in-memory directory.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/auth", post(authenticate).options(preflight))
        // Everything else answers with the greeting payload
        .fallback(greeting)
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state)
}

/// Starts the authentication HTTP server.
///
/// Loads configuration, constructs the Cognito client once for the process
/// lifetime, and serves the router until the process is terminated. A missing
/// signing secret is a fatal startup error, never silently defaulted.
pub async fn start() -> Result<()> {
    let config = Arc::new(Config::from_env().context("Failed to load configuration")?);

    if config.cognito.user_pool_id.is_none() {
        // Not fatal: requests answer SERVER_CONFIG_ERROR until fixed
        tracing::warn!("COGNITO_USER_POOL_ID is not set; authentication requests will fail");
    }

    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.cognito.region.clone()))
        .load()
        .await;
    let cognito_client = aws_sdk_cognitoidentityprovider::Client::new(&aws_config);

    let state = AppState {
        config: config.clone(),
        directory: Arc::new(CognitoDirectory::new(cognito_client)),
        jwt_service: Arc::new(JwtService::new(&config.jwt_secret)),
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address - port may already be in use")?;

    tracing::info!("🚀 Fast Food Auth API starting...");
    tracing::info!("📡 Listening on http://{}", addr);
    tracing::info!("🔑 Authentication endpoint at http://{}/auth", addr);
    tracing::info!(
        "🔧 Environment: {:?}, directory region: {}",
        config.environment,
        config.cognito.region
    );

    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")
}
