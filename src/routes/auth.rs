//! Authentication endpoint: CPF lookup against the identity directory,
//! session token issuance on a match.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde_json::{Value, json};
use tokio::time::timeout;

use crate::auth::models::{AuthRequest, AuthResponse};
use crate::error::ApiError;
use crate::server::AppState;

/// CORS preflight short-circuit. Runs before any body parsing; the
/// `Access-Control-*` headers themselves come from the router's CORS layer.
pub async fn preflight() -> Json<Value> {
    Json(json!({ "message": "CORS preflight" }))
}

/// Authenticate a user by CPF.
///
/// Flow: parse body, validate the identifier, resolve it against the identity
/// directory, sign a 24-hour session token. Every failure is converted into a
/// structured [`ApiError`]; nothing propagates past this handler.
///
/// The raw body is taken as [`Bytes`] rather than a `Json` extractor so a
/// missing body reads as an empty object instead of a rejection.
pub async fn authenticate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AuthResponse>, ApiError> {
    let development = state.config.is_development();

    tracing::info!("authentication request received");

    let request: AuthRequest = if body.is_empty() {
        AuthRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| {
            tracing::error!("failed to parse request body: {e}");
            ApiError::internal(e.to_string(), development)
        })?
    };

    let cpf = request.cpf.unwrap_or_default();
    if cpf.is_empty() {
        tracing::warn!("request rejected: no CPF supplied");
        return Err(ApiError::missing_input());
    }

    let Some(pool_id) = state.config.cognito.user_pool_id.as_deref() else {
        tracing::error!("COGNITO_USER_POOL_ID is not configured; rejecting request");
        return Err(ApiError::server_config());
    };

    tracing::info!(cpf = %cpf, pool_id = %pool_id, "searching directory for user");

    let lookup = timeout(
        state.config.directory_timeout,
        state.directory.find_by_identifier(pool_id, &cpf),
    )
    .await;

    let user = match lookup {
        Err(_) => {
            tracing::error!("directory lookup timed out");
            return Err(ApiError::internal("directory lookup timed out", development));
        }
        Ok(Err(e)) => {
            tracing::error!("directory lookup failed: {e}");
            return Err(ApiError::internal(e.to_string(), development));
        }
        Ok(Ok(None)) => {
            tracing::warn!(cpf = %cpf, "no directory user matched");
            return Err(ApiError::user_not_found());
        }
        Ok(Ok(Some(user))) => user,
    };

    tracing::info!(username = %user.username, "directory user found");

    let token = state
        .jwt_service
        .create_token(&user.username, &cpf)
        .map_err(|e| {
            tracing::error!("failed to sign session token: {e}");
            ApiError::internal(e.to_string(), development)
        })?;

    // Log the event, not the token
    tracing::info!(username = %user.username, "session token generated");

    Ok(Json(AuthResponse {
        message: "Authentication successful! Session token generated.",
        username: user.username,
        cpf,
        attributes: user.attributes,
        token,
        expires_in: "24h",
    }))
}
