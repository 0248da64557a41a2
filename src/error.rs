//! Uniform API error envelope
//!
//! Every failure in the authentication flow is converted into one of these
//! before it leaves the handler; nothing propagates past the route boundary.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

/// Structured error response: `{error, code[, details]}` plus status code.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: &'static str,
    /// Diagnostic detail, only ever populated in development mode
    pub details: Option<String>,
}

impl ApiError {
    /// Identifying field absent or empty in the request body
    pub fn missing_input() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: "MISSING_INPUT",
            message: "CPF is required.",
            details: None,
        }
    }

    /// Deployment defect: the directory pool id is not configured.
    /// The operator-facing detail goes to the log at the call site,
    /// never to the client.
    pub fn server_config() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "SERVER_CONFIG_ERROR",
            message: "Invalid server configuration.",
            details: None,
        }
    }

    /// No directory user matched the supplied identifier
    pub fn user_not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            code: "USER_NOT_FOUND",
            message: "CPF not found.",
            details: None,
        }
    }

    /// Any other failure: body parse, directory call, timeout, signing.
    /// `detail` is echoed to the client only when `development` is set.
    pub fn internal(detail: impl Into<String>, development: bool) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "INTERNAL_SERVER_ERROR",
            message: "Internal server error.",
            details: development.then(|| detail.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = json!({
            "error": self.message,
            "code": self.code,
        });
        if let Some(details) = self.details {
            body["details"] = Value::String(details);
        }
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_error_hides_detail_in_production() {
        let err = ApiError::internal("boom", false);
        assert!(err.details.is_none());
        assert_eq!(err.code, "INTERNAL_SERVER_ERROR");
    }

    #[test]
    fn internal_error_carries_detail_in_development() {
        let err = ApiError::internal("boom", true);
        assert_eq!(err.details.as_deref(), Some("boom"));
    }
}
