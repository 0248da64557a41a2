use axum::http::{Method, Uri};
use axum::response::Json;
use chrono::{SecondsFormat, Utc};
use serde_json::json;

/// Greeting endpoint handler.
///
/// Answers every request that no other route claims with a fixed message,
/// echoing the request path and method plus a current timestamp. Used by
/// load balancers and uptime checks to verify the service is alive; it has
/// no validation and no failure modes.
///
/// # Response Format
/// ```json
/// {
///   "message": "Hello from Fast Food Auth API!",
///   "timestamp": "2026-08-30T12:00:00.000Z",
///   "path": "/",
///   "method": "GET"
/// }
/// ```
pub async fn greeting(method: Method, uri: Uri) -> Json<serde_json::Value> {
    Json(json!({
        "message": "Hello from Fast Food Auth API!",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "path": uri.path(),
        "method": method.as_str(),
    }))
}
