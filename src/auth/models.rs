//! Authentication Models
//!
//! Data structures for authentication requests and responses.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Authentication request payload. A missing body deserializes from `{}`,
/// so every field must tolerate absence.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AuthRequest {
    pub cpf: Option<String>,
}

/// Successful authentication response
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: &'static str,
    pub username: String,
    pub cpf: String,
    pub attributes: HashMap<String, String>,
    pub token: String,
    #[serde(rename = "expiresIn")]
    pub expires_in: &'static str,
}
