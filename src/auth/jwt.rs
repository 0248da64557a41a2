//! JWT Token Service
//!
//! Handles session token creation and claims management. Signing is HS256
//! with the configured secret; tokens expire 24 hours after issuance.

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Signed token payload
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Directory username of the authenticated user
    pub sub: String,
    /// Identifier the user authenticated with
    pub cpf: String,
    /// Token issued at timestamp (seconds)
    pub iat: i64,
    /// Token expiration timestamp (seconds)
    pub exp: i64,
}

/// JWT Service for token operations
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    /// Create a new JWT service with the provided secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
        }
    }

    /// Generate a session token for a resolved directory user
    pub fn create_token(&self, username: &str, cpf: &str) -> Result<String> {
        let now = Utc::now();
        let expiration = now + Duration::hours(24);

        let claims = Claims {
            sub: username.to_string(),
            cpf: cpf.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .context("Failed to encode JWT token")
    }

    /// Validate and decode a token issued by this service
    pub fn validate_token(&self, token: &str) -> Result<TokenData<Claims>> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .context("Failed to validate JWT token")
    }

    /// Extract claims from a token
    pub fn decode_claims(&self, token: &str) -> Result<Claims> {
        let token_data = self.validate_token(token)?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_roundtrip() {
        let jwt_service = JwtService::new("test_secret");

        let token = jwt_service.create_token("u-1", "12345678900").unwrap();
        let claims = jwt_service.decode_claims(&token).unwrap();

        assert_eq!(claims.sub, "u-1");
        assert_eq!(claims.cpf, "12345678900");
        assert_eq!(claims.exp - claims.iat, 86400);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = JwtService::new("test_secret");
        let verifier = JwtService::new("other_secret");

        let token = issuer.create_token("u-1", "12345678900").unwrap();
        assert!(verifier.validate_token(&token).is_err());
    }
}
