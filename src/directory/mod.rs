//! # Identity Directory Module
//!
//! Abstraction over the external identity directory that owns the user
//! records. The production implementation talks to an AWS Cognito user pool;
//! tests substitute an in-memory directory behind the same trait.

pub mod cognito;
#[cfg(test)]
pub mod memory;

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

/// A user record as returned by the identity directory
#[derive(Debug, Clone)]
pub struct DirectoryUser {
    pub username: String,
    pub attributes: HashMap<String, String>,
}

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("directory lookup failed: {0}")]
    Lookup(String),
}

/// Lookup seam between the authentication handler and the directory backend.
///
/// One query resolves to zero or one user. When the backend holds multiple
/// records for the same identifier, implementations must break the tie
/// deterministically (lexicographically smallest username) rather than
/// trusting backend result order.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_identifier(
        &self,
        pool_id: &str,
        identifier: &str,
    ) -> Result<Option<DirectoryUser>, DirectoryError>;
}
