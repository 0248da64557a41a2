//! Cognito-backed directory lookups
//!
//! Wraps `aws_sdk_cognitoidentityprovider::Client`. The client is constructed
//! once at process start and shared across requests; per-call state is limited
//! to the query itself.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_cognitoidentityprovider::Client;
use aws_sdk_cognitoidentityprovider::types::UserType;

use super::{DirectoryError, DirectoryUser, UserDirectory};

/// Cognito attribute holding the lookup identifier
const IDENTIFIER_ATTRIBUTE: &str = "preferred_username";

/// Page size for the lookup. A small page, not 1: ambiguous results are
/// tie-broken by username instead of trusting backend order.
const LOOKUP_PAGE_LIMIT: i32 = 10;

pub struct CognitoDirectory {
    client: Client,
}

impl CognitoDirectory {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserDirectory for CognitoDirectory {
    async fn find_by_identifier(
        &self,
        pool_id: &str,
        identifier: &str,
    ) -> Result<Option<DirectoryUser>, DirectoryError> {
        let filter = format!(
            "{IDENTIFIER_ATTRIBUTE} = \"{}\"",
            escape_filter_value(identifier)
        );

        let response = self
            .client
            .list_users()
            .user_pool_id(pool_id)
            .filter(filter)
            .limit(LOOKUP_PAGE_LIMIT)
            .send()
            .await
            .map_err(|e| DirectoryError::Lookup(e.to_string()))?;

        // Tie-break ambiguous results by smallest username
        let user = response
            .users()
            .iter()
            .filter(|u| u.username().is_some())
            .min_by(|a, b| a.username().cmp(&b.username()))
            .map(to_directory_user);

        Ok(user)
    }
}

fn to_directory_user(user: &UserType) -> DirectoryUser {
    let attributes: HashMap<String, String> = user
        .attributes()
        .iter()
        .map(|attr| {
            (
                attr.name().to_string(),
                attr.value().unwrap_or_default().to_string(),
            )
        })
        .collect();

    DirectoryUser {
        username: user.username().unwrap_or_default().to_string(),
        attributes,
    }
}

/// Escape a user-supplied value for embedding in a Cognito filter expression.
/// Raw interpolation would let an adversarial identifier rewrite the filter.
fn escape_filter_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' | '"' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_identifier_passes_through() {
        assert_eq!(escape_filter_value("12345678900"), "12345678900");
    }

    #[test]
    fn quotes_and_backslashes_are_escaped() {
        assert_eq!(
            escape_filter_value(r#"x" or sub = "admin"#),
            r#"x\" or sub = \"admin"#
        );
        assert_eq!(escape_filter_value(r"a\b"), r"a\\b");
    }
}
