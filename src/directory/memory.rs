//! In-memory directory used by handler tests

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{DirectoryError, DirectoryUser, UserDirectory};

/// Test double keyed by identifier. Counts lookups so tests can assert the
/// short-circuit paths never reach the directory.
#[derive(Default)]
pub struct MemoryDirectory {
    users: HashMap<String, Vec<DirectoryUser>>,
    calls: Arc<AtomicUsize>,
    fail: bool,
    delay: Option<std::time::Duration>,
}

impl MemoryDirectory {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_user(identifier: &str, user: DirectoryUser) -> Self {
        let mut users = HashMap::new();
        users.insert(identifier.to_string(), vec![user]);
        Self {
            users,
            ..Self::default()
        }
    }

    pub fn with_users(identifier: &str, matches: Vec<DirectoryUser>) -> Self {
        let mut users = HashMap::new();
        users.insert(identifier.to_string(), matches);
        Self {
            users,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Sleep for `delay` before answering, to exercise the handler timeout
    pub fn slow(mut self, delay: std::time::Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl UserDirectory for MemoryDirectory {
    async fn find_by_identifier(
        &self,
        _pool_id: &str,
        identifier: &str,
    ) -> Result<Option<DirectoryUser>, DirectoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(DirectoryError::Lookup("simulated backend failure".into()));
        }
        let user = self
            .users
            .get(identifier)
            .and_then(|matches| matches.iter().min_by(|a, b| a.username.cmp(&b.username)))
            .cloned();
        Ok(user)
    }
}
