//! In-memory resolver for router/middleware tests.
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use goiam::{IamError, User};

use super::IdentityResolver;
use super::resolver::IdentityError;

/// Maps known tokens to users; anything else is rejected the way Go IAM would.
#[derive(Debug, Default)]
pub struct StaticResolver {
    users: HashMap<String, User>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, token: &str, name: &str) -> Self {
        let mut user = User::named(name);
        user.id = format!("user-{}", name.to_lowercase());
        self.users.insert(token.to_string(), user);
        self
    }

    /// Stall every lookup, like an IAM backend that is slow to answer.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityResolver for StaticResolver {
    fn backend_name(&self) -> &'static str {
        "static"
    }

    async fn resolve(&self, token: &str) -> Result<User, IdentityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let user = self.users.get(token).cloned().ok_or_else(|| IamError::Status {
            endpoint: "/me/v1",
            status: 401,
            body: "invalid token".to_string(),
        })?;
        Ok(user)
    }
}
