//! Token → user resolution interface used by the access middleware.
use async_trait::async_trait;
use goiam::{IamError, User};

/// Why a token could not be resolved. The middleware never shows this to the caller.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error(transparent)]
    Iam(#[from] IamError),
}

/// Resolves the user behind a bearer token.
///
/// Implementations must be cheap to share (`Arc<dyn IdentityResolver>` in `AppState`).
/// Every error is an authentication failure from the caller's point of view.
#[async_trait]
pub trait IdentityResolver: std::fmt::Debug + Send + Sync + 'static {
    // Backend name for logging.
    fn backend_name(&self) -> &'static str;

    async fn resolve(&self, token: &str) -> Result<User, IdentityError>;
}

#[async_trait]
impl IdentityResolver for goiam::Client {
    fn backend_name(&self) -> &'static str {
        "go-iam"
    }

    async fn resolve(&self, token: &str) -> Result<User, IdentityError> {
        Ok(self.me(token).await?)
    }
}
