/// Factory: build the identity resolver from application `Config`.
use std::sync::Arc;

use goiam::{ClientConfig, Credentials, IamError};

use crate::config::Config;
use crate::services::identity::IdentityResolver;

pub fn build_identity_resolver(config: &Config) -> Result<Arc<dyn IdentityResolver>, IamError> {
    let client = goiam::Client::new(ClientConfig {
        base_url: config.iam_base_url.clone(),
        credentials: Credentials {
            client_id: config.iam_client_id.clone(),
            client_secret: config.iam_client_secret.clone(),
        },
        timeout: config.iam_timeout,
    })?;

    tracing::info!(
        base_url = client.base_url(),
        client_id = %abbreviate(client.client_id()),
        "go iam client ready"
    );

    Ok(Arc::new(client))
}

// Only the first 8 characters of the client id go to the logs.
fn abbreviate(id: &str) -> String {
    let head: String = id.chars().take(8).collect();
    if head.len() < id.len() {
        format!("{head}...")
    } else {
        head
    }
}
