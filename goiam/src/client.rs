/*
 * Responsibility
 * - Go IAM API への HTTP 呼び出し (reqwest)
 * - レスポンス envelope の展開と IamError への変換
 * - Clone cheap (reqwest::Client は内部で Arc)
 */
use std::{fmt, time::Duration};

use reqwest::{StatusCode, header};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{IamError, IamResult};
use crate::types::{ApiResponse, User, VerifiedCode};

const ME_ENDPOINT: &str = "/me/v1";
const VERIFY_ENDPOINT: &str = "/auth/v1/verify";

/// OAuth client credentials registered in Go IAM.
///
/// The secret is never printed via `Debug`.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub credentials: Credentials,
    /// Upper bound for a single IAM call (connect + response).
    pub timeout: Duration,
}

/// Client for the Go IAM service.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    credentials: Credentials,
    http: reqwest::Client,
}

impl Client {
    pub fn new(config: ClientConfig) -> IamResult<Self> {
        if config.base_url.cannot_be_a_base() {
            return Err(IamError::InvalidBaseUrl(config.base_url.to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(IamError::Build)?;

        Ok(Self {
            // Endpoints are appended verbatim, so keep the base without a trailing slash.
            base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
            credentials: config.credentials,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client_id(&self) -> &str {
        &self.credentials.client_id
    }

    /// Resolve the user that owns `token`.
    ///
    /// The token is forwarded verbatim; all validation happens on the IAM side.
    /// Dropping the returned future cancels the in-flight request.
    pub async fn me(&self, token: &str) -> IamResult<User> {
        let url = format!("{}{}", self.base_url, ME_ENDPOINT);

        let resp = self
            .http
            .get(&url)
            .bearer_auth(token)
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|source| IamError::Http {
                endpoint: ME_ENDPOINT,
                source,
            })?;

        self.unwrap_envelope::<User>(ME_ENDPOINT, resp).await
    }

    /// Exchange an authorization code for an access token.
    pub async fn verify(&self, code: &str) -> IamResult<String> {
        let url = format!("{}{}", self.base_url, VERIFY_ENDPOINT);

        let resp = self
            .http
            .get(&url)
            .query(&[("code", code)])
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .send()
            .await
            .map_err(|source| IamError::Http {
                endpoint: VERIFY_ENDPOINT,
                source,
            })?;

        let verified = self
            .unwrap_envelope::<VerifiedCode>(VERIFY_ENDPOINT, resp)
            .await?;

        Ok(verified.access_token)
    }

    async fn unwrap_envelope<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        resp: reqwest::Response,
    ) -> IamResult<T> {
        let status = resp.status();
        if status != StatusCode::OK {
            // Body is best-effort context for logs only.
            let body = resp.text().await.unwrap_or_default();
            tracing::debug!(endpoint, status = status.as_u16(), "iam call failed");
            return Err(IamError::Status {
                endpoint,
                status: status.as_u16(),
                body,
            });
        }

        let envelope: ApiResponse<T> = resp
            .json()
            .await
            .map_err(|source| IamError::Decode { endpoint, source })?;

        if !envelope.success {
            return Err(IamError::Rejected {
                endpoint,
                message: envelope.message,
            });
        }

        envelope.data.ok_or_else(|| IamError::Rejected {
            endpoint,
            message: "response carried no data".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base: &str) -> ClientConfig {
        ClientConfig {
            base_url: base.parse().unwrap(),
            credentials: Credentials {
                client_id: "client".into(),
                client_secret: "s3cret".into(),
            },
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let client = Client::new(config("http://localhost:3000/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");

        let client = Client::new(config("http://iam.internal/prefix/")).unwrap();
        assert_eq!(client.base_url(), "http://iam.internal/prefix");
    }

    #[test]
    fn non_hierarchical_base_url_is_rejected() {
        let err = Client::new(config("mailto:iam@example.com")).unwrap_err();
        assert!(matches!(err, IamError::InvalidBaseUrl(_)));
    }

    #[test]
    fn debug_output_hides_client_secret() {
        let client = Client::new(config("http://localhost:3000")).unwrap();
        let printed = format!("{client:?}");
        assert!(printed.contains("client"));
        assert!(!printed.contains("s3cret"));
    }
}
