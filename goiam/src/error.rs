//! Errors returned by the Go IAM client.
//!
//! Callers that only need "authenticated or not" can collapse every variant;
//! the variants exist so logs can say which step failed.

/// Result type for IAM calls.
pub type IamResult<T> = Result<T, IamError>;

#[derive(Debug, thiserror::Error)]
pub enum IamError {
    /// Transport failure (connection refused, DNS, timeout, TLS).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The IAM backend answered with a non-200 status.
    #[error("IAM {endpoint} returned {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: u16,
        body: String,
    },

    /// The envelope came back with `success = false` or without data.
    #[error("IAM {endpoint} rejected the request: {message}")]
    Rejected {
        endpoint: &'static str,
        message: String,
    },

    #[error("failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid IAM base url: {0}")]
    InvalidBaseUrl(String),

    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}
