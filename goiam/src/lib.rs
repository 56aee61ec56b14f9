//! Minimal Go IAM SDK.
//!
//! - `Client::me` resolves the user behind a bearer token.
//! - `Client::verify` exchanges an authorization code for an access token.

mod client;
mod error;
mod types;

pub use client::{Client, ClientConfig, Credentials};
pub use error::{IamError, IamResult};
pub use types::{ApiResponse, User, UserPolicy, UserResource, UserRole};
