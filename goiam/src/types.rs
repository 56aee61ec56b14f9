//! Wire types of the Go IAM API.
//!
//! Only `name` is guaranteed on a user; everything else defaults so that older
//! or newer IAM versions still decode.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Envelope every Go IAM endpoint wraps its payload in.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

/// Identity resolved from an access token (`GET /me/v1`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub project_id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub profile_pic: String,
    #[serde(default)]
    pub expiry: Option<DateTime<Utc>>,

    #[serde(default)]
    pub roles: HashMap<String, UserRole>,
    #[serde(default)]
    pub resources: HashMap<String, UserResource>,
    #[serde(default)]
    pub policies: HashMap<String, UserPolicy>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_by: String,
}

impl User {
    /// Minimal user with only a display name. Handy for fakes.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            project_id: String::new(),
            name: name.into(),
            email: String::new(),
            phone: String::new(),
            enabled: true,
            profile_pic: String::new(),
            expiry: None,
            roles: HashMap::new(),
            resources: HashMap::new(),
            policies: HashMap::new(),
            created_at: None,
            created_by: String::new(),
            updated_at: None,
            updated_by: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRole {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Resource access granted to a user, keyed by resource key in `User::resources`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResource {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role_ids: HashMap<String, bool>,
    #[serde(default)]
    pub policy_ids: HashMap<String, bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPolicy {
    #[serde(default)]
    pub name: String,
    // Policy argument mapping is provider-defined; keep it opaque.
    #[serde(default)]
    pub mapping: serde_json::Value,
}

/// Payload of `GET /auth/v1/verify`.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifiedCode {
    pub access_token: String,
}
