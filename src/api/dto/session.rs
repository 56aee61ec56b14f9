/*
 * Responsibility
 * - 認証済みユーザー向けレスポンス DTO
 */
use chrono::{DateTime, Utc};
use goiam::User;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub user: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: User,
    pub timestamp: DateTime<Utc>,
}
