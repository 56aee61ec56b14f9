/*
 * Responsibility
 * - URL 構造の定義 (/, /health, /profile, /api/info)
 * - 認証 middleware は app.rs 側でこの Router 全体に掛ける (fallback 含む)
 */
use axum::{Router, routing::get};

use crate::api::handlers::{
    greeting::hello, health::health, info::api_info, not_found::not_found, profile::profile,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(hello))
        .route("/health", get(health))
        .route("/profile", get(profile))
        .route("/api/info", get(api_info))
        .fallback(not_found)
}
