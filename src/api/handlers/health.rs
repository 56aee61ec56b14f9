/*
 * Responsibility
 * - GET /health (疎通用)
 * - 認証 middleware の内側にあるので、ユーザー名も返す
 */
use axum::Json;
use chrono::Utc;

use crate::api::dto::session::HealthResponse;
use crate::api::extractors::Authenticated;

pub async fn health(Authenticated(ctx): Authenticated) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        user: ctx.name().to_string(),
        timestamp: Utc::now(),
    })
}
