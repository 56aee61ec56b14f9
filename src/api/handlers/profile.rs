/*
 * Responsibility
 * - GET /profile : Go IAM から解決したユーザー情報をそのまま返す
 */
use axum::Json;
use chrono::Utc;

use crate::api::dto::session::ProfileResponse;
use crate::api::extractors::Authenticated;

pub async fn profile(Authenticated(ctx): Authenticated) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        profile: ctx.into_user(),
        timestamp: Utc::now(),
    })
}
