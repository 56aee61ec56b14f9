/*
 * Responsibility
 * - GET /api/info : この API 自体の情報 + 呼び出したユーザーの id
 */
use axum::Json;

use crate::api::dto::info::ApiInfoResponse;
use crate::api::extractors::Authenticated;

pub async fn api_info(Authenticated(ctx): Authenticated) -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse {
        api: "Go IAM Rust Example",
        version: env!("CARGO_PKG_VERSION"),
        framework: "axum",
        sdk: "goiam",
        user_id: ctx.id().to_string(),
        authenticated: true,
    })
}
