//! Bearer token → Go IAM で解決 → CurrentUser を extensions に入れる
//!
//! - `Authorization` ヘッダが無い / `Bearer ` (大文字小文字区別) で始まらない → 401
//! - トークンはそのまま IdentityResolver に渡す (ローカル検証はしない)
//! - 解決エラーは原因を問わず 401。原因はログにだけ残す

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::extractors::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Router 全体 (fallback 含む) に認証を掛ける。
///
/// 例：
/// ```ignore
/// let router = api::routes();
/// let router = middleware::auth::access::apply(router, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth.strip_prefix(BEARER_PREFIX).ok_or_else(|| {
        tracing::debug!("authorization header without bearer prefix");
        AppError::Unauthorized
    })?;

    // Request がキャンセルされると、この future ごと IAM 呼び出しも drop される
    let user = match state.identity.resolve(token).await {
        Ok(user) => user,
        Err(err) => {
            tracing::warn!(
                error = %err,
                backend = state.identity.backend_name(),
                "token validation failed"
            );
            return Err(AppError::Unauthorized);
        }
    };

    tracing::debug!(user_id = %user.id, "request authenticated");

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(CurrentUser::new(user));

    Ok(next.run(req).await)
}
