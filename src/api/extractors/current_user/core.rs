use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;

use super::CurrentUser;

/// Handler で CurrentUser を受け取るための extractor
/// access middleware が CurrentUser を request.extensions() に insert 済みである前提
/// 見つからない場合は middleware の掛け忘れ (プログラムの誤り) なので 500 を返す
pub struct Authenticated(pub CurrentUser);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<CurrentUser>() {
            Some(user) => Ok(Authenticated(user.clone())),
            None => {
                tracing::error!(
                    path = %parts.uri.path(),
                    "no authenticated user on request; access middleware not applied"
                );
                Err(AppError::Internal)
            }
        }
    }
}
