/*
 * Responsibility
 * - GET / : 認証済みユーザー名で挨拶 (text/plain)
 */
use crate::api::extractors::Authenticated;

pub async fn hello(Authenticated(ctx): Authenticated) -> String {
    format!("Hello, {}!", ctx.name())
}
