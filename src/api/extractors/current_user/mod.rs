/*!
 * Authenticated user extractor
 *
 * Responsibility:
 * - access middleware が解決したユーザー (CurrentUser) を handler に渡す
 * - 型は types、axum 依存は core に閉じ込める
 *
 * Public API:
 * - CurrentUser
 * - Authenticated
 */

mod core;
mod types;

pub use self::core::Authenticated;
pub use types::CurrentUser;
