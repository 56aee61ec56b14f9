/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - Clone 前提で持つ (内部は Arc)
 * - リクエスト間で共有される可変状態は持たない
 */
use std::sync::Arc;

use crate::services::identity::IdentityResolver;

#[derive(Clone, Debug)]
pub struct AppState {
    pub identity: Arc<dyn IdentityResolver>,
}

impl AppState {
    pub fn new(identity: Arc<dyn IdentityResolver>) -> Self {
        Self { identity }
    }
}
