use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiInfoResponse {
    pub api: &'static str,
    pub version: &'static str,
    pub framework: &'static str,
    pub sdk: &'static str,
    pub user_id: String,
    // Always true: the route sits behind the access middleware.
    pub authenticated: bool,
}
