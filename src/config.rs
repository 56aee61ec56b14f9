/*
 * Responsibility
 * - 環境変数 (.env 含む) からの設定読み込み
 * - Go IAM の接続先/クライアント資格情報はここで受け取る (ハードコードしない)
 * - 設定値のバリデーション (不足なら起動失敗)
 */
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_IAM_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: Option<&str>) -> Self {
        match value.unwrap_or("development").to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing configuration: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    pub iam_base_url: Url,
    pub iam_client_id: String,
    pub iam_client_secret: String,
    pub iam_timeout: Duration,

    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match get("SERVER_PORT") {
            Some(s) => s.trim().parse().map_err(|_| ConfigError::Invalid("SERVER_PORT"))?,
            None => DEFAULT_PORT,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("SERVER_PORT"))?;

        let app_env = AppEnv::parse(get("APP_ENV").as_deref());

        let iam_base_url = get("GO_IAM_BASE_URL")
            .unwrap_or_else(|| DEFAULT_IAM_BASE_URL.to_string())
            .parse::<Url>()
            .map_err(|_| ConfigError::Invalid("GO_IAM_BASE_URL"))?;

        let iam_client_id = get("GO_IAM_CLIENT_ID")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("GO_IAM_CLIENT_ID"))?;

        let iam_client_secret = get("GO_IAM_CLIENT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("GO_IAM_CLIENT_SECRET"))?;

        let iam_timeout =
            timeout_seconds(get("GO_IAM_TIMEOUT_SECONDS"), "GO_IAM_TIMEOUT_SECONDS", 10)?;
        let request_timeout =
            timeout_seconds(get("REQUEST_TIMEOUT_SECONDS"), "REQUEST_TIMEOUT_SECONDS", 30)?;

        Ok(Self {
            addr,
            app_env,
            iam_base_url,
            iam_client_id,
            iam_client_secret,
            iam_timeout,
            request_timeout,
        })
    }
}

// Unset → default. Zero would time out every request, so it is rejected like garbage.
fn timeout_seconds(
    value: Option<String>,
    key: &'static str,
    default_secs: u64,
) -> Result<Duration, ConfigError> {
    match value {
        None => Ok(Duration::from_secs(default_secs)),
        Some(s) => match s.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
            _ => Err(ConfigError::Invalid(key)),
        },
    }
}
