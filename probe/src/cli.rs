use std::time::Duration;

use clap::Parser;

const DEFAULT_SERVER_URL: &str = "http://localhost:3001";
const DEFAULT_IAM_URL: &str = "http://localhost:3000";

/// Call the Go IAM example server once with a bearer token and print the result.
///
/// Every flag can also be supplied through the environment (or a `.env` file).
#[derive(Parser, Debug)]
#[command(name = "probe", version, about)]
pub struct Args {
    /// JWT access token issued by Go IAM
    #[arg(long, env = "JWT_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Server to call [default: http://localhost:3001]
    #[arg(long, env = "SERVER_URL")]
    server_url: Option<String>,

    /// Go IAM location, only used in troubleshooting hints [default: http://localhost:3000]
    #[arg(long, env = "GO_IAM_BASE_URL")]
    iam_url: Option<String>,

    /// Give up on the request after this many seconds
    #[arg(long, env = "PROBE_TIMEOUT_SECONDS", default_value_t = 30)]
    timeout_secs: u64,
}

/// Resolved probe settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// `None` when unset or blank.
    pub token: Option<String>,
    pub server_url: String,
    pub iam_url: String,
    pub timeout: Duration,
}

impl Args {
    pub fn into_settings(self) -> Settings {
        Settings {
            token: self.token.filter(|t| !t.trim().is_empty()),
            server_url: non_blank_or(self.server_url, DEFAULT_SERVER_URL),
            iam_url: non_blank_or(self.iam_url, DEFAULT_IAM_URL),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

// `SERVER_URL=` in a .env file arrives as an empty value, not as an absent one.
fn non_blank_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
