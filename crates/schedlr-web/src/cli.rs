//! Process configuration for the `schedlr` server.
//!
//! Every option can also be supplied through the environment variable shown
//! in `--help`; tokens are hidden from help output.
//!
//! | Option | Env | Default |
//! |--------|-----|---------|
//! | `--host` | `SCHEDLR_HOST` | `0.0.0.0` |
//! | `--port` | `SCHEDLR_PORT` | `8080` |
//! | `--timeout-ms` | `SCHEDLR_TIMEOUT_MS` | `10000` |
//! | `--linkedin-api-url` | `SCHEDLR_LINKEDIN_API_URL` | required |
//! | `--linkedin-api-token` | `SCHEDLR_LINKEDIN_API_TOKEN` | required |
//! | `--pinterest-api-url` | `SCHEDLR_PINTEREST_API_URL` | Pinterest sandbox |
//! | `--pinterest-api-token` | `SCHEDLR_PINTEREST_API_TOKEN` | required |

use clap::Parser;
use schedlr_core::{
    ConfigError, ProviderConfig, ProviderId, DEFAULT_TIMEOUT_MS, PINTEREST_SANDBOX_URL,
};

#[derive(Parser)]
#[command(
    name = "schedlr",
    version,
    about = "Unified API over LinkedIn and Pinterest analytics"
)]
pub struct Cli {
    /// Address to bind the HTTP listener to.
    #[arg(long, env = "SCHEDLR_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SCHEDLR_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Timeout applied to every upstream call, in milliseconds.
    #[arg(long, env = "SCHEDLR_TIMEOUT_MS", default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// LinkedIn analytics data URL.
    #[arg(long, env = "SCHEDLR_LINKEDIN_API_URL")]
    pub linkedin_api_url: String,

    #[arg(long, env = "SCHEDLR_LINKEDIN_API_TOKEN", hide_env_values = true)]
    pub linkedin_api_token: String,

    /// Pinterest API root; metric paths are appended to it.
    #[arg(long, env = "SCHEDLR_PINTEREST_API_URL", default_value = PINTEREST_SANDBOX_URL)]
    pub pinterest_api_url: String,

    #[arg(long, env = "SCHEDLR_PINTEREST_API_TOKEN", hide_env_values = true)]
    pub pinterest_api_token: String,
}

impl Cli {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn linkedin_config(&self) -> Result<ProviderConfig, ConfigError> {
        ProviderConfig::new(
            ProviderId::Linkedin,
            &self.linkedin_api_url,
            &self.linkedin_api_token,
        )?
        .with_timeout_ms(self.timeout_ms)
    }

    pub fn pinterest_config(&self) -> Result<ProviderConfig, ConfigError> {
        ProviderConfig::new(
            ProviderId::Pinterest,
            &self.pinterest_api_url,
            &self.pinterest_api_token,
        )?
        .with_timeout_ms(self.timeout_ms)
    }
}
