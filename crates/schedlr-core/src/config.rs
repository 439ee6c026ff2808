//! Provider connection settings.
//!
//! Settings are passed explicitly to each client at construction. The
//! environment is consulted only by [`ProviderConfig::from_env`], which reads
//! the variables the `schedlr` binary reads: `<PREFIX>_API_URL`,
//! `<PREFIX>_API_TOKEN` (prefix from [`ProviderId::env_prefix`]) and the
//! shared [`TIMEOUT_ENV`].

use std::fmt::{Debug, Formatter};

use crate::http_client::DEFAULT_TIMEOUT_MS;
use crate::{ConfigError, ProviderId};

/// Query parameter the credential is sent in.
pub const DEFAULT_CREDENTIAL_PARAM: &str = "access_token";

/// Pinterest sandbox root used when no URL is configured.
pub const PINTEREST_SANDBOX_URL: &str = "https://api-sandbox.pinterest.com/v5";

/// Upstream timeout override shared by every provider.
pub const TIMEOUT_ENV: &str = "SCHEDLR_TIMEOUT_MS";

#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub provider: ProviderId,
    pub base_url: String,
    pub token: String,
    pub credential_param: String,
    pub timeout_ms: u64,
}

impl ProviderConfig {
    pub fn new(
        provider: ProviderId,
        base_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            provider,
            base_url: base_url.into().trim().to_owned(),
            token: token.into(),
            credential_param: String::from(DEFAULT_CREDENTIAL_PARAM),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Result<Self, ConfigError> {
        self.timeout_ms = timeout_ms;
        self.validate()?;
        Ok(self)
    }

    pub fn with_credential_param(mut self, name: impl Into<String>) -> Result<Self, ConfigError> {
        self.credential_param = name.into();
        self.validate()?;
        Ok(self)
    }

    /// Reads the provider's settings from the process environment.
    ///
    /// The URL falls back to the Pinterest sandbox for Pinterest only; the
    /// token is always required. Blank values count as unset.
    pub fn from_env(provider: ProviderId) -> Result<Self, ConfigError> {
        Self::from_lookup(provider, |name| std::env::var(name).ok())
    }

    fn from_lookup(
        provider: ProviderId,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let prefix = provider.env_prefix();
        let url_var = format!("{prefix}_API_URL");
        let token_var = format!("{prefix}_API_TOKEN");

        let base_url = match (read(&url_var), provider) {
            (Some(url), _) => url,
            (None, ProviderId::Pinterest) => String::from(PINTEREST_SANDBOX_URL),
            (None, ProviderId::Linkedin) => {
                return Err(ConfigError::MissingEnv { name: url_var });
            }
        };
        let token = read(&token_var).ok_or(ConfigError::MissingEnv { name: token_var })?;

        let config = Self::new(provider, base_url, token)?;
        match read(TIMEOUT_ENV) {
            Some(raw) => {
                let timeout_ms = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidEnv {
                    name: String::from(TIMEOUT_ENV),
                    value: raw.clone(),
                })?;
                config.with_timeout_ms(timeout_ms)
            }
            None => Ok(config),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl {
                value: self.base_url.clone(),
            });
        }
        if self.credential_param.trim().is_empty() {
            return Err(ConfigError::EmptyCredentialParam);
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    /// Full request URL for `path`, credential appended as a query parameter.
    pub fn request_url(&self, path: &str) -> String {
        let mut url = self.endpoint_url(path);
        url.push(if url.contains('?') { '&' } else { '?' });
        url.push_str(&self.credential_param);
        url.push('=');
        url.push_str(&urlencoding::encode(&self.token));
        url
    }

    /// Base URL joined with `path`, without the credential.
    pub fn endpoint_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            return self.base_url.clone();
        }
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Debug for ProviderConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("provider", &self.provider)
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("credential_param", &self.credential_param)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}
