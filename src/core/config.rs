use std::env;
use std::fmt;
use std::time::Duration;

use reqwest::header::HeaderValue;

use super::secrets::{EnvSource, SecretSource, SecretsFile, resolve_token};
use crate::errors::SummarizerError;

pub const DEFAULT_API_BASE_URL: &str = "https://router.huggingface.co";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Bearer token for the inference router. Never empty; redacted in `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct HfToken(String);

impl HfToken {
    /// # Errors
    ///
    /// Returns `MissingToken` when the value is blank and `ConfigError` when it
    /// cannot be sent in an `Authorization` header.
    pub fn new(value: impl Into<String>) -> Result<Self, SummarizerError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(SummarizerError::MissingToken);
        }
        HeaderValue::from_str(&format!("Bearer {value}")).map_err(|_| {
            SummarizerError::ConfigError(
                "HF_TOKEN contains characters not allowed in an HTTP header".to_string(),
            )
        })?;
        Ok(Self(value))
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for HfToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HfToken(***)")
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub hf_token: HfToken,
    pub api_base_url: String,
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Config with the production endpoint and the default 120s timeout.
    #[must_use]
    pub fn new(hf_token: HfToken) -> Self {
        Self {
            hf_token,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Resolves the token from the given sources, in order.
    ///
    /// # Errors
    ///
    /// Returns `MissingToken` when no source holds a non-blank `HF_TOKEN`.
    pub fn from_sources(sources: &[&dyn SecretSource]) -> Result<Self, SummarizerError> {
        let token = resolve_token(sources).ok_or(SummarizerError::MissingToken)?;
        Ok(Self::new(HfToken::new(token)?))
    }

    /// Loads the token from the secrets file, then the environment, and
    /// applies the `HF_API_BASE_URL` / `HF_REQUEST_TIMEOUT_SECS` overrides.
    ///
    /// # Errors
    ///
    /// Returns `MissingToken` when neither source holds the token and
    /// `ConfigError` when an override cannot be parsed.
    pub fn load() -> Result<Self, SummarizerError> {
        let secrets = SecretsFile::from_env();
        let config = Self::from_sources(&[&secrets, &EnvSource])?;
        config.with_env_overrides()
    }

    /// # Errors
    ///
    /// Returns `ConfigError` when an override value is malformed.
    pub fn with_env_overrides(mut self) -> Result<Self, SummarizerError> {
        if let Ok(base) = env::var("HF_API_BASE_URL") {
            self.api_base_url = base;
        }
        if let Ok(secs) = env::var("HF_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|e| {
                SummarizerError::ConfigError(format!("HF_REQUEST_TIMEOUT_SECS: {e}"))
            })?;
            if secs == 0 {
                return Err(SummarizerError::ConfigError(
                    "HF_REQUEST_TIMEOUT_SECS must be at least 1".to_string(),
                ));
            }
            self.request_timeout = Duration::from_secs(secs);
        }
        Ok(self)
    }

    #[must_use]
    pub fn with_api_base_url(mut self, base: impl Into<String>) -> Self {
        self.api_base_url = base.into();
        self
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
