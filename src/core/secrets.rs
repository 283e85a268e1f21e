//! Credential lookup across the application secrets file and the environment.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

/// Name under which the inference token is stored in every source.
pub const HF_TOKEN_KEY: &str = "HF_TOKEN";

/// Environment variable overriding the secrets file location.
pub const SECRETS_PATH_ENV: &str = "HF_SUMMARIZER_SECRETS";

/// Secrets file used when `HF_SUMMARIZER_SECRETS` is unset.
pub const DEFAULT_SECRETS_PATH: &str = ".streamlit/secrets.toml";

/// A place a named secret can be read from.
pub trait SecretSource {
    /// Short label used in logs.
    fn name(&self) -> &str;

    fn get(&self, key: &str) -> Option<String>;
}

/// Application secrets store backed by a TOML file of top-level string keys.
#[derive(Debug, Clone)]
pub struct SecretsFile {
    path: PathBuf,
}

impl SecretsFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Secrets file at `HF_SUMMARIZER_SECRETS`, falling back to `.streamlit/secrets.toml`.
    #[must_use]
    pub fn from_env() -> Self {
        let path = env::var(SECRETS_PATH_ENV).unwrap_or_else(|_| DEFAULT_SECRETS_PATH.to_string());
        Self::new(path)
    }

    fn load(&self) -> Option<HashMap<String, toml::Value>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!("Secrets file {} not readable: {}", self.path.display(), e);
                return None;
            }
        };

        match toml::from_str::<HashMap<String, toml::Value>>(&content) {
            Ok(table) => Some(table),
            Err(e) => {
                warn!("Ignoring unparsable secrets file {}: {}", self.path.display(), e);
                None
            }
        }
    }
}

impl SecretSource for SecretsFile {
    fn name(&self) -> &str {
        "secrets file"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.load()?
            .remove(key)
            .and_then(|v| v.as_str().map(ToString::to_string))
    }
}

/// Process environment variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl SecretSource for EnvSource {
    fn name(&self) -> &str {
        "environment"
    }

    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

/// Returns the first non-blank value stored under `HF_TOKEN`, trying the
/// sources in order.
#[must_use]
pub fn resolve_token(sources: &[&dyn SecretSource]) -> Option<String> {
    sources.iter().find_map(|source| {
        let value = source
            .get(HF_TOKEN_KEY)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())?;
        debug!("Resolved {} from {}", HF_TOKEN_KEY, source.name());
        Some(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    struct Fixed(Option<&'static str>);

    impl SecretSource for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn get(&self, _key: &str) -> Option<String> {
            self.0.map(ToString::to_string)
        }
    }

    #[test]
    fn first_non_blank_source_wins() {
        let blank = Fixed(Some("   "));
        let missing = Fixed(None);
        let found = Fixed(Some(" hf_abc "));
        let later = Fixed(Some("hf_later"));

        let token = resolve_token(&[&blank, &missing, &found, &later]);
        assert_eq!(token.as_deref(), Some("hf_abc"));
    }

    #[test]
    fn no_sources_means_no_token() {
        assert_eq!(resolve_token(&[]), None);
    }

    #[test]
    fn secrets_file_reads_top_level_string() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "HF_TOKEN = \"hf_from_file\"\nOTHER = 3").expect("write");

        let source = SecretsFile::new(file.path());
        assert_eq!(source.get(HF_TOKEN_KEY).as_deref(), Some("hf_from_file"));
        // Non-string values are not secrets
        assert_eq!(source.get("OTHER"), None);
    }

    #[test]
    fn missing_secrets_file_is_absence() {
        let source = SecretsFile::new("/definitely/not/here/secrets.toml");
        assert_eq!(source.get(HF_TOKEN_KEY), None);
    }
}
