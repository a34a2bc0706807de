//! Client configuration.
//!
//! Every field has a default, so an empty JSON object (or `Default`) yields
//! a client that talks to the public provider with a 10 second timeout.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://viacep.com.br/ws";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// A configuration that cannot be turned into a client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Provider root; endpoint paths are appended to it.
    pub base_url: String,
    /// Whole-request timeout in milliseconds. `0` disables it.
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: concat!("cep-core/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Base URL without trailing slashes.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
        assert!(config.user_agent.starts_with("cep-core/"));
    }

    #[test]
    fn zero_timeout_disables_it() {
        let config: ClientConfig = serde_json::from_str(r#"{"timeout_ms":0}"#).unwrap();
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ClientConfig::default().with_base_url("http://localhost:3000/ws//");
        assert_eq!(config.base_url(), "http://localhost:3000/ws");
    }

    #[test]
    fn builder_helpers_override_fields() {
        let config = ClientConfig::default()
            .with_timeout(Duration::from_millis(250))
            .with_user_agent("tests/1.0");
        assert_eq!(config.timeout_ms, 250);
        assert_eq!(config.user_agent, "tests/1.0");
    }
}
