//! Configuration types for the Trello API client.
//!
//! This module provides the configuration used to build an
//! [`HttpClient`](crate::clients::HttpClient).
//!
//! # Overview
//!
//! - [`TrelloConfig`]: The configuration struct holding all client settings
//! - [`TrelloConfigBuilder`]: A builder for constructing [`TrelloConfig`] instances
//! - [`ApiKey`]: A validated API key newtype
//! - [`AccessToken`]: A validated member token with masked debug output
//! - [`BaseUrl`]: A validated base URL for the remote API
//!
//! # Example
//!
//! ```rust
//! use trello_api::{TrelloConfig, ApiKey, AccessToken};
//!
//! let config = TrelloConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .token(AccessToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_version(), "1");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, ApiKey, BaseUrl};

use std::time::Duration;

use crate::error::ConfigError;

/// Default version segment inserted between the base URL and request paths.
pub const DEFAULT_API_VERSION: &str = "1";

/// Configuration for the Trello API client.
///
/// `TrelloConfig` is `Clone`, `Send`, and `Sync`; one configuration can back
/// any number of clients.
#[derive(Clone, Debug)]
pub struct TrelloConfig {
    api_key: ApiKey,
    token: Option<AccessToken>,
    base_url: BaseUrl,
    api_version: String,
    user_agent_prefix: Option<String>,
    tries: u32,
    timeout: Option<Duration>,
}

impl TrelloConfig {
    /// Creates a new builder for constructing a `TrelloConfig`.
    #[must_use]
    pub fn builder() -> TrelloConfigBuilder {
        TrelloConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the member access token, if configured.
    #[must_use]
    pub const fn token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API version path segment.
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns how many times a request is attempted on 429/500 responses.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify TrelloConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TrelloConfig>();
};

/// Builder for constructing [`TrelloConfig`] instances.
///
/// `api_key` is required. All other fields have defaults:
///
/// - `token`: `None`
/// - `base_url`: `https://api.trello.com`
/// - `api_version`: `"1"`
/// - `user_agent_prefix`: `None`
/// - `tries`: `1` (no retries)
/// - `timeout`: `None`
#[derive(Debug, Default)]
pub struct TrelloConfigBuilder {
    api_key: Option<ApiKey>,
    token: Option<AccessToken>,
    base_url: Option<BaseUrl>,
    api_version: Option<String>,
    user_agent_prefix: Option<String>,
    tries: Option<u32>,
    timeout: Option<Duration>,
}

impl TrelloConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the member access token.
    #[must_use]
    pub fn token(mut self, token: AccessToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets the base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API version path segment.
    #[must_use]
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets how many times a request is attempted on 429/500 responses.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`TrelloConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set,
    /// or [`ConfigError::InvalidTries`] if `tries` is zero.
    pub fn build(self) -> Result<TrelloConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let tries = self.tries.unwrap_or(1);
        if tries == 0 {
            return Err(ConfigError::InvalidTries { tries });
        }

        let api_version = self
            .api_version
            .map(|v| v.trim_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        Ok(TrelloConfig {
            api_key,
            token: self.token,
            base_url: self.base_url.unwrap_or_default(),
            api_version,
            user_agent_prefix: self.user_agent_prefix,
            tries,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_api_key() {
        let result = TrelloConfigBuilder::new()
            .token(AccessToken::new("token").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = TrelloConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "https://api.trello.com");
        assert_eq!(config.api_version(), "1");
        assert_eq!(config.tries(), 1);
        assert!(config.token().is_none());
        assert!(config.timeout().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_rejects_zero_tries() {
        let result = TrelloConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .tries(0)
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidTries { tries: 0 })));
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let base_url = BaseUrl::new("http://localhost:9000").unwrap();
        let config = TrelloConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .token(AccessToken::new("token").unwrap())
            .base_url(base_url.clone())
            .api_version("/2/")
            .user_agent_prefix("MyApp/1.0")
            .tries(3)
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap();

        assert_eq!(config.base_url(), &base_url);
        assert_eq!(config.api_version(), "2");
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(config.tries(), 3);
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.token().map(AsRef::as_ref), Some("token"));
    }

    #[test]
    fn test_config_debug_does_not_leak_token() {
        let config = TrelloConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .token(AccessToken::new("very-secret-token").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("TrelloConfig"));
        assert!(!debug_str.contains("very-secret-token"));
    }
}
