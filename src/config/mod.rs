//! Configuration types for the Printify API SDK.
//!
//! This module provides the configuration used to initialize the SDK for
//! API communication with Printify.
//!
//! # Overview
//!
//! - [`PrintifyConfig`]: The configuration struct holding all SDK settings
//! - [`PrintifyConfigBuilder`]: A builder for constructing [`PrintifyConfig`] instances
//! - [`AccessToken`]: A validated personal access token with masked debug output
//! - [`HostUrl`]: A validated API host URL
//!
//! # Example
//!
//! ```rust
//! use printify_api::{AccessToken, PrintifyConfig};
//!
//! let config = PrintifyConfig::builder()
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.host().as_ref(), "https://api.printify.com");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, HostUrl};

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for the Printify API SDK.
///
/// Configuration is immutable once built and is injected into clients at
/// construction; there is no global state.
///
/// # Thread Safety
///
/// `PrintifyConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct PrintifyConfig {
    access_token: AccessToken,
    host: HostUrl,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl PrintifyConfig {
    /// Creates a new builder for constructing a `PrintifyConfig`.
    #[must_use]
    pub fn builder() -> PrintifyConfigBuilder {
        PrintifyConfigBuilder::new()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API host URL.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify PrintifyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PrintifyConfig>();
};

/// Builder for constructing [`PrintifyConfig`] instances.
///
/// The only required field is `access_token`.
///
/// # Defaults
///
/// - `host`: `https://api.printify.com`
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (no client-side timeout)
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use printify_api::{AccessToken, HostUrl, PrintifyConfig};
///
/// let config = PrintifyConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .host(HostUrl::new("https://proxy.example.com").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct PrintifyConfigBuilder {
    access_token: Option<AccessToken>,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl PrintifyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the API host URL.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets a timeout applied to every request, from connect to end of body.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`PrintifyConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_token` is not set.
    pub fn build(self) -> Result<PrintifyConfig, ConfigError> {
        let access_token = self.access_token.ok_or(ConfigError::MissingRequiredField {
            field: "access_token",
        })?;

        Ok(PrintifyConfig {
            access_token,
            host: self.host.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
