//! Configuration for the remote vendor lookup service

use derive_builder::Builder;
use std::time::Duration;

/// Base endpoint of the maclookup.app v2 API. The address is appended as the
/// final path segment.
pub const DEFAULT_BASE_URL: &str = "https://api.maclookup.app/v2/macs";

/// Default upper bound on a single vendor lookup request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// User agent sent with every vendor lookup request
pub const DEFAULT_USER_AGENT: &str =
    concat!("ouilookup/", env!("CARGO_PKG_VERSION"));

/// Settings used by [`crate::vendor::MacLookupClient`]
///
/// # Examples
///
/// ```
/// # use std::time::Duration;
/// # use ouilookup_lib::config::LookupConfig;
/// let config = LookupConfig::builder()
///     .timeout(Duration::from_secs(2))
///     .build()
///     .unwrap();
/// assert_eq!(
///     config.url_for("aa:bb:cc:00:00:00"),
///     "https://api.maclookup.app/v2/macs/aa:bb:cc:00:00:00",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into), default)]
pub struct LookupConfig {
    /// Endpoint the address is appended to
    base_url: String,
    /// Global timeout for one request, connect through body read
    timeout: Duration,
    /// Value of the User-Agent header
    user_agent: String,
}

impl LookupConfig {
    /// Returns builder for LookupConfig
    pub fn builder() -> LookupConfigBuilder {
        LookupConfigBuilder::default()
    }

    /// Returns the request URL for the given address. The address is
    /// substituted verbatim.
    pub fn url_for(&self, address: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), address)
    }

    /// Returns the configured request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the configured user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "./config_tests.rs"]
mod tests;
