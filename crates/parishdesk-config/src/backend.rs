//! Parish backend API configuration.
//!
//! parishdesk never stores parish data itself; every permission and profile
//! lookup is a request to the parish backend described here.

use std::env;
use std::time::Duration;

/// Default backend location when `PARISH_API_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Parish backend configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `PARISH_API_BASE_URL`: Base URL every endpoint path is appended to
///   (default: `http://localhost:8000/api`)
/// - `PARISH_API_TIMEOUT_SECS`: Per-request timeout in seconds (default: `15`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 15,
        }
    }
}

impl BackendConfig {
    /// Creates a new `BackendConfig` from environment variables, falling back
    /// to defaults for anything unset or unparseable.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self::new(
            env::var("PARISH_API_BASE_URL").unwrap_or(defaults.base_url),
            env::var("PARISH_API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
        )
    }

    pub fn new(base_url: impl Into<String>, request_timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            request_timeout_secs,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Joins an endpoint path such as `/auth/profile` onto the base URL.
    ///
    /// ```ignore
    /// let config = BackendConfig::new("http://api.test/v1/", 5);
    /// assert_eq!(config.url("/auth/profile"), "http://api.test/v1/auth/profile");
    /// ```
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000/api");
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_new_strips_trailing_slash() {
        let config = BackendConfig::new("http://api.test/v1/", 5);
        assert_eq!(config.base_url, "http://api.test/v1");
    }

    #[test]
    fn test_url_join() {
        let config = BackendConfig::new("http://api.test/v1", 5);
        assert_eq!(config.url("/auth/profile"), "http://api.test/v1/auth/profile");
        assert_eq!(
            config.url("roles/permissions/all"),
            "http://api.test/v1/roles/permissions/all"
        );
    }
}
