//! Configuration for the license validator.
//!
//! All ambient host state (API endpoint, storage directory, request
//! timeout) is gathered here and injected into the validator at
//! construction time, so tests can point everything at a temporary
//! directory and a mock server.

use std::path::PathBuf;
use std::time::Duration;

use crate::errors::{LicenseError, LicenseResult};

/// Default base URL of the Mindset license service.
pub const DEFAULT_API_BASE_URL: &str = "https://mindset-site.vercel.app";

/// Per-request network timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Validator configuration.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Base URL of the license service (no trailing slash).
    pub api_base_url: String,
    /// Directory holding `.mindset_machine_id` and `.mindset_license`.
    pub storage_dir: PathBuf,
    /// Timeout applied to every outbound request.
    pub request_timeout: Duration,
}

impl ValidatorConfig {
    /// Configuration using the default service URL and the user's home
    /// directory for storage.
    pub fn from_home() -> LicenseResult<Self> {
        let home = dirs::home_dir().ok_or(LicenseError::HomeDirUnavailable)?;
        Ok(Self::new(DEFAULT_API_BASE_URL, home))
    }

    /// Configuration with an explicit service URL and storage directory.
    pub fn new(api_base_url: impl Into<String>, storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            storage_dir: storage_dir.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Override the per-request timeout (mostly useful in tests).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped_from_base_url() {
        let config = ValidatorConfig::new("http://localhost:8080/", "/tmp");
        assert_eq!(config.api_base_url, "http://localhost:8080");
    }

    #[test]
    fn default_timeout_is_ten_seconds() {
        let config = ValidatorConfig::new(DEFAULT_API_BASE_URL, "/tmp");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }
}
