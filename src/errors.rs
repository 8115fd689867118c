//! Error types for the Mindset license client.

use thiserror::Error;

/// Errors raised by license operations.
///
/// These never escape the public validation API: the validator converts
/// them into `(false, message)` outcomes at the boundary so callers can
/// always gate startup on a plain result.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// Transport-level failure: connection refused, DNS, timeout.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a well-formed error response.
    #[error("{0}")]
    Rejected(String),

    /// The response body did not have the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// Local file read/write failure.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// The home directory could not be determined for default storage.
    #[error("could not determine the user home directory")]
    HomeDirUnavailable,
}

pub type LicenseResult<T> = Result<T, LicenseError>;
