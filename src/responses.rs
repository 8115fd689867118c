//! Wire types for the Mindset license API, plus the public outcome types
//! returned by the validator.
//!
//! The service speaks camelCase JSON; the request structs carry the exact
//! payload shapes of `/api/validate-license` and `/api/deactivate-license`.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/validate-license`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ValidateRequest {
    pub license_key: String,
    pub machine_id: String,
    pub machine_name: String,
}

/// Request body for `POST /api/deactivate-license`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DeactivateRequest {
    pub license_key: String,
    pub machine_id: String,
}

/// Success body of the validate endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct ValidateResponse {
    pub valid: bool,
    /// Opaque license metadata; present when `valid` is true.
    #[serde(default)]
    pub license: Option<serde_json::Value>,
}

/// Error body shared by both endpoints: `{"error": "..."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}

/// What happened to the local license file during an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageOutcome {
    /// A record was written.
    Saved,
    /// The record was deleted.
    Removed,
    /// A write or delete was attempted and failed (message attached). The
    /// remote operation itself still succeeded.
    Failed(String),
    /// No local change was attempted.
    Untouched,
}

/// Result of a validation or deactivation attempt.
///
/// `ok` and `message` carry the caller-facing contract; `storage` reports
/// the local-persistence side effect so callers and tests can observe
/// best-effort I/O failures without scraping logs.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub ok: bool,
    pub message: String,
    pub storage: StorageOutcome,
}

impl Outcome {
    pub(crate) fn success(message: impl Into<String>, storage: StorageOutcome) -> Self {
        Self {
            ok: true,
            message: message.into(),
            storage,
        }
    }

    pub(crate) fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            storage: StorageOutcome::Untouched,
        }
    }
}
