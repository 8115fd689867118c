//! The license validator: remote validation and deactivation calls, plus
//! orchestration of the local license cache.
//!
//! Every public operation resolves to an [`Outcome`] rather than an error:
//! network failures, server rejections, and malformed payloads are folded
//! into `(ok = false, message)` so a single attempt per call can directly
//! gate application startup. User-facing messages are French, matching the
//! Mindset product.

use reqwest::StatusCode;

use crate::config::ValidatorConfig;
use crate::errors::{LicenseError, LicenseResult};
use crate::machine::MachineIdentity;
use crate::responses::{
    DeactivateRequest, ErrorResponse, Outcome, StorageOutcome, ValidateRequest, ValidateResponse,
};
use crate::storage::{LicenseRecord, LicenseStore};

/// Client-side license checker for one machine.
#[derive(Debug)]
pub struct LicenseValidator {
    http: reqwest::Client,
    api_base_url: String,
    store: LicenseStore,
    identity: MachineIdentity,
}

impl LicenseValidator {
    /// Build a validator from configuration.
    ///
    /// Resolves the machine identity immediately (generating and persisting
    /// the machine token if this is the first run) and builds a single HTTP
    /// client carrying the configured timeout.
    pub fn new(config: ValidatorConfig) -> LicenseResult<Self> {
        let store = LicenseStore::new(&config.storage_dir);
        let identity = MachineIdentity::resolve(&store);

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(LicenseError::Network)?;

        Ok(Self {
            http,
            api_base_url: config.api_base_url,
            store,
            identity,
        })
    }

    pub fn identity(&self) -> &MachineIdentity {
        &self.identity
    }

    pub fn store(&self) -> &LicenseStore {
        &self.store
    }

    /// Validate a license key against the remote service.
    ///
    /// One attempt, no retries. On acceptance the record is cached locally;
    /// a cache-write failure is reported through [`Outcome::storage`] but
    /// does not downgrade the overall result.
    pub async fn validate_license(&self, license_key: &str) -> Outcome {
        match self.request_validation(license_key).await {
            Ok(Some(license_data)) => {
                let record =
                    LicenseRecord::new(license_key, &self.identity.machine_id, license_data);
                let storage = match self.store.save_record(&record).await {
                    Ok(()) => StorageOutcome::Saved,
                    Err(e) => {
                        log::error!("failed to save license record: {e}");
                        StorageOutcome::Failed(e.to_string())
                    }
                };
                Outcome::success("Licence valide", storage)
            }
            Ok(None) => Outcome::failure("Licence invalide"),
            Err(e) => Outcome::failure(failure_message(e)),
        }
    }

    /// Release this machine's claim on a license key.
    ///
    /// On HTTP 200 the local record is deleted (if present). On any other
    /// result the local file is left untouched.
    pub async fn deactivate_license(&self, license_key: &str) -> Outcome {
        match self.request_deactivation(license_key).await {
            Ok(()) => {
                let storage = match self.store.remove_record().await {
                    Ok(()) => StorageOutcome::Removed,
                    Err(e) => {
                        log::error!("failed to remove license record: {e}");
                        StorageOutcome::Failed(e.to_string())
                    }
                };
                Outcome::success("Licence désactivée", storage)
            }
            Err(e) => Outcome::failure(failure_message(e)),
        }
    }

    /// Load the locally cached license record, if any.
    pub async fn load_saved_license(&self) -> Option<LicenseRecord> {
        self.store.load_record().await
    }

    /// POST to the validate endpoint.
    ///
    /// Returns `Ok(Some(license_data))` when the key is accepted,
    /// `Ok(None)` when the server reports it invalid, and an error for
    /// everything else.
    async fn request_validation(
        &self,
        license_key: &str,
    ) -> LicenseResult<Option<serde_json::Value>> {
        let payload = ValidateRequest {
            license_key: license_key.to_string(),
            machine_id: self.identity.machine_id.clone(),
            machine_name: self.identity.machine_name.clone(),
        };

        let resp = self
            .http
            .post(format!("{}/api/validate-license", self.api_base_url))
            .json(&payload)
            .send()
            .await
            .map_err(LicenseError::Network)?;

        if resp.status() != StatusCode::OK {
            return Err(rejection(resp, "Erreur de validation").await);
        }

        let body: ValidateResponse = resp
            .json()
            .await
            .map_err(|e| LicenseError::Malformed(e.to_string()))?;

        if !body.valid {
            return Ok(None);
        }

        // An accepting response must carry the license metadata.
        body.license
            .map(Some)
            .ok_or_else(|| LicenseError::Malformed("missing license payload".to_string()))
    }

    /// POST to the deactivate endpoint. Any HTTP 200 counts as success.
    async fn request_deactivation(&self, license_key: &str) -> LicenseResult<()> {
        let payload = DeactivateRequest {
            license_key: license_key.to_string(),
            machine_id: self.identity.machine_id.clone(),
        };

        let resp = self
            .http
            .post(format!("{}/api/deactivate-license", self.api_base_url))
            .json(&payload)
            .send()
            .await
            .map_err(LicenseError::Network)?;

        if resp.status() != StatusCode::OK {
            return Err(rejection(resp, "Erreur de désactivation").await);
        }

        Ok(())
    }
}

/// Turn a non-200 response into a rejection carrying the server's error
/// message, or `fallback` when the body has no `error` field. A body that
/// fails to parse as JSON becomes a malformed-response error instead.
async fn rejection(resp: reqwest::Response, fallback: &str) -> LicenseError {
    match resp.json::<ErrorResponse>().await {
        Ok(body) => LicenseError::Rejected(body.error.unwrap_or_else(|| fallback.to_string())),
        Err(e) => LicenseError::Malformed(e.to_string()),
    }
}

/// Map an internal error to the caller-facing French message.
fn failure_message(err: LicenseError) -> String {
    match err {
        LicenseError::Network(e) => format!("Erreur de connexion: {e}"),
        LicenseError::Rejected(message) => message,
        other => format!("Erreur inattendue: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_errors_map_to_connection_message() {
        // An invalid URL surfaces as a reqwest error at build time.
        let err = reqwest::Client::new()
            .get("not a url")
            .build()
            .expect_err("invalid URL should fail");
        let message = failure_message(LicenseError::Network(err));
        assert!(message.starts_with("Erreur de connexion:"));
    }

    #[test]
    fn rejections_pass_the_server_message_through() {
        let message = failure_message(LicenseError::Rejected("unknown key".to_string()));
        assert_eq!(message, "unknown key");
    }

    #[test]
    fn other_errors_map_to_unexpected_message() {
        let message = failure_message(LicenseError::Malformed("expected value".to_string()));
        assert!(message.starts_with("Erreur inattendue:"));
    }
}
