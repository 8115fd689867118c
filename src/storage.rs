//! File persistence for the license record and the machine token.
//!
//! Two fixed files live under the configured storage directory:
//!
//! - `.mindset_machine_id`: plain text, single line, the machine token.
//! - `.mindset_license`: JSON document with the last successful validation.
//!
//! Both are best-effort: a missing or unreadable file is never fatal. The
//! record is written whole on every successful validation (last-write-wins),
//! so at most one record exists per machine at any time.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::errors::{LicenseError, LicenseResult};

/// File holding the persisted machine token.
const MACHINE_ID_FILE: &str = ".mindset_machine_id";

/// File holding the cached license record.
const LICENSE_FILE: &str = ".mindset_license";

/// Locally cached result of a successful validation.
///
/// `license_data` is whatever metadata the server returned for the license;
/// no schema is enforced on it locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicenseRecord {
    pub license_key: String,
    pub machine_id: String,
    /// RFC 3339 timestamp set when the record was written.
    pub validated_at: String,
    pub license_data: serde_json::Value,
}

impl LicenseRecord {
    /// Build a record stamped with the current time.
    pub fn new(license_key: &str, machine_id: &str, license_data: serde_json::Value) -> Self {
        Self {
            license_key: license_key.to_string(),
            machine_id: machine_id.to_string(),
            validated_at: Utc::now().to_rfc3339(),
            license_data,
        }
    }
}

/// Fixed-path storage for license state.
#[derive(Debug, Clone)]
pub struct LicenseStore {
    dir: PathBuf,
}

impl LicenseStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn machine_id_path(&self) -> PathBuf {
        self.dir.join(MACHINE_ID_FILE)
    }

    pub fn license_path(&self) -> PathBuf {
        self.dir.join(LICENSE_FILE)
    }

    /// Read the persisted machine token, if any.
    ///
    /// Returns `None` when the file is absent, unreadable, or empty after
    /// trimming. Read failures are logged, never raised.
    pub fn load_machine_id(&self) -> Option<String> {
        match std::fs::read_to_string(self.machine_id_path()) {
            Ok(contents) => {
                let token = contents.trim().to_string();
                if token.is_empty() {
                    None
                } else {
                    Some(token)
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("failed to read machine id file: {e}");
                None
            }
        }
    }

    /// Persist the machine token.
    pub fn store_machine_id(&self, machine_id: &str) -> LicenseResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.machine_id_path(), machine_id)?;
        Ok(())
    }

    /// Read and parse the cached license record.
    ///
    /// Any read or parse failure is logged and treated as "no saved
    /// license".
    pub async fn load_record(&self) -> Option<LicenseRecord> {
        let path = self.license_path();
        let contents = match fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                log::warn!("failed to read license file {}: {e}", path.display());
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("failed to parse license file {}: {e}", path.display());
                None
            }
        }
    }

    /// Write the record, overwriting any previous one.
    pub async fn save_record(&self, record: &LicenseRecord) -> LicenseResult<()> {
        let json = serde_json::to_string(record)
            .map_err(|e| LicenseError::Malformed(format!("serializing license record: {e}")))?;
        fs::create_dir_all(&self.dir).await?;
        fs::write(self.license_path(), json).await?;
        Ok(())
    }

    /// Delete the record. Absence is not an error.
    pub async fn remove_record(&self) -> LicenseResult<()> {
        match fs::remove_file(self.license_path()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(LicenseError::Storage(e)),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
