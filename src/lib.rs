//! Mindset license client.
//!
//! Client-side license activation for the Mindset trading application:
//! generates a per-machine identifier, validates a license key against the
//! remote Mindset service, caches the result locally, and gates application
//! startup on a valid response.
//!
//! # Example
//!
//! ```no_run
//! use mindset_license::{check_license, LicenseValidator, ValidatorConfig};
//!
//! # async fn run() -> mindset_license::errors::LicenseResult<()> {
//! let validator = LicenseValidator::new(ValidatorConfig::from_home()?)?;
//! let outcome = check_license(&validator, || {
//!     let mut key = String::new();
//!     std::io::stdin().read_line(&mut key)?;
//!     Ok(key)
//! })
//! .await;
//!
//! if outcome.ok {
//!     // start the application
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod errors;
pub mod machine;
pub mod responses;
pub mod startup;
pub mod storage;
pub mod validator;

pub use config::ValidatorConfig;
pub use responses::{Outcome, StorageOutcome};
pub use startup::check_license;
pub use storage::{LicenseRecord, LicenseStore};
pub use validator::LicenseValidator;
