//! Startup gating flow.
//!
//! The decision sequence is kept free of terminal I/O: the interactive
//! prompt is injected as a closure, so the flow can be exercised in tests
//! without simulating a terminal.

use crate::responses::Outcome;
use crate::validator::LicenseValidator;

/// Run the startup license check.
///
/// 1. Load the cached record; if present, re-validate its key and succeed
///    on acceptance (logging the rejection reason otherwise).
/// 2. Fall back to `prompt` for a key. An empty key after trimming, or a
///    prompt I/O failure, fails immediately without any network call.
/// 3. Validate the entered key and return its outcome.
///
/// Terminal outcomes are exactly "startup permitted" (`ok == true`) or
/// "startup denied".
pub async fn check_license<F>(validator: &LicenseValidator, prompt: F) -> Outcome
where
    F: FnOnce() -> std::io::Result<String>,
{
    if let Some(saved) = validator.load_saved_license().await {
        let outcome = validator.validate_license(&saved.license_key).await;
        if outcome.ok {
            return outcome;
        }
        log::warn!("Licence sauvegardée invalide: {}", outcome.message);
    }

    let entered = match prompt() {
        Ok(entered) => entered,
        Err(e) => {
            log::warn!("failed to read license key from prompt: {e}");
            String::new()
        }
    };

    let license_key = entered.trim();
    if license_key.is_empty() {
        return Outcome::failure("Aucune clé de licence fournie");
    }

    validator.validate_license(license_key).await
}
