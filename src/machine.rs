//! Machine identity for license binding.
//!
//! The identity has two halves: a random token generated once and persisted
//! next to the license record, and a human-readable machine name recomputed
//! on every run from the hostname and OS.

use uuid::Uuid;

use crate::storage::LicenseStore;

/// Identity of this installation as presented to the license service.
#[derive(Debug, Clone)]
pub struct MachineIdentity {
    /// Random unique token, stable across runs once persisted.
    pub machine_id: String,
    /// `"{hostname} ({os})"`, derived at runtime, never persisted.
    pub machine_name: String,
    /// Whether the token is on disk. `false` means the persist attempt
    /// failed and the token only lives for this session.
    pub stored: bool,
}

impl MachineIdentity {
    /// Load the persisted machine token, or generate and persist a new one.
    ///
    /// Persistence is best-effort: a write failure is logged and reported
    /// through [`MachineIdentity::stored`], and the session proceeds with
    /// the in-memory token. The returned token is always non-empty.
    pub fn resolve(store: &LicenseStore) -> Self {
        let (machine_id, stored) = match store.load_machine_id() {
            Some(existing) => (existing, true),
            None => {
                let fresh = Uuid::new_v4().to_string();
                let stored = match store.store_machine_id(&fresh) {
                    Ok(()) => true,
                    Err(e) => {
                        log::warn!("failed to persist machine id: {e}");
                        false
                    }
                };
                (fresh, stored)
            }
        };

        Self {
            machine_id,
            machine_name: machine_name(),
            stored,
        }
    }
}

/// Human-readable machine name, e.g. `"dev-laptop (linux)"`.
fn machine_name() -> String {
    let host = hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| "unknown".to_string());
    format!("{} ({})", host, std::env::consts::OS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn generates_and_persists_a_token() {
        let dir = tempdir().unwrap();
        let store = LicenseStore::new(dir.path());

        let identity = MachineIdentity::resolve(&store);
        assert!(!identity.machine_id.is_empty());
        assert!(identity.stored);
        assert!(store.machine_id_path().exists());
    }

    #[test]
    fn resolve_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = LicenseStore::new(dir.path());

        let first = MachineIdentity::resolve(&store);
        let second = MachineIdentity::resolve(&store);
        assert_eq!(first.machine_id, second.machine_id);
    }

    #[test]
    fn existing_token_is_reused() {
        let dir = tempdir().unwrap();
        let store = LicenseStore::new(dir.path());
        store.store_machine_id("pre-seeded-token").unwrap();

        let identity = MachineIdentity::resolve(&store);
        assert_eq!(identity.machine_id, "pre-seeded-token");
        assert!(identity.stored);
    }

    #[test]
    fn unwritable_dir_falls_back_to_in_memory_token() {
        let dir = tempdir().unwrap();
        // A plain file where the storage directory should be: every write
        // under it fails, reads find nothing.
        let blocked = dir.path().join("not-a-directory");
        std::fs::write(&blocked, "").unwrap();
        let store = LicenseStore::new(&blocked);

        let identity = MachineIdentity::resolve(&store);
        assert!(!identity.machine_id.is_empty());
        assert!(!identity.stored);
    }

    #[test]
    fn machine_name_mentions_the_os() {
        let name = machine_name();
        assert!(name.contains(std::env::consts::OS));
    }
}
