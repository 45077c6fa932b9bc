//! Premium capability flag and the upgrade-prompt signal.
//!
//! A client-local trust decision only: `upgrade_to_premium` flips the flag
//! without any payment verification (that flow is an external collaborator),
//! and the persisted value is untrusted client state; the gate re-checks it
//! on every selection.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::storage::KeyValueStore;

/// Storage key for the capability flag.
pub const PREMIUM_KEY: &str = "cvstudio.premium";

/// Feature labels gated behind the premium capability.
pub const PREMIUM_FEATURES: &[&str] = &[
    "creative-template",
    "custom-colors",
    "advanced-export",
    "ai-suggestions",
    "unlimited-downloads",
];

pub struct PremiumGate {
    premium: watch::Sender<bool>,
    upgrade_prompt: watch::Sender<bool>,
    storage: Arc<dyn KeyValueStore>,
}

impl PremiumGate {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        let (premium, _) = watch::channel(false);
        let (upgrade_prompt, _) = watch::channel(false);
        Self {
            premium,
            upgrade_prompt,
            storage,
        }
    }

    /// Restores the persisted capability flag; anything but `"true"` leaves
    /// the gate closed.
    pub async fn restore(&self) {
        match self.storage.get(PREMIUM_KEY).await {
            Ok(Some(raw)) if raw == "true" => {
                self.premium.send_replace(true);
            }
            Ok(_) => {}
            Err(err) => warn!("failed to read premium flag: {err}"),
        }
    }

    pub fn is_premium(&self) -> bool {
        *self.premium.borrow()
    }

    pub fn watch_premium(&self) -> watch::Receiver<bool> {
        self.premium.subscribe()
    }

    /// Grants the capability, persists it immediately, and closes any open
    /// upgrade prompt.
    pub async fn upgrade_to_premium(&self) {
        self.premium.send_replace(true);
        self.upgrade_prompt.send_replace(false);
        if let Err(err) = self.storage.set(PREMIUM_KEY, "true").await {
            warn!("failed to persist premium flag: {err}");
        }
        info!("premium capability enabled");
    }

    /// Raised by a blocked selection; the host shows its upgrade dialog while
    /// this is set.
    pub fn request_upgrade(&self) {
        self.upgrade_prompt.send_replace(true);
    }

    pub fn dismiss_upgrade(&self) {
        self.upgrade_prompt.send_replace(false);
    }

    pub fn upgrade_prompt_open(&self) -> bool {
        *self.upgrade_prompt.borrow()
    }

    pub fn watch_upgrade_prompt(&self) -> watch::Receiver<bool> {
        self.upgrade_prompt.subscribe()
    }

    /// Feature-level access check: premium users see everything, free users
    /// everything not on the premium list.
    pub fn has_access(&self, feature: &str) -> bool {
        self.is_premium() || !PREMIUM_FEATURES.contains(&feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn make_gate() -> (PremiumGate, Arc<MemoryStore>) {
        let storage = Arc::new(MemoryStore::new());
        (PremiumGate::new(storage.clone() as Arc<dyn KeyValueStore>), storage)
    }

    #[tokio::test]
    async fn test_starts_without_capability() {
        let (gate, _) = make_gate();
        assert!(!gate.is_premium());
        assert!(!gate.upgrade_prompt_open());
    }

    #[tokio::test]
    async fn test_upgrade_grants_persists_and_closes_prompt() {
        let (gate, storage) = make_gate();
        gate.request_upgrade();
        assert!(gate.upgrade_prompt_open());

        gate.upgrade_to_premium().await;

        assert!(gate.is_premium());
        assert!(!gate.upgrade_prompt_open(), "upgrading must close the prompt");
        assert_eq!(
            storage.get(PREMIUM_KEY).await.unwrap().as_deref(),
            Some("true")
        );
    }

    #[tokio::test]
    async fn test_restore_reads_true_flag() {
        let (gate, storage) = make_gate();
        storage.set(PREMIUM_KEY, "true").await.unwrap();
        gate.restore().await;
        assert!(gate.is_premium());
    }

    #[tokio::test]
    async fn test_restore_ignores_other_values() {
        let (gate, storage) = make_gate();
        storage.set(PREMIUM_KEY, "yes please").await.unwrap();
        gate.restore().await;
        assert!(!gate.is_premium());
    }

    #[tokio::test]
    async fn test_feature_access_rules() {
        let (gate, _) = make_gate();
        assert!(!gate.has_access("creative-template"), "premium feature gated");
        assert!(gate.has_access("basic-export"), "unlisted features are free");

        gate.upgrade_to_premium().await;
        assert!(gate.has_access("creative-template"));
    }

    #[tokio::test]
    async fn test_dismiss_closes_prompt_without_granting() {
        let (gate, _) = make_gate();
        gate.request_upgrade();
        gate.dismiss_upgrade();
        assert!(!gate.upgrade_prompt_open());
        assert!(!gate.is_premium());
    }
}
