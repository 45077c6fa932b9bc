//! Active-template selection state.
//!
//! The preference is persisted immediately on change (not debounced) and a
//! premium miss leaves the active template untouched; the only observable
//! effect is the raised upgrade prompt.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::errors::EngineError;
use crate::models::template::TemplateId;
use crate::premium::PremiumGate;
use crate::storage::KeyValueStore;

/// Storage key for the template preference.
pub const TEMPLATE_KEY: &str = "cvstudio.template";

pub struct TemplateSelection {
    active: watch::Sender<TemplateId>,
    storage: Arc<dyn KeyValueStore>,
}

impl TemplateSelection {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        let (active, _) = watch::channel(TemplateId::Modern);
        Self { active, storage }
    }

    /// Restores the persisted preference. Missing or unknown values keep the
    /// default; a stale preference must never select outside the closed set.
    pub async fn restore(&self) {
        match self.storage.get(TEMPLATE_KEY).await {
            Ok(Some(raw)) => match TemplateId::parse(&raw) {
                Some(id) => {
                    self.active.send_replace(id);
                }
                None => warn!("ignoring unknown template preference '{raw}'"),
            },
            Ok(None) => {}
            Err(err) => warn!("failed to read template preference: {err}"),
        }
    }

    pub fn active(&self) -> TemplateId {
        *self.active.borrow()
    }

    pub fn watch(&self) -> watch::Receiver<TemplateId> {
        self.active.subscribe()
    }

    /// Gate-checked selection. On a premium miss the active template stays
    /// unchanged and the upgrade prompt is raised; on success the new id is
    /// committed and the preference persisted immediately.
    pub async fn select(
        &self,
        id: TemplateId,
        premium: &PremiumGate,
    ) -> Result<(), EngineError> {
        let template = super::find(id);
        if !super::can_use(template, premium.is_premium()) {
            premium.request_upgrade();
            return Err(EngineError::UpgradeRequired(id));
        }

        self.active.send_replace(id);
        if let Err(err) = self.storage.set(TEMPLATE_KEY, id.as_str()).await {
            // the in-memory selection stands; the preference just won't
            // survive a restart
            warn!("failed to persist template preference: {err}");
        }
        info!(template = %id, "active template changed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn make_selection() -> (TemplateSelection, Arc<MemoryStore>) {
        let storage = Arc::new(MemoryStore::new());
        (TemplateSelection::new(storage.clone() as Arc<dyn KeyValueStore>), storage)
    }

    #[tokio::test]
    async fn test_default_is_modern() {
        let (selection, _) = make_selection();
        assert_eq!(selection.active(), TemplateId::Modern);
    }

    #[tokio::test]
    async fn test_select_free_template_commits_and_persists() {
        let (selection, storage) = make_selection();
        let premium = PremiumGate::new(storage.clone() as Arc<dyn KeyValueStore>);

        selection.select(TemplateId::Classic, &premium).await.unwrap();

        assert_eq!(selection.active(), TemplateId::Classic);
        assert_eq!(
            storage.get(TEMPLATE_KEY).await.unwrap().as_deref(),
            Some("classic"),
            "preference must be persisted immediately"
        );
    }

    #[tokio::test]
    async fn test_premium_template_blocked_without_capability() {
        let (selection, storage) = make_selection();
        let premium = PremiumGate::new(storage.clone() as Arc<dyn KeyValueStore>);

        let err = selection
            .select(TemplateId::Creative, &premium)
            .await
            .unwrap_err();

        assert!(matches!(err, EngineError::UpgradeRequired(TemplateId::Creative)));
        assert_eq!(
            selection.active(),
            TemplateId::Modern,
            "a blocked selection must not change the active template"
        );
        assert!(premium.upgrade_prompt_open(), "the upgrade prompt must be raised");
        assert_eq!(
            storage.get(TEMPLATE_KEY).await.unwrap(),
            None,
            "a blocked selection must not be persisted"
        );
    }

    #[tokio::test]
    async fn test_premium_template_allowed_after_upgrade() {
        let (selection, storage) = make_selection();
        let premium = PremiumGate::new(storage.clone() as Arc<dyn KeyValueStore>);

        premium.upgrade_to_premium().await;
        selection.select(TemplateId::Creative, &premium).await.unwrap();
        assert_eq!(selection.active(), TemplateId::Creative);
    }

    #[tokio::test]
    async fn test_restore_reads_valid_preference() {
        let (selection, storage) = make_selection();
        storage.set(TEMPLATE_KEY, "minimal").await.unwrap();
        selection.restore().await;
        assert_eq!(selection.active(), TemplateId::Minimal);
    }

    #[tokio::test]
    async fn test_restore_ignores_unknown_preference() {
        let (selection, storage) = make_selection();
        storage.set(TEMPLATE_KEY, "vaporwave").await.unwrap();
        selection.restore().await;
        assert_eq!(selection.active(), TemplateId::Modern);
    }
}
