//! Builder session — the constructor-injected container wiring one app
//! instance together.
//!
//! There are no ambient singletons: every session owns its own state
//! manager, auto-save store, template selection, and premium gate, so tests
//! (and multi-window hosts) can run instances side by side. Bootstrap
//! restores persisted state in the same order the reference implementation
//! did on mount: saved CV (else the bundled sample), then template
//! preference, then premium flag.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::info;

use crate::autosave::AutoSaveStore;
use crate::config::Config;
use crate::errors::EngineError;
use crate::export::{ExportArtifact, Exporter, PlainTextBackend, RenderBackend};
use crate::models::sample::sample_cv;
use crate::models::TemplateId;
use crate::premium::PremiumGate;
use crate::render::{layout_for, LayoutDocument, RenderMode};
use crate::storage::KeyValueStore;
use crate::store::CvStore;
use crate::templates::TemplateSelection;

pub struct Session {
    pub config: Config,
    pub storage: Arc<dyn KeyValueStore>,
    pub cv: CvStore,
    pub autosave: AutoSaveStore,
    pub templates: TemplateSelection,
    pub premium: PremiumGate,
    pub exporter: Exporter,
    autosave_task: JoinHandle<()>,
}

impl Session {
    /// Bootstraps a session with the default plain-text export backend.
    pub async fn bootstrap(config: Config, storage: Arc<dyn KeyValueStore>) -> Self {
        Self::bootstrap_with_backend(config, storage, Arc::new(PlainTextBackend)).await
    }

    /// Bootstraps with an injected export backend (hosts with a real PDF
    /// engine). Never fails: every restore path degrades to defaults.
    pub async fn bootstrap_with_backend(
        config: Config,
        storage: Arc<dyn KeyValueStore>,
        backend: Arc<dyn RenderBackend>,
    ) -> Self {
        let autosave = AutoSaveStore::new(storage.clone(), config.autosave.clone());

        let initial = match autosave.load_saved().await {
            Some(saved) => {
                info!("restored saved CV data");
                saved
            }
            None => {
                info!("no saved CV data; installing bundled sample");
                sample_cv()
            }
        };
        let cv = CvStore::new(initial);

        let templates = TemplateSelection::new(storage.clone());
        templates.restore().await;

        let premium = PremiumGate::new(storage.clone());
        premium.restore().await;

        let autosave_task = spawn_autosave_observer(&cv, autosave.clone());

        Self {
            config,
            storage,
            cv,
            autosave,
            templates,
            premium,
            exporter: Exporter::new(backend),
            autosave_task,
        }
    }

    /// Renders the preview for the active template from the current snapshot.
    pub fn preview(&self) -> LayoutDocument {
        layout_for(self.templates.active()).render(&self.cv.snapshot(), RenderMode::Preview)
    }

    /// Exports the current snapshot with the active template.
    pub async fn export(&self) -> Result<ExportArtifact, EngineError> {
        self.exporter
            .export(&self.cv.snapshot(), self.templates.active())
            .await
    }

    /// Gate-checked template switch.
    pub async fn select_template(&self, id: TemplateId) -> Result<(), EngineError> {
        self.templates.select(id, &self.premium).await
    }

    /// Clears the aggregate and purges persisted storage.
    pub async fn reset_cv(&self) {
        self.cv.reset();
        self.autosave.clear_saved().await;
    }

    /// Replaces the aggregate with the bundled sample.
    pub fn load_sample_data(&self) {
        self.cv.load_snapshot(sample_cv());
    }

    /// Re-installs the persisted snapshot, if any. Returns whether one was
    /// found.
    pub async fn restore_saved(&self) -> bool {
        match self.autosave.load_saved().await {
            Some(saved) => {
                self.cv.load_snapshot(saved);
                true
            }
            None => false,
        }
    }

    /// Purges persisted storage and resets the aggregate.
    pub async fn clear_saved_data(&self) {
        self.autosave.clear_saved().await;
        self.cv.reset();
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.autosave_task.abort();
    }
}

/// The state manager never talks to storage directly: this observer forwards
/// every published aggregate to the auto-save store's debounced pipeline.
/// The task ends when the session (and with it the watch sender) drops.
fn spawn_autosave_observer(cv: &CvStore, autosave: AutoSaveStore) -> JoinHandle<()> {
    let mut rx = cv.subscribe();
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let snapshot = rx.borrow_and_update().clone();
            autosave.schedule_save(snapshot);
        }
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autosave::CV_DATA_KEY;
    use crate::models::CvData;
    use crate::premium::PREMIUM_KEY;
    use crate::storage::MemoryStore;
    use crate::store::PersonalInfoPatch;
    use crate::templates::TEMPLATE_KEY;
    use std::time::Duration;

    async fn make_session(storage: Arc<MemoryStore>) -> Session {
        Session::bootstrap(Config::default(), storage as Arc<dyn KeyValueStore>).await
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_run_installs_sample() {
        let session = make_session(Arc::new(MemoryStore::new())).await;
        let cv = session.cv.snapshot();
        assert_eq!(cv.personal_info.name, "Sarah Johnson");
        assert_eq!(cv.experiences.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_bootstrap_restores_saved_cv() {
        let storage = Arc::new(MemoryStore::new());
        let mut saved = CvData::default();
        saved.personal_info.name = "Restored Person".to_string();
        storage
            .set(CV_DATA_KEY, &serde_json::to_string(&saved).unwrap())
            .await
            .unwrap();

        let session = make_session(storage).await;
        assert_eq!(session.cv.snapshot().personal_info.name, "Restored Person");
    }

    #[tokio::test(start_paused = true)]
    async fn test_bootstrap_restores_template_and_premium() {
        let storage = Arc::new(MemoryStore::new());
        storage.set(TEMPLATE_KEY, "classic").await.unwrap();
        storage.set(PREMIUM_KEY, "true").await.unwrap();

        let session = make_session(storage).await;
        assert_eq!(session.templates.active(), TemplateId::Classic);
        assert!(session.premium.is_premium());
    }

    #[tokio::test(start_paused = true)]
    async fn test_mutations_flow_into_autosave() {
        let session = make_session(Arc::new(MemoryStore::new())).await;

        session.cv.update_personal_info(PersonalInfoPatch {
            name: Some("Edited Name".to_string()),
            ..Default::default()
        });
        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert!(session.autosave.has_saved().await);
        let saved = session.autosave.load_saved().await.unwrap();
        assert_eq!(saved.personal_info.name, "Edited Name");
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_is_idempotent_and_purges_storage() {
        let session = make_session(Arc::new(MemoryStore::new())).await;

        session.cv.update_personal_info(PersonalInfoPatch {
            name: Some("Someone".to_string()),
            ..Default::default()
        });
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(session.autosave.has_saved().await);

        session.reset_cv().await;
        assert_eq!(session.cv.snapshot(), CvData::default());
        assert!(!session.autosave.has_saved().await);

        session.reset_cv().await;
        assert_eq!(session.cv.snapshot(), CvData::default());
        assert!(!session.autosave.has_saved().await);

        // and the reset itself must not be re-saved by the observer
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(!session.autosave.has_saved().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_premium_gate_blocks_creative_selection() {
        let session = make_session(Arc::new(MemoryStore::new())).await;

        let err = session.select_template(TemplateId::Creative).await.unwrap_err();
        assert!(matches!(err, EngineError::UpgradeRequired(TemplateId::Creative)));
        assert_eq!(session.templates.active(), TemplateId::Modern);
        assert!(session.premium.upgrade_prompt_open());

        session.premium.upgrade_to_premium().await;
        session.select_template(TemplateId::Creative).await.unwrap();
        assert_eq!(session.templates.active(), TemplateId::Creative);
    }

    #[tokio::test(start_paused = true)]
    async fn test_export_uses_active_template_and_snapshot() {
        let session = make_session(Arc::new(MemoryStore::new())).await;
        session.select_template(TemplateId::Minimal).await.unwrap();

        let artifact = session.export().await.unwrap();
        assert_eq!(artifact.file_name, "Sarah_Johnson_Resume.txt");
        let text = String::from_utf8(artifact.bytes.to_vec()).unwrap();
        assert!(text.contains("experience"), "minimal headings are lowercase");
    }

    #[tokio::test(start_paused = true)]
    async fn test_preview_matches_active_template() {
        let session = make_session(Arc::new(MemoryStore::new())).await;
        assert_eq!(session.preview().template, TemplateId::Modern);
        session.select_template(TemplateId::Classic).await.unwrap();
        assert_eq!(session.preview().template, TemplateId::Classic);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restore_saved_reinstalls_snapshot() {
        let session = make_session(Arc::new(MemoryStore::new())).await;

        session.cv.update_personal_info(PersonalInfoPatch {
            name: Some("Checkpoint".to_string()),
            ..Default::default()
        });
        tokio::time::sleep(Duration::from_millis(1500)).await;

        session.load_sample_data();
        assert_eq!(session.cv.snapshot().personal_info.name, "Sarah Johnson");

        assert!(session.restore_saved().await);
        assert_eq!(session.cv.snapshot().personal_info.name, "Checkpoint");
    }

    #[tokio::test(start_paused = true)]
    async fn test_two_sessions_are_independent() {
        let a = make_session(Arc::new(MemoryStore::new())).await;
        let b = make_session(Arc::new(MemoryStore::new())).await;

        a.premium.upgrade_to_premium().await;
        assert!(a.premium.is_premium());
        assert!(!b.premium.is_premium(), "sessions must not share state");
    }
}
