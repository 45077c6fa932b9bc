//! cvstudio-engine — client-local resume builder core.
//!
//! The typed CV data model, its single-mutator state manager, debounced
//! auto-save over an opaque key-value store, the closed template registry
//! with premium gating, the dual-target layout renderer, and the export
//! pipeline. A host shell owns all presentation and delivery; this crate
//! owns the semantics that keep the on-screen preview and the exported
//! document identical.

pub mod autosave;
pub mod config;
pub mod errors;
pub mod export;
pub mod models;
pub mod premium;
pub mod render;
pub mod session;
pub mod storage;
pub mod store;
pub mod templates;

pub use autosave::{AutoSaveStore, SaveStatus};
pub use config::{AutoSaveTiming, Config};
pub use errors::EngineError;
pub use export::{ExportArtifact, Exporter, MissingField, PlainTextBackend, RenderBackend};
pub use models::{
    CvData, Education, Experience, PersonalInfo, Skill, SkillLevel, Template, TemplateId,
};
pub use premium::PremiumGate;
pub use render::{layout_for, LayoutDocument, RenderMode, TemplateLayout};
pub use session::Session;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use store::CvStore;
pub use templates::TemplateSelection;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes structured logging for a host shell. Call once at startup;
/// `RUST_LOG` overrides the default level.
pub fn init_tracing(default_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), default_level))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
