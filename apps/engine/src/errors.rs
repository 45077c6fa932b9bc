//! Engine-wide error type.
//!
//! No error from this crate may take down an interactive session:
//! persistence failures degrade to a transient save status, lookup misses
//! are no-ops, and only the export pipeline returns errors the host shell
//! has to surface.

use thiserror::Error;

use crate::export::MissingField;
use crate::models::template::TemplateId;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Export pre-check failed. Carries the full ordered missing-field list
    /// so the host can show every gap at once.
    #[error("export blocked: {} required field(s) missing or invalid", .0.len())]
    ExportValidation(Vec<MissingField>),

    #[error("duplicate entry id: {0}")]
    DuplicateId(String),

    #[error("unknown template id: {0}")]
    UnknownTemplate(String),

    #[error("template '{0}' requires a premium upgrade")]
    UpgradeRequired(TemplateId),

    #[error("an export is already in progress")]
    ExportInFlight,

    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("render error: {0}")]
    Render(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
