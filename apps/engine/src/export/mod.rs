//! Export pipeline — validate, render in export mode, serialize, name.
//!
//! The pre-check is all-or-nothing: a single missing required field aborts
//! the export and the full missing-field list goes back to the caller. At
//! most one export runs at a time; a second request while one is in flight
//! is rejected rather than queued.

mod backend;
pub use backend::{PlainTextBackend, RenderBackend};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::EngineError;
use crate::models::{CvData, TemplateId};
use crate::render::{layout_for, RenderMode};

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

/// A required field the export pre-check found missing or malformed, in the
/// order the check runs: name, title, email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MissingField {
    FullName,
    JobTitle,
    Email,
    /// Email is present but not a plausible address.
    ValidEmail,
}

impl MissingField {
    pub fn label(&self) -> &'static str {
        match self {
            MissingField::FullName => "Full Name",
            MissingField::JobTitle => "Job Title",
            MissingField::Email => "Email",
            MissingField::ValidEmail => "Valid Email",
        }
    }
}

impl std::fmt::Display for MissingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Required-field check for export: full name, job title, and a
/// plausible email. Returns the complete ordered list of gaps; empty means
/// the aggregate is exportable.
pub fn validate_for_export(cv: &CvData) -> Vec<MissingField> {
    let info = &cv.personal_info;
    let mut missing = Vec::new();

    if info.name.trim().is_empty() {
        missing.push(MissingField::FullName);
    }
    if info.title.trim().is_empty() {
        missing.push(MissingField::JobTitle);
    }
    if info.email.trim().is_empty() {
        missing.push(MissingField::Email);
    } else if !is_valid_email(info.email.trim()) {
        missing.push(MissingField::ValidEmail);
    }

    missing
}

/// Plausibility check, not RFC validation: non-empty local part, exactly one
/// `@`, a dotted domain, and no whitespace anywhere.
pub fn is_valid_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = raw.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Filename derivation
// ────────────────────────────────────────────────────────────────────────────

/// `"Ana María Li"` becomes `Ana_María_Li_Resume.<ext>`; a blank name falls
/// back to the fixed `Resume.<ext>`. Whitespace runs collapse to a single
/// underscore.
pub fn export_file_name(name: &str, extension: &str) -> String {
    let stem: Vec<&str> = name.split_whitespace().collect();
    if stem.is_empty() {
        format!("Resume.{extension}")
    } else {
        format!("{}_Resume.{extension}", stem.join("_"))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// The downloadable result. Delivery (saving the file, triggering the
/// browser download) is the host shell's job.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

pub struct Exporter {
    backend: Arc<dyn RenderBackend>,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag on every exit path, including early returns.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl Exporter {
    pub fn new(backend: Arc<dyn RenderBackend>) -> Self {
        Self {
            backend,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Runs the full pipeline against a snapshot of the aggregate. Returns
    /// the artifact for the host to deliver; nothing partial is ever
    /// produced.
    pub async fn export(
        &self,
        cv: &CvData,
        template: TemplateId,
    ) -> Result<ExportArtifact, EngineError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(EngineError::ExportInFlight);
        }
        let _guard = InFlightGuard(&self.in_flight);

        let missing = validate_for_export(cv);
        if !missing.is_empty() {
            warn!(?missing, "export blocked by required-field validation");
            return Err(EngineError::ExportValidation(missing));
        }

        let document = layout_for(template).render(cv, RenderMode::Export);
        let bytes = self.backend.serialize(&document).await?;
        let file_name = export_file_name(&cv.personal_info.name, self.backend.extension());

        info!(template = %template, file = %file_name, "export completed");
        Ok(ExportArtifact {
            file_name,
            content_type: self.backend.content_type().to_string(),
            bytes,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
