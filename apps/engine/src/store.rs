//! CV state manager — the sole mutator of the `CvData` aggregate.
//!
//! Every operation clones the current aggregate, applies the change, and
//! publishes the replacement value through a watch channel. Observers
//! (preview, auto-save) pick up each change by channel version; nothing a
//! consumer holds is ever mutated in place. Mutations are synchronous and
//! applied strictly in call order: one mutator per session.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::debug;

use crate::errors::EngineError;
use crate::models::{CvData, Education, Experience, Skill, SkillLevel};

// ────────────────────────────────────────────────────────────────────────────
// Patch types
// ────────────────────────────────────────────────────────────────────────────

/// Shallow-merge payloads: `None` leaves a field untouched. The serde shape
/// matches the host's form payloads (camelCase).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfoPatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current_job: Option<bool>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationPatch {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// `Some("")` clears the GPA to absent; blank never reaches the model.
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillPatch {
    pub name: Option<String>,
    pub level: Option<SkillLevel>,
}

// ────────────────────────────────────────────────────────────────────────────
// State manager
// ────────────────────────────────────────────────────────────────────────────

pub struct CvStore {
    tx: watch::Sender<CvData>,
}

impl CvStore {
    pub fn new(initial: CvData) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Owned copy of the current aggregate.
    pub fn snapshot(&self) -> CvData {
        self.tx.borrow().clone()
    }

    /// Change feed. Receivers see every published replacement value.
    pub fn subscribe(&self) -> watch::Receiver<CvData> {
        self.tx.subscribe()
    }

    fn publish(&self, next: CvData) {
        self.tx.send_replace(next);
    }

    // ── personal info ───────────────────────────────────────────────────────

    pub fn update_personal_info(&self, patch: PersonalInfoPatch) {
        let mut next = self.snapshot();
        let info = &mut next.personal_info;
        if let Some(v) = patch.name {
            info.name = v;
        }
        if let Some(v) = patch.title {
            info.title = v;
        }
        if let Some(v) = patch.email {
            info.email = v;
        }
        if let Some(v) = patch.phone {
            info.phone = v;
        }
        if let Some(v) = patch.location {
            info.location = v;
        }
        if let Some(v) = patch.summary {
            info.summary = v;
        }
        self.publish(next);
    }

    // ── experiences ─────────────────────────────────────────────────────────

    /// Appends an entry. The caller supplies the id; an id already present in
    /// the list is rejected and the aggregate is left unchanged.
    pub fn add_experience(&self, entry: Experience) -> Result<(), EngineError> {
        let mut next = self.snapshot();
        if next.experiences.iter().any(|e| e.id == entry.id) {
            return Err(EngineError::DuplicateId(entry.id));
        }
        next.experiences.push(entry);
        self.publish(next);
        Ok(())
    }

    /// Merges `patch` into the entry with the given id. Returns `false` (and
    /// changes nothing) when the id is unknown.
    pub fn update_experience(&self, id: &str, patch: ExperiencePatch) -> bool {
        let mut next = self.snapshot();
        let Some(entry) = next.experiences.iter_mut().find(|e| e.id == id) else {
            debug!(id, "update_experience: no such entry");
            return false;
        };
        if let Some(v) = patch.company {
            entry.company = v;
        }
        if let Some(v) = patch.position {
            entry.position = v;
        }
        if let Some(v) = patch.start_date {
            entry.start_date = v;
        }
        if let Some(v) = patch.end_date {
            entry.end_date = v;
        }
        if let Some(v) = patch.is_current_job {
            entry.is_current_job = v;
        }
        if let Some(v) = patch.description {
            entry.description = v;
        }
        self.publish(next);
        true
    }

    pub fn delete_experience(&self, id: &str) -> bool {
        let mut next = self.snapshot();
        let before = next.experiences.len();
        next.experiences.retain(|e| e.id != id);
        if next.experiences.len() == before {
            debug!(id, "delete_experience: no such entry");
            return false;
        }
        self.publish(next);
        true
    }

    // ── education ───────────────────────────────────────────────────────────

    pub fn add_education(&self, entry: Education) -> Result<(), EngineError> {
        let mut next = self.snapshot();
        if next.education.iter().any(|e| e.id == entry.id) {
            return Err(EngineError::DuplicateId(entry.id));
        }
        next.education.push(entry);
        self.publish(next);
        Ok(())
    }

    pub fn update_education(&self, id: &str, patch: EducationPatch) -> bool {
        let mut next = self.snapshot();
        let Some(entry) = next.education.iter_mut().find(|e| e.id == id) else {
            debug!(id, "update_education: no such entry");
            return false;
        };
        if let Some(v) = patch.school {
            entry.school = v;
        }
        if let Some(v) = patch.degree {
            entry.degree = v;
        }
        if let Some(v) = patch.field {
            entry.field = v;
        }
        if let Some(v) = patch.start_date {
            entry.start_date = v;
        }
        if let Some(v) = patch.end_date {
            entry.end_date = v;
        }
        if let Some(v) = patch.gpa {
            // blank means absent; the model never stores ""
            entry.gpa = if v.is_empty() { None } else { Some(v) };
        }
        self.publish(next);
        true
    }

    pub fn delete_education(&self, id: &str) -> bool {
        let mut next = self.snapshot();
        let before = next.education.len();
        next.education.retain(|e| e.id != id);
        if next.education.len() == before {
            debug!(id, "delete_education: no such entry");
            return false;
        }
        self.publish(next);
        true
    }

    // ── skills ──────────────────────────────────────────────────────────────

    pub fn add_skill(&self, entry: Skill) -> Result<(), EngineError> {
        let mut next = self.snapshot();
        if next.skills.iter().any(|s| s.id == entry.id) {
            return Err(EngineError::DuplicateId(entry.id));
        }
        next.skills.push(entry);
        self.publish(next);
        Ok(())
    }

    pub fn update_skill(&self, id: &str, patch: SkillPatch) -> bool {
        let mut next = self.snapshot();
        let Some(entry) = next.skills.iter_mut().find(|s| s.id == id) else {
            debug!(id, "update_skill: no such entry");
            return false;
        };
        if let Some(v) = patch.name {
            entry.name = v;
        }
        if let Some(v) = patch.level {
            entry.level = v;
        }
        self.publish(next);
        true
    }

    pub fn delete_skill(&self, id: &str) -> bool {
        let mut next = self.snapshot();
        let before = next.skills.len();
        next.skills.retain(|s| s.id != id);
        if next.skills.len() == before {
            debug!(id, "delete_skill: no such entry");
            return false;
        }
        self.publish(next);
        true
    }

    // ── aggregate swaps ─────────────────────────────────────────────────────

    /// Replaces the aggregate with the empty initial value. Purging persisted
    /// state is the session's job (it owns the auto-save store).
    pub fn reset(&self) {
        self.publish(CvData::default());
    }

    /// Atomically replaces the entire aggregate (restore, sample install).
    pub fn load_snapshot(&self, data: CvData) {
        self.publish(data);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
