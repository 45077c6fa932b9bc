//! Template identity and registry-entry metadata.
//!
//! The template set is closed: four ids, known at compile time. Catalog
//! entries live in [`crate::templates`]; this module only defines the types.

use serde::{Deserialize, Serialize};

/// The closed set of template ids. Lowercase on the wire (persisted template
/// preference, saved snapshots of earlier builds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    Modern,
    Classic,
    Creative,
    Minimal,
}

impl TemplateId {
    pub const ALL: [TemplateId; 4] = [
        TemplateId::Modern,
        TemplateId::Classic,
        TemplateId::Creative,
        TemplateId::Minimal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Modern => "modern",
            TemplateId::Classic => "classic",
            TemplateId::Creative => "creative",
            TemplateId::Minimal => "minimal",
        }
    }

    /// Parses a persisted preference value. Unknown strings return `None`;
    /// callers fall back to the default template rather than erroring.
    pub fn parse(raw: &str) -> Option<TemplateId> {
        Self::ALL.iter().copied().find(|id| id.as_str() == raw)
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One registry entry. `features` is an ordered list of short UI labels for
/// the template picker: display copy, not behavior.
#[derive(Debug, Clone)]
pub struct Template {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
    pub is_premium: bool,
    pub features: &'static [&'static str],
}
