//! Template registry — the closed set of visual templates and the premium
//! gate check consulted before a selection commits.

mod selection;
pub use selection::{TemplateSelection, TEMPLATE_KEY};

use crate::models::template::{Template, TemplateId};

/// The four shipped templates. `creative` is the only premium entry.
static CATALOG: [Template; 4] = [
    Template {
        id: TemplateId::Modern,
        name: "Modern Professional",
        description: "Clean, modern design with blue accents and professional layout",
        is_premium: false,
        features: &["Single column", "Accent header", "Skill badges"],
    },
    Template {
        id: TemplateId::Classic,
        name: "Classic Traditional",
        description: "Traditional format with serif fonts and conservative styling",
        is_premium: false,
        features: &["Centered header", "Serif typography", "Skills by level"],
    },
    Template {
        id: TemplateId::Creative,
        name: "Creative Designer",
        description: "Bold design with creative elements for design professionals",
        is_premium: true,
        features: &["Sidebar layout", "Skill meters", "Experience timeline"],
    },
    Template {
        id: TemplateId::Minimal,
        name: "Minimal Clean",
        description: "Ultra-clean minimalist design with maximum white space",
        is_premium: false,
        features: &["Generous whitespace", "Lowercase headers", "Plain skill labels"],
    },
];

pub fn catalog() -> &'static [Template] {
    &CATALOG
}

/// Registry lookup. The set is closed, so every id has exactly one entry.
pub fn find(id: TemplateId) -> &'static Template {
    match id {
        TemplateId::Modern => &CATALOG[0],
        TemplateId::Classic => &CATALOG[1],
        TemplateId::Creative => &CATALOG[2],
        TemplateId::Minimal => &CATALOG[3],
    }
}

/// A template is usable when it is free or the user holds the premium
/// capability.
pub fn can_use(template: &Template, is_premium_user: bool) -> bool {
    !template.is_premium || is_premium_user
}
