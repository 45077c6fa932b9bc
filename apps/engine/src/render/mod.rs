//! Dual-target template rendering.
//!
//! Each template is one layout policy mapping `(CvData, RenderMode)` to a
//! [`LayoutDocument`] tree. The interactive preview and the paginated export
//! consume the same tree through different presentation backends, so the two
//! can never disagree structurally: the only mode difference is placeholder
//! text for blank identity fields, which exists in preview only (export is
//! gated on required-field validation upstream).
//!
//! # Shared rules, every template
//! - A section whose backing data is empty is omitted entirely (no empty
//!   headers).
//! - Stored year-month strings format as "Mon YYYY".
//! - An ongoing experience substitutes "Present" (or the template's
//!   lowercase equivalent) for the stored end date.
//! - Education date ranges render only when both dates are present; GPA only
//!   when present.

pub mod format;

mod classic;
mod creative;
mod minimal;
mod modern;

pub use classic::ClassicLayout;
pub use creative::CreativeLayout;
pub use minimal::MinimalLayout;
pub use modern::ModernLayout;

use serde::{Deserialize, Serialize};

use crate::models::{CvData, SkillLevel, TemplateId};

// ────────────────────────────────────────────────────────────────────────────
// Render mode
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderMode {
    /// Interactive on-screen preview; blank name/title show placeholders.
    Preview,
    /// Paginated export; identity fields are validated before this runs, so
    /// no placeholder ever reaches a document.
    Export,
}

// ────────────────────────────────────────────────────────────────────────────
// Layout tree
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    pub template: TemplateId,
    pub regions: Vec<Region>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub kind: RegionKind,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionKind {
    Main,
    Sidebar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Header(HeaderBlock),
    Section(SectionBlock),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderBlock {
    pub name: String,
    pub title: String,
    /// Non-empty contact values (email, phone, location), in that order.
    pub contact: Vec<String>,
    pub style: HeaderStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeaderStyle {
    /// Left-aligned with a colored rule underneath (modern).
    AccentRule,
    /// Centered, conservative (classic).
    Centered,
    /// Banner at the top of the colored sidebar (creative).
    SidebarBanner,
    /// Unadorned (minimal).
    Plain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBlock {
    pub heading: String,
    pub content: SectionContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SectionContent {
    Paragraph(String),
    /// Dated entries (experience, education) in insertion order.
    Entries(Vec<EntryItem>),
    /// Entries drawn along a vertical timeline (creative experience).
    Timeline(Vec<EntryItem>),
    /// Skills as level-tiered badges (modern).
    Badges(Vec<BadgeItem>),
    /// Skills grouped by level, names joined per group (classic).
    LevelGroups(Vec<LevelGroup>),
    /// Skills as progress meters (creative sidebar).
    Meters(Vec<MeterItem>),
    /// Plain unadorned labels (minimal skills, creative contact).
    Labels(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryItem {
    pub title: String,
    pub subtitle: String,
    pub date_range: Option<String>,
    pub detail: Option<String>,
    /// Short trailing annotation, e.g. "GPA: 3.8".
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeItem {
    pub name: String,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelGroup {
    pub level: SkillLevel,
    /// Skill names within the level, joined with `", "`, insertion order.
    pub names: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeterItem {
    pub name: String,
    pub level: SkillLevel,
    /// Fill fraction: Beginner 0.25 … Expert 1.0.
    pub fraction: f32,
}

// ────────────────────────────────────────────────────────────────────────────
// Dispatch
// ────────────────────────────────────────────────────────────────────────────

/// One layout policy per template.
pub trait TemplateLayout: Send + Sync {
    fn id(&self) -> TemplateId;

    /// Maps the aggregate to this template's layout tree. The structure must
    /// be identical for both modes; only placeholder text may differ.
    fn render(&self, cv: &CvData, mode: RenderMode) -> LayoutDocument;
}

/// Closed dispatch table: template id to layout implementation.
pub fn layout_for(id: TemplateId) -> &'static dyn TemplateLayout {
    match id {
        TemplateId::Modern => &ModernLayout,
        TemplateId::Classic => &ClassicLayout,
        TemplateId::Creative => &CreativeLayout,
        TemplateId::Minimal => &MinimalLayout,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests: cross-template properties
// ────────────────────────────────────────────────────────────────────────────
