pub mod cv;
pub mod sample;
pub mod template;

pub use cv::{CvData, Education, Experience, PersonalInfo, Skill, SkillLevel};
pub use template::{Template, TemplateId};

use uuid::Uuid;

/// Returns a fresh unique id for a new list entry.
///
/// The engine never invents ids on its own: callers attach one of these
/// (or any other unique string) when adding an entry, and the id stays
/// stable for the entry's lifetime.
pub fn new_entry_id() -> String {
    Uuid::new_v4().to_string()
}
