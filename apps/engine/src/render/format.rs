//! Formatting helpers shared by every template layout.

use chrono::NaiveDate;

use super::{Block, EntryItem, RenderMode, SectionBlock, SectionContent};
use crate::models::{Education, Experience, PersonalInfo};

pub const NAME_PLACEHOLDER: &str = "Full Name";
pub const TITLE_PLACEHOLDER: &str = "Job Title";

/// Formats a stored year-month string ("2022-03") as "Mar 2022".
/// Empty input renders empty; anything unparsable passes through unchanged
/// rather than erroring mid-render.
pub fn format_year_month(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d") {
        Ok(date) => date.format("%b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// "Mar 2022 - Present" for an ongoing job (whatever `end_date` holds),
/// otherwise "Mar 2022 - Feb 2024". The label's casing is the template's.
pub fn experience_date_range(exp: &Experience, present_label: &str) -> String {
    let end = if exp.is_current_job {
        present_label.to_string()
    } else {
        format_year_month(&exp.end_date)
    };
    format!("{} - {}", format_year_month(&exp.start_date), end)
}

/// Education ranges render only when both endpoints are present.
pub fn education_date_range(edu: &Education) -> Option<String> {
    if edu.start_date.is_empty() || edu.end_date.is_empty() {
        return None;
    }
    Some(format!(
        "{} - {}",
        format_year_month(&edu.start_date),
        format_year_month(&edu.end_date)
    ))
}

/// Blank name shows a placeholder in preview only; export is validated
/// upstream and never sees one.
pub fn header_name(info: &PersonalInfo, mode: RenderMode) -> String {
    if info.name.is_empty() && mode == RenderMode::Preview {
        NAME_PLACEHOLDER.to_string()
    } else {
        info.name.clone()
    }
}

pub fn header_title(info: &PersonalInfo, mode: RenderMode) -> String {
    if info.title.is_empty() && mode == RenderMode::Preview {
        TITLE_PLACEHOLDER.to_string()
    } else {
        info.title.clone()
    }
}

/// Non-empty contact values in display order: email, phone, location.
pub fn contact_items(info: &PersonalInfo) -> Vec<String> {
    [&info.email, &info.phone, &info.location]
        .into_iter()
        .filter(|v| !v.is_empty())
        .cloned()
        .collect()
}

pub fn section(heading: &str, content: SectionContent) -> Block {
    Block::Section(SectionBlock {
        heading: heading.to_string(),
        content,
    })
}

pub fn experience_entry(exp: &Experience, present_label: &str) -> EntryItem {
    EntryItem {
        title: exp.position.clone(),
        subtitle: exp.company.clone(),
        date_range: Some(experience_date_range(exp, present_label)),
        detail: (!exp.description.is_empty()).then(|| exp.description.clone()),
        note: None,
    }
}

pub fn education_entry(edu: &Education) -> EntryItem {
    EntryItem {
        title: edu.degree.clone(),
        subtitle: edu.school.clone(),
        date_range: education_date_range(edu),
        detail: (!edu.field.is_empty()).then(|| edu.field.clone()),
        note: edu.gpa.as_ref().map(|gpa| format!("GPA: {gpa}")),
    }
}
