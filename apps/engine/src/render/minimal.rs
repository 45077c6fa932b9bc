//! Minimal template — single column, generous whitespace, lowercase section
//! headers, skills as plain labels with no level shown.

use super::format::{
    contact_items, education_entry, experience_entry, header_name, header_title, section,
};
use super::{
    Block, HeaderBlock, HeaderStyle, LayoutDocument, Region, RegionKind, RenderMode,
    SectionContent, TemplateLayout,
};
use crate::models::{CvData, TemplateId};

pub struct MinimalLayout;

impl TemplateLayout for MinimalLayout {
    fn id(&self) -> TemplateId {
        TemplateId::Minimal
    }

    fn render(&self, cv: &CvData, mode: RenderMode) -> LayoutDocument {
        let info = &cv.personal_info;
        let mut blocks = vec![Block::Header(HeaderBlock {
            name: header_name(info, mode),
            title: header_title(info, mode),
            contact: contact_items(info),
            style: HeaderStyle::Plain,
        })];

        if !info.summary.is_empty() {
            blocks.push(section(
                "about",
                SectionContent::Paragraph(info.summary.clone()),
            ));
        }
        if !cv.experiences.is_empty() {
            blocks.push(section(
                "experience",
                SectionContent::Entries(
                    cv.experiences
                        .iter()
                        .map(|exp| experience_entry(exp, "present"))
                        .collect(),
                ),
            ));
        }
        if !cv.education.is_empty() {
            blocks.push(section(
                "education",
                SectionContent::Entries(cv.education.iter().map(education_entry).collect()),
            ));
        }
        if !cv.skills.is_empty() {
            blocks.push(section(
                "skills",
                SectionContent::Labels(cv.skills.iter().map(|s| s.name.clone()).collect()),
            ));
        }

        LayoutDocument {
            template: TemplateId::Minimal,
            regions: vec![Region {
                kind: RegionKind::Main,
                blocks,
            }],
        }
    }
}
