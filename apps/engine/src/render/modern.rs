//! Modern template — single column, accent-rule header, skills as
//! level-tiered badges.

use super::format::{
    contact_items, education_entry, experience_entry, header_name, header_title, section,
};
use super::{
    BadgeItem, Block, HeaderBlock, HeaderStyle, LayoutDocument, Region, RegionKind, RenderMode,
    SectionContent, TemplateLayout,
};
use crate::models::{CvData, TemplateId};

pub struct ModernLayout;

impl TemplateLayout for ModernLayout {
    fn id(&self) -> TemplateId {
        TemplateId::Modern
    }

    fn render(&self, cv: &CvData, mode: RenderMode) -> LayoutDocument {
        let info = &cv.personal_info;
        let mut blocks = vec![Block::Header(HeaderBlock {
            name: header_name(info, mode),
            title: header_title(info, mode),
            contact: contact_items(info),
            style: HeaderStyle::AccentRule,
        })];

        if !info.summary.is_empty() {
            blocks.push(section(
                "Professional Summary",
                SectionContent::Paragraph(info.summary.clone()),
            ));
        }
        if !cv.experiences.is_empty() {
            blocks.push(section(
                "Work Experience",
                SectionContent::Entries(
                    cv.experiences
                        .iter()
                        .map(|exp| experience_entry(exp, "Present"))
                        .collect(),
                ),
            ));
        }
        if !cv.education.is_empty() {
            blocks.push(section(
                "Education",
                SectionContent::Entries(cv.education.iter().map(education_entry).collect()),
            ));
        }
        if !cv.skills.is_empty() {
            blocks.push(section(
                "Skills",
                SectionContent::Badges(
                    cv.skills
                        .iter()
                        .map(|skill| BadgeItem {
                            name: skill.name.clone(),
                            level: skill.level,
                        })
                        .collect(),
                ),
            ));
        }

        LayoutDocument {
            template: TemplateId::Modern,
            regions: vec![Region {
                kind: RegionKind::Main,
                blocks,
            }],
        }
    }
}
