//! Creative template — colored sidebar (contact, skill meters, education)
//! beside a main content area (summary, experience timeline).

use super::format::{
    contact_items, education_entry, experience_entry, header_name, header_title, section,
};
use super::{
    Block, HeaderBlock, HeaderStyle, LayoutDocument, MeterItem, Region, RegionKind, RenderMode,
    SectionContent, TemplateLayout,
};
use crate::models::{CvData, TemplateId};

pub struct CreativeLayout;

impl TemplateLayout for CreativeLayout {
    fn id(&self) -> TemplateId {
        TemplateId::Creative
    }

    fn render(&self, cv: &CvData, mode: RenderMode) -> LayoutDocument {
        let info = &cv.personal_info;

        let mut sidebar = vec![Block::Header(HeaderBlock {
            name: header_name(info, mode),
            title: header_title(info, mode),
            contact: Vec::new(), // contact gets its own sidebar section
            style: HeaderStyle::SidebarBanner,
        })];

        let contact = contact_items(info);
        if !contact.is_empty() {
            sidebar.push(section("Contact", SectionContent::Labels(contact)));
        }
        if !cv.skills.is_empty() {
            sidebar.push(section(
                "Skills",
                SectionContent::Meters(
                    cv.skills
                        .iter()
                        .map(|skill| MeterItem {
                            name: skill.name.clone(),
                            level: skill.level,
                            fraction: skill.level.progress_fraction(),
                        })
                        .collect(),
                ),
            ));
        }
        if !cv.education.is_empty() {
            sidebar.push(section(
                "Education",
                SectionContent::Entries(cv.education.iter().map(education_entry).collect()),
            ));
        }

        let mut main = Vec::new();
        if !info.summary.is_empty() {
            main.push(section(
                "About Me",
                SectionContent::Paragraph(info.summary.clone()),
            ));
        }
        if !cv.experiences.is_empty() {
            main.push(section(
                "Experience",
                SectionContent::Timeline(
                    cv.experiences
                        .iter()
                        .map(|exp| experience_entry(exp, "Present"))
                        .collect(),
                ),
            ));
        }

        LayoutDocument {
            template: TemplateId::Creative,
            regions: vec![
                Region {
                    kind: RegionKind::Sidebar,
                    blocks: sidebar,
                },
                Region {
                    kind: RegionKind::Main,
                    blocks: main,
                },
            ],
        }
    }
}
