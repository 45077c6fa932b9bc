//! Classic template — centered serif header, conservative single column,
//! skills grouped and listed by level category rather than as badges.

use super::format::{
    contact_items, education_entry, experience_entry, header_name, header_title, section,
};
use super::{
    Block, HeaderBlock, HeaderStyle, LayoutDocument, LevelGroup, Region, RegionKind, RenderMode,
    SectionContent, TemplateLayout,
};
use crate::models::{CvData, SkillLevel, TemplateId};

pub struct ClassicLayout;

impl TemplateLayout for ClassicLayout {
    fn id(&self) -> TemplateId {
        TemplateId::Classic
    }

    fn render(&self, cv: &CvData, mode: RenderMode) -> LayoutDocument {
        let info = &cv.personal_info;
        let mut blocks = vec![Block::Header(HeaderBlock {
            name: header_name(info, mode),
            title: header_title(info, mode),
            contact: contact_items(info),
            style: HeaderStyle::Centered,
        })];

        if !info.summary.is_empty() {
            blocks.push(section(
                "Professional Summary",
                SectionContent::Paragraph(info.summary.clone()),
            ));
        }
        if !cv.experiences.is_empty() {
            blocks.push(section(
                "Professional Experience",
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
                "Technical Skills",
                SectionContent::LevelGroups(group_skills_by_level(cv)),
            ));
        }

        LayoutDocument {
            template: TemplateId::Classic,
            regions: vec![Region {
                kind: RegionKind::Main,
                blocks,
            }],
        }
    }
}

/// Groups skills into the four level categories, ascending Beginner through
/// Expert; empty categories are skipped. Names within a group keep insertion
/// order and are joined with `", "`.
fn group_skills_by_level(cv: &CvData) -> Vec<LevelGroup> {
    SkillLevel::ALL
        .iter()
        .filter_map(|&level| {
            let names: Vec<&str> = cv
                .skills
                .iter()
                .filter(|s| s.level == level)
                .map(|s| s.name.as_str())
                .collect();
            if names.is_empty() {
                return None;
            }
            Some(LevelGroup {
                level,
                names: names.join(", "),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample::sample_cv;
    use crate::models::Skill;

    #[test]
    fn test_classic_header_is_centered() {
        let doc = ClassicLayout.render(&sample_cv(), RenderMode::Preview);
        let Block::Header(header) = &doc.regions[0].blocks[0] else {
            panic!("first block must be the header");
        };
        assert_eq!(header.style, HeaderStyle::Centered);
    }

    #[test]
    fn test_classic_groups_skills_in_level_order() {
        let doc = ClassicLayout.render(&sample_cv(), RenderMode::Preview);
        let groups = doc.regions[0]
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Section(s) => match &s.content {
                    SectionContent::LevelGroups(groups) => Some(groups),
                    _ => None,
                },
                _ => None,
            })
            .expect("classic renders skills as level groups");

        let levels: Vec<_> = groups.iter().map(|g| g.level).collect();
        assert_eq!(
            levels,
            vec![
                SkillLevel::Beginner,
                SkillLevel::Intermediate,
                SkillLevel::Advanced,
                SkillLevel::Expert
            ],
            "groups must ascend through the closed level order"
        );

        let expert = groups.iter().find(|g| g.level == SkillLevel::Expert).unwrap();
        assert_eq!(
            expert.names, "React, TypeScript, JavaScript",
            "names within a group keep insertion order, comma-joined"
        );
    }

    #[test]
    fn test_classic_skips_empty_level_groups() {
        let mut cv = CvData::default();
        cv.personal_info.name = "A".to_string();
        cv.skills.push(Skill {
            id: "1".to_string(),
            name: "Rust".to_string(),
            level: SkillLevel::Expert,
        });
        let doc = ClassicLayout.render(&cv, RenderMode::Preview);
        let groups = doc.regions[0]
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Section(s) => match &s.content {
                    SectionContent::LevelGroups(groups) => Some(groups),
                    _ => None,
                },
                _ => None,
            })
            .unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].level, SkillLevel::Expert);
    }
}
