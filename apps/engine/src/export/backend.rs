//! Rendering backends — serialize a layout tree into a downloadable
//! artifact.
//!
//! The document format is the backend's concern, not the pipeline's. The
//! shipped [`PlainTextBackend`] walks the tree into a plain-text document so
//! the pipeline is exercised end to end; a host with a real PDF engine
//! implements this trait and injects it instead.

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::EngineError;
use crate::render::{Block, LayoutDocument, SectionContent};

#[async_trait]
pub trait RenderBackend: Send + Sync {
    /// File extension for the artifact, without the dot.
    fn extension(&self) -> &'static str;

    fn content_type(&self) -> &'static str;

    async fn serialize(&self, document: &LayoutDocument) -> Result<Bytes, EngineError>;
}

pub struct PlainTextBackend;

#[async_trait]
impl RenderBackend for PlainTextBackend {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn content_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }

    async fn serialize(&self, document: &LayoutDocument) -> Result<Bytes, EngineError> {
        Ok(Bytes::from(render_text(document)))
    }
}

fn render_text(document: &LayoutDocument) -> String {
    let mut out = String::new();

    for region in &document.regions {
        for block in &region.blocks {
            match block {
                Block::Header(header) => {
                    push_line(&mut out, &header.name);
                    if !header.title.is_empty() {
                        push_line(&mut out, &header.title);
                    }
                    if !header.contact.is_empty() {
                        push_line(&mut out, &header.contact.join("  |  "));
                    }
                    out.push('\n');
                }
                Block::Section(section) => {
                    push_line(&mut out, &section.heading);
                    push_line(&mut out, &"-".repeat(section.heading.chars().count()));
                    render_content(&mut out, &section.content);
                    out.push('\n');
                }
            }
        }
    }

    out
}

fn render_content(out: &mut String, content: &SectionContent) {
    match content {
        SectionContent::Paragraph(text) => push_line(out, text),
        SectionContent::Entries(items) | SectionContent::Timeline(items) => {
            for item in items {
                push_line(out, &item.title);
                match &item.date_range {
                    Some(range) if !item.subtitle.is_empty() => {
                        push_line(out, &format!("{}  |  {range}", item.subtitle));
                    }
                    Some(range) => push_line(out, range),
                    None if !item.subtitle.is_empty() => push_line(out, &item.subtitle),
                    None => {}
                }
                if let Some(detail) = &item.detail {
                    push_line(out, detail);
                }
                if let Some(note) = &item.note {
                    push_line(out, note);
                }
            }
        }
        SectionContent::Badges(badges) => {
            for badge in badges {
                push_line(out, &format!("{} ({})", badge.name, badge.level));
            }
        }
        SectionContent::LevelGroups(groups) => {
            for group in groups {
                push_line(out, &format!("{}: {}", group.level, group.names));
            }
        }
        SectionContent::Meters(meters) => {
            for meter in meters {
                let filled = (meter.fraction * 10.0).round() as usize;
                push_line(
                    out,
                    &format!(
                        "{:<20} [{}{}] {}",
                        meter.name,
                        "#".repeat(filled),
                        ".".repeat(10usize.saturating_sub(filled)),
                        meter.level
                    ),
                );
            }
        }
        SectionContent::Labels(labels) => push_line(out, &labels.join(", ")),
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample::sample_cv;
    use crate::models::TemplateId;
    use crate::render::{layout_for, RenderMode};

    async fn render_sample(template: TemplateId) -> String {
        let doc = layout_for(template).render(&sample_cv(), RenderMode::Export);
        let bytes = PlainTextBackend.serialize(&doc).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_text_document_carries_identity_and_sections() {
        let text = render_sample(TemplateId::Modern).await;
        assert!(text.contains("Sarah Johnson"));
        assert!(text.contains("Senior Frontend Developer"));
        assert!(text.contains("Work Experience"));
        assert!(text.contains("Mar 2022 - Present"));
    }

    #[tokio::test]
    async fn test_text_document_renders_skill_meters() {
        let text = render_sample(TemplateId::Creative).await;
        assert!(text.contains("[##########] Expert"), "full meter for Expert skills");
        assert!(text.contains("[###.......] Beginner"), "quarter meter for Beginner skills");
    }

    #[tokio::test]
    async fn test_text_document_groups_classic_skills() {
        let text = render_sample(TemplateId::Classic).await;
        assert!(text.contains("Expert: React, TypeScript, JavaScript"));
    }

    #[tokio::test]
    async fn test_empty_sections_absent_from_text() {
        let mut cv = sample_cv();
        cv.education.clear();
        let doc = layout_for(TemplateId::Modern).render(&cv, RenderMode::Export);
        let bytes = PlainTextBackend.serialize(&doc).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(!text.contains("Education"));
    }
}
