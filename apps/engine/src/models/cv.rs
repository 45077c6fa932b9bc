//! Canonical resume data model — the aggregate that is persisted, previewed,
//! and exported.
//!
//! The serialized shape (camelCase field names) is wire-compatible with the
//! persisted JSON snapshots of earlier builds, so existing saved resumes load
//! unchanged.

use serde::{Deserialize, Deserializer, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Leaf types
// ────────────────────────────────────────────────────────────────────────────

/// Contact and summary block. All fields are optional for storage (empty
/// string = not provided); name/title/email become required at export time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
}

/// One work-history entry. Dates are year-month strings (`"2022-03"`).
/// When `is_current_job` is set the stored `end_date` is ignored at render
/// time and "Present" is substituted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub is_current_job: bool,
    pub description: String,
}

/// One education entry. `gpa` is absent rather than empty when not provided;
/// legacy snapshots that stored `""` deserialize back to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub gpa: Option<String>,
}

/// Proficiency tiers, ordered. The set is closed: anything outside these four
/// values is rejected at the serde boundary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// All levels in ascending order.
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }

    pub fn parse(raw: &str) -> Option<SkillLevel> {
        Self::ALL.iter().copied().find(|l| l.as_str() == raw)
    }

    /// Fill fraction used by meter-style skill displays:
    /// Beginner 25%, Intermediate 50%, Advanced 75%, Expert 100%.
    pub fn progress_fraction(&self) -> f32 {
        match self {
            SkillLevel::Beginner => 0.25,
            SkillLevel::Intermediate => 0.50,
            SkillLevel::Advanced => 0.75,
            SkillLevel::Expert => 1.0,
        }
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub level: SkillLevel,
}

// ────────────────────────────────────────────────────────────────────────────
// Aggregate root
// ────────────────────────────────────────────────────────────────────────────

/// The aggregate root: the single unit of persistence, rendering input, and
/// export input. Always fully formed: load/replace operations swap the whole
/// value atomically, never individual sub-objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CvData {
    pub personal_info: PersonalInfo,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
}

impl CvData {
    /// True once the user has entered anything worth persisting: a name,
    /// email, or title, or at least one list entry. An untouched session
    /// stays below this bar and is never written to storage.
    pub fn has_content(&self) -> bool {
        !self.personal_info.name.is_empty()
            || !self.personal_info.email.is_empty()
            || !self.personal_info.title.is_empty()
            || !self.experiences.is_empty()
            || !self.education.is_empty()
            || !self.skills.is_empty()
    }
}

/// Maps legacy `""` GPA values to `None` on the way in. The in-memory model
/// only ever holds absent-or-present; the blank form exists solely in old
/// persisted snapshots.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_serializes_camel_case() {
        let cv = CvData {
            experiences: vec![Experience {
                id: "e1".to_string(),
                start_date: "2022-03".to_string(),
                is_current_job: true,
                ..Default::default()
            }],
            ..Default::default()
        };
        let json = serde_json::to_string(&cv).unwrap();
        assert!(json.contains("\"personalInfo\""));
        assert!(json.contains("\"startDate\""));
        assert!(json.contains("\"isCurrentJob\""));
        assert!(!json.contains("\"personal_info\""));
    }

    #[test]
    fn test_round_trip_preserves_aggregate() {
        let cv = crate::models::sample::sample_cv();
        let json = serde_json::to_string(&cv).unwrap();
        let back: CvData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cv);
    }

    #[test]
    fn test_legacy_blank_gpa_becomes_none() {
        let json = r#"{"id":"1","school":"","degree":"","field":"","startDate":"","endDate":"","gpa":""}"#;
        let edu: Education = serde_json::from_str(json).unwrap();
        assert_eq!(edu.gpa, None, "blank GPA from a legacy snapshot must map to None");
    }

    #[test]
    fn test_present_gpa_survives() {
        let json = r#"{"id":"1","gpa":"3.8"}"#;
        let edu: Education = serde_json::from_str(json).unwrap();
        assert_eq!(edu.gpa.as_deref(), Some("3.8"));
    }

    #[test]
    fn test_absent_gpa_not_serialized() {
        let edu = Education {
            id: "1".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&edu).unwrap();
        assert!(!json.contains("gpa"), "None GPA must be omitted, got {json}");
    }

    #[test]
    fn test_unknown_skill_level_rejected() {
        let json = r#"{"id":"1","name":"Juggling","level":"Guru"}"#;
        assert!(
            serde_json::from_str::<Skill>(json).is_err(),
            "levels outside the closed set must not deserialize"
        );
    }

    #[test]
    fn test_skill_level_parse_round_trip() {
        for level in SkillLevel::ALL {
            assert_eq!(SkillLevel::parse(level.as_str()), Some(level));
        }
        assert_eq!(SkillLevel::parse("expert"), None, "parsing is case-sensitive");
    }

    #[test]
    fn test_skill_levels_are_ordered() {
        assert!(SkillLevel::Beginner < SkillLevel::Intermediate);
        assert!(SkillLevel::Intermediate < SkillLevel::Advanced);
        assert!(SkillLevel::Advanced < SkillLevel::Expert);
    }

    #[test]
    fn test_progress_fractions() {
        assert_eq!(SkillLevel::Beginner.progress_fraction(), 0.25);
        assert_eq!(SkillLevel::Intermediate.progress_fraction(), 0.50);
        assert_eq!(SkillLevel::Advanced.progress_fraction(), 0.75);
        assert_eq!(SkillLevel::Expert.progress_fraction(), 1.0);
    }

    #[test]
    fn test_empty_aggregate_has_no_content() {
        assert!(!CvData::default().has_content());
    }

    #[test]
    fn test_any_identity_field_counts_as_content() {
        let mut cv = CvData::default();
        cv.personal_info.title = "Engineer".to_string();
        assert!(cv.has_content());
    }

    #[test]
    fn test_phone_alone_is_not_content() {
        // Matches the reference skip-if-empty rule: only name/email/title and
        // the three lists count.
        let mut cv = CvData::default();
        cv.personal_info.phone = "+1 555".to_string();
        assert!(!cv.has_content());
    }

    #[test]
    fn test_single_skill_counts_as_content() {
        let mut cv = CvData::default();
        cv.skills.push(Skill {
            id: "1".to_string(),
            name: "Rust".to_string(),
            level: SkillLevel::Expert,
        });
        assert!(cv.has_content());
    }
}
