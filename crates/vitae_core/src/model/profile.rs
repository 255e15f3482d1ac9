//! Profile document model.
//!
//! # Responsibility
//! - Define the canonical structures for identity, work history,
//!   education, skills and projects.
//! - Provide document-level validation before any derivation runs.
//!
//! # Invariants
//! - `TimelineRecord::label` and `subtype` are non-empty after validation.
//! - Skill levels stay within `0..=100` after validation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One raw employment or education interval as authored in configuration.
///
/// Date fields stay as raw `YYYY-MM` text here; parsing happens in the
/// timeline layer so that errors can name the offending record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineRecord {
    /// Organization or credential name.
    pub label: String,
    /// Role or formation title.
    pub subtype: String,
    /// Start period, `YYYY-MM`.
    pub start: String,
    /// End period, `YYYY-MM`. `None` means ongoing.
    #[serde(default)]
    pub end: Option<String>,
    /// Free-form place text.
    #[serde(default)]
    pub location: Option<String>,
    /// Short achievement/activity bullets, in display order.
    #[serde(default)]
    pub notes: Vec<String>,
}

impl TimelineRecord {
    /// Creates a record with only the required fields set.
    pub fn new(
        label: impl Into<String>,
        subtype: impl Into<String>,
        start: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            subtype: subtype.into(),
            start: start.into(),
            end: None,
            location: None,
            notes: Vec::new(),
        }
    }
}

/// Who the dashboard is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub headline: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub links: Vec<ContactLink>,
}

/// A labelled external link (site, repository, social profile).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub url: String,
}

/// One academic credential or certification.
///
/// `year` stays textual because some sources carry annotations such as
/// "2025 (em andamento)"; the classifier skips entries it cannot parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub title: String,
    pub org: String,
    pub year: String,
}

/// A named proficiency with a 0-100 level for radar/bar charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

/// A display group of skills (core, tools, languages, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub skills: Vec<Skill>,
}

/// A portfolio project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub summary: String,
    /// Headline metrics, label -> rendered value.
    #[serde(default)]
    pub metrics: BTreeMap<String, String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// The whole immutable profile document, decoded once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub identity: Identity,
    #[serde(default)]
    pub experiences: Vec<TimelineRecord>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// Validation failure for a decoded profile document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileValidationError {
    /// An experience record has an empty `label`.
    EmptyRecordLabel { index: usize },
    /// An experience record has an empty `subtype`.
    EmptyRecordSubtype { label: String },
    /// A skill level exceeds the 0-100 scale.
    SkillLevelOutOfRange {
        group: String,
        skill: String,
        level: u8,
    },
}

impl Display for ProfileValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRecordLabel { index } => {
                write!(f, "experience record #{index} has an empty label")
            }
            Self::EmptyRecordSubtype { label } => {
                write!(f, "experience record `{label}` has an empty subtype")
            }
            Self::SkillLevelOutOfRange {
                group,
                skill,
                level,
            } => write!(
                f,
                "skill `{skill}` in group `{group}` has level {level}, expected 0..=100"
            ),
        }
    }
}

impl Error for ProfileValidationError {}

impl Profile {
    /// Checks document-level invariants after decoding.
    ///
    /// # Errors
    /// - Returns the first violation found, in document order.
    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        for (index, record) in self.experiences.iter().enumerate() {
            if record.label.trim().is_empty() {
                return Err(ProfileValidationError::EmptyRecordLabel { index });
            }
            if record.subtype.trim().is_empty() {
                return Err(ProfileValidationError::EmptyRecordSubtype {
                    label: record.label.clone(),
                });
            }
        }
        for group in &self.skills {
            for skill in &group.skills {
                if skill.level > 100 {
                    return Err(ProfileValidationError::SkillLevelOutOfRange {
                        group: group.name.clone(),
                        skill: skill.name.clone(),
                        level: skill.level,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Profile, ProfileValidationError, Skill, SkillGroup, TimelineRecord};

    fn minimal_profile() -> Profile {
        Profile {
            identity: super::Identity {
                name: "Jo Silva".to_string(),
                headline: "Data Analyst".to_string(),
                bio: String::new(),
                links: Vec::new(),
            },
            experiences: vec![TimelineRecord::new("Acme", "Analyst", "2020-01")],
            education: Vec::new(),
            skills: Vec::new(),
            projects: Vec::new(),
        }
    }

    #[test]
    fn validate_accepts_minimal_profile() {
        assert_eq!(minimal_profile().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_empty_label() {
        let mut profile = minimal_profile();
        profile.experiences[0].label = "  ".to_string();
        assert_eq!(
            profile.validate(),
            Err(ProfileValidationError::EmptyRecordLabel { index: 0 })
        );
    }

    #[test]
    fn validate_rejects_skill_level_above_scale() {
        let mut profile = minimal_profile();
        profile.skills.push(SkillGroup {
            name: "Tools".to_string(),
            skills: vec![Skill {
                name: "SQL".to_string(),
                level: 120,
            }],
        });
        let err = profile.validate().unwrap_err();
        assert!(matches!(
            err,
            ProfileValidationError::SkillLevelOutOfRange { level: 120, .. }
        ));
    }
}
