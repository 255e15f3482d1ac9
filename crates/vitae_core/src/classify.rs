//! Education entry classification.
//!
//! # Responsibility
//! - Tag each education entry as a degree or a certification from
//!   data-driven matching rules, replacing inline keyword conditionals.
//! - Aggregate per-year category counts for the formation-evolution chart.
//!
//! # Invariants
//! - Rules are evaluated in order; the first match wins.
//! - An entry matching no rule falls back to `Degree`.

use crate::model::profile::EducationEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Coarse category for an education entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationCategory {
    /// Graduation or post-graduation program.
    Degree,
    /// Vendor or platform certification.
    Certification,
}

impl Display for EducationCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Degree => write!(f, "degree"),
            Self::Certification => write!(f, "certification"),
        }
    }
}

/// One matching rule: keyword or issuer hit assigns the category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierRule {
    pub category: EducationCategory,
    /// Case-insensitive substrings matched against the entry title.
    #[serde(default)]
    pub title_keywords: Vec<String>,
    /// Exact organization names that imply this category.
    #[serde(default)]
    pub issuers: Vec<String>,
}

impl ClassifierRule {
    fn matches(&self, entry: &EducationEntry) -> bool {
        let title = entry.title.to_lowercase();
        self.title_keywords
            .iter()
            .any(|keyword| title.contains(&keyword.to_lowercase()))
            || self.issuers.iter().any(|issuer| issuer == &entry.org)
    }
}

/// Rules mirroring the dashboard's historical inference: certification
/// when the title mentions "cert" or the issuer is a known vendor.
pub fn default_rules() -> Vec<ClassifierRule> {
    vec![ClassifierRule {
        category: EducationCategory::Certification,
        title_keywords: vec!["cert".to_string(), "certificate".to_string()],
        issuers: vec!["Google".to_string(), "Microsoft".to_string()],
    }]
}

/// Classifies one entry against `rules`, defaulting to `Degree`.
pub fn classify(entry: &EducationEntry, rules: &[ClassifierRule]) -> EducationCategory {
    rules
        .iter()
        .find(|rule| rule.matches(entry))
        .map(|rule| rule.category)
        .unwrap_or(EducationCategory::Degree)
}

/// Per-year tally of classified entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryCounts {
    pub degrees: u32,
    pub certifications: u32,
}

/// Groups entries by completion year and category for the stacked bar
/// chart. Entries whose `year` is not a plain integer are skipped.
pub fn counts_by_year(
    entries: &[EducationEntry],
    rules: &[ClassifierRule],
) -> BTreeMap<i32, CategoryCounts> {
    let mut counts: BTreeMap<i32, CategoryCounts> = BTreeMap::new();
    for entry in entries {
        let Ok(year) = entry.year.trim().parse::<i32>() else {
            continue;
        };
        let tally = counts.entry(year).or_default();
        match classify(entry, rules) {
            EducationCategory::Degree => tally.degrees += 1,
            EducationCategory::Certification => tally.certifications += 1,
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::{classify, default_rules, EducationCategory};
    use crate::model::profile::EducationEntry;

    fn entry(title: &str, org: &str, year: &str) -> EducationEntry {
        EducationEntry {
            title: title.to_string(),
            org: org.to_string(),
            year: year.to_string(),
        }
    }

    #[test]
    fn title_keyword_match_is_case_insensitive() {
        let rules = default_rules();
        assert_eq!(
            classify(&entry("Power BI Analyst CERTIFICATE", "Coursera", "2024"), &rules),
            EducationCategory::Certification
        );
    }

    #[test]
    fn issuer_match_requires_exact_org() {
        let rules = default_rules();
        assert_eq!(
            classify(&entry("Advanced Data Analytics", "Google", "2024"), &rules),
            EducationCategory::Certification
        );
        assert_eq!(
            classify(&entry("Advanced Data Analytics", "Google Campus", "2024"), &rules),
            EducationCategory::Degree
        );
    }

    #[test]
    fn unmatched_entry_defaults_to_degree() {
        assert_eq!(
            classify(
                &entry("MBA em Comércio Exterior", "UniAnchieta", "2012"),
                &default_rules()
            ),
            EducationCategory::Degree
        );
    }
}
