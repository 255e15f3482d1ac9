//! Core domain logic for Vitae, a personal CV/portfolio dashboard.
//! This crate is the single source of truth for timeline semantics.

pub mod classify;
pub mod logging;
pub mod model;
pub mod timeline;

pub use classify::{
    classify, counts_by_year, default_rules, CategoryCounts, ClassifierRule, EducationCategory,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::profile::{
    ContactLink, EducationEntry, Identity, Profile, ProfileValidationError, Project, Skill,
    SkillGroup, TimelineRecord,
};
pub use timeline::normalize::{
    normalize, DateField, Duration, TimelineDataset, TimelineError, TimelineInterval,
    TimelineResult,
};
pub use timeline::year_month::{YearMonth, YearMonthParseError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
