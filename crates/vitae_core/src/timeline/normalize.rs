//! Timeline normalization.
//!
//! # Responsibility
//! - Map raw `TimelineRecord`s to sorted `TimelineInterval`s with
//!   calendar-aware durations.
//!
//! # Invariants
//! - Fail-fast: the first malformed record aborts the whole batch, and the
//!   error names the record and the raw period text. CV data is trusted
//!   static configuration, so a bad record is a defect, not user input.
//! - Output is sorted by `resolved_start` descending; equal starts keep
//!   input order.
//! - The input slice is never mutated; every call allocates fresh output.

use crate::model::profile::TimelineRecord;
use crate::timeline::year_month::{YearMonth, YearMonthParseError};
use chrono::{Datelike, NaiveDate};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Separator used when joining record notes into one display string.
const NOTES_SEPARATOR: &str = " • ";

pub type TimelineResult<T> = Result<T, TimelineError>;

/// Which period field of a record failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Start,
    End,
}

impl Display for DateField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::End => write!(f, "end"),
        }
    }
}

/// Validation failure raised while normalizing one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineError {
    /// A period field is not valid `YYYY-MM` text.
    MalformedDate {
        label: String,
        field: DateField,
        source: YearMonthParseError,
    },
    /// The resolved end precedes the resolved start.
    InvalidInterval {
        label: String,
        start: NaiveDate,
        end: NaiveDate,
    },
}

impl Display for TimelineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedDate {
                label,
                field,
                source,
            } => write!(f, "record `{label}`: malformed {field} period: {source}"),
            Self::InvalidInterval { label, start, end } => write!(
                f,
                "record `{label}`: end {end} precedes start {start}"
            ),
        }
    }
}

impl Error for TimelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MalformedDate { source, .. } => Some(source),
            Self::InvalidInterval { .. } => None,
        }
    }
}

/// Whole years and whole months elapsed between two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Duration {
    pub years: u32,
    pub months: u32,
}

impl Duration {
    /// Calendar-aware delta between `start` and `end`.
    ///
    /// Whole-month count is the month-index difference, decremented by one
    /// when the end day-of-month has not yet reached the start
    /// day-of-month; leftover days are discarded. This matches common
    /// relative-delta semantics: 2023-04-01 to 2025-02-01 is 1y 10m, never
    /// a total-days division.
    ///
    /// # Invariants
    /// - Caller guarantees `start <= end`.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end);
        let mut months = (end.year() - start.year()) * 12
            + (end.month() as i32 - start.month() as i32);
        if end.day() < start.day() {
            months -= 1;
        }
        let months = months.max(0) as u32;
        Self {
            years: months / 12,
            months: months % 12,
        }
    }

    /// Compact human label: `"2a 3m"`, `"4a"`, `"7m"`, or `"0m"` when the
    /// interval spans less than a whole month.
    pub fn label(&self) -> String {
        let mut parts = Vec::with_capacity(2);
        if self.years > 0 {
            parts.push(format!("{}a", self.years));
        }
        if self.months > 0 {
            parts.push(format!("{}m", self.months));
        }
        if parts.is_empty() {
            "0m".to_string()
        } else {
            parts.join(" ")
        }
    }
}

/// One normalized, display-ready career interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineInterval {
    pub label: String,
    pub subtype: String,
    pub location: Option<String>,
    /// First day of the start month.
    pub resolved_start: NaiveDate,
    /// First day of the end month, or `now` for open-ended records.
    pub resolved_end: NaiveDate,
    /// Whether the source record had no end period.
    pub ongoing: bool,
    pub duration: Duration,
    pub duration_label: String,
    /// Record notes joined with a middle dot.
    pub summary: String,
}

/// Derives sorted, duration-annotated intervals from raw records.
///
/// `now` substitutes for any absent end period; passing it explicitly
/// keeps the function deterministic and testable. An empty `records`
/// slice yields an empty `Ok` result.
///
/// # Errors
/// - `MalformedDate` when a period field is not valid `YYYY-MM`.
/// - `InvalidInterval` when the resolved end precedes the start.
pub fn normalize(
    records: &[TimelineRecord],
    now: NaiveDate,
) -> TimelineResult<Vec<TimelineInterval>> {
    let mut intervals = Vec::with_capacity(records.len());
    for record in records {
        intervals.push(resolve_record(record, now)?);
    }
    // Stable sort: most recent first, equal starts keep input order.
    intervals.sort_by(|a, b| b.resolved_start.cmp(&a.resolved_start));
    Ok(intervals)
}

fn resolve_record(record: &TimelineRecord, now: NaiveDate) -> TimelineResult<TimelineInterval> {
    let start = parse_period(&record.start, &record.label, DateField::Start)?;
    let resolved_start = start.first_day();
    let resolved_end = match &record.end {
        Some(raw) => parse_period(raw, &record.label, DateField::End)?.first_day(),
        None => now,
    };
    if resolved_end < resolved_start {
        return Err(TimelineError::InvalidInterval {
            label: record.label.clone(),
            start: resolved_start,
            end: resolved_end,
        });
    }
    let duration = Duration::between(resolved_start, resolved_end);
    Ok(TimelineInterval {
        label: record.label.clone(),
        subtype: record.subtype.clone(),
        location: record.location.clone(),
        resolved_start,
        resolved_end,
        ongoing: record.end.is_none(),
        duration,
        duration_label: duration.label(),
        summary: record.notes.join(NOTES_SEPARATOR),
    })
}

fn parse_period(raw: &str, label: &str, field: DateField) -> TimelineResult<YearMonth> {
    YearMonth::parse(raw).map_err(|source| TimelineError::MalformedDate {
        label: label.to_string(),
        field,
        source,
    })
}

/// Normalized intervals plus the overall axis span for the Gantt view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimelineDataset {
    pub intervals: Vec<TimelineInterval>,
    /// `(earliest resolved_start, latest resolved_end)`; `None` when empty.
    pub span: Option<(NaiveDate, NaiveDate)>,
}

impl TimelineDataset {
    /// Normalizes `records` and computes the chart span in one pass.
    pub fn build(records: &[TimelineRecord], now: NaiveDate) -> TimelineResult<Self> {
        let intervals = normalize(records, now)?;
        let span = intervals
            .iter()
            .map(|interval| interval.resolved_start)
            .min()
            .zip(intervals.iter().map(|interval| interval.resolved_end).max());
        Ok(Self { intervals, span })
    }
}
