//! Strict `YYYY-MM` parsing.
//!
//! # Responsibility
//! - Parse period text from configuration into month-granular values.
//!
//! # Invariants
//! - A constructed `YearMonth` always denotes a real calendar month.
//! - Arithmetic anchors every value to the first day of its month.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static YEAR_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})$").expect("valid year-month regex"));

/// A date specified only to month granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

/// Parse failure for period text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearMonthParseError {
    /// Text does not match the strict `YYYY-MM` shape.
    Pattern { raw: String },
    /// Shape matched but the month is outside `01..=12`.
    MonthOutOfRange { raw: String, month: u32 },
}

impl Display for YearMonthParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pattern { raw } => {
                write!(f, "`{raw}` does not match the YYYY-MM period format")
            }
            Self::MonthOutOfRange { raw, month } => {
                write!(f, "`{raw}` denotes month {month}, expected 01..=12")
            }
        }
    }
}

impl Error for YearMonthParseError {}

impl YearMonth {
    /// Parses strict `YYYY-MM` text.
    ///
    /// # Errors
    /// - `Pattern` when the text is not four digits, a dash, two digits.
    /// - `MonthOutOfRange` when the month part is `00` or above `12`.
    pub fn parse(raw: &str) -> Result<Self, YearMonthParseError> {
        let trimmed = raw.trim();
        let caps = YEAR_MONTH_RE
            .captures(trimmed)
            .ok_or_else(|| YearMonthParseError::Pattern {
                raw: raw.to_string(),
            })?;
        let year: i32 = caps[1].parse().expect("regex guarantees four digits");
        let month: u32 = caps[2].parse().expect("regex guarantees two digits");
        if !(1..=12).contains(&month) {
            return Err(YearMonthParseError::MonthOutOfRange {
                raw: raw.to_string(),
                month,
            });
        }
        Ok(Self { year, month })
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    /// Concrete date anchor: the first day of this month.
    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("month validated at construction")
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
