//! Career timeline derivation.
//!
//! # Responsibility
//! - Parse month-granular period text.
//! - Turn raw records into sorted, duration-annotated intervals for the
//!   Gantt view and the tabular summary.
//!
//! # Invariants
//! - Derivation is pure: no I/O, no shared state, deterministic for a
//!   given `(records, now)` pair.
//! - `resolved_start <= resolved_end` holds for every produced interval.

pub mod normalize;
pub mod year_month;
