//! Immutable configuration model for the dashboard.
//!
//! # Responsibility
//! - Define the profile document shape decoded at startup.
//! - Keep static CV data out of process-wide mutable state.
//!
//! # Invariants
//! - Model values are plain data; nothing here performs I/O.
//! - Validation rejects records the timeline layer cannot render.

pub mod profile;
