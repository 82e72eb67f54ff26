//! Shared types for Kanopi.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Reporting period with date-range validation
//! - Amount helpers for negligible-balance filtering

pub mod types;

pub use types::{PeriodError, ReportingPeriod};
