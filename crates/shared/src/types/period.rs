//! Reporting period type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when constructing a reporting period.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeriodError {
    /// The period start date is after its end date.
    #[error("Period start {date_from} is after period end {date_to}")]
    InvertedRange {
        /// Requested start date.
        date_from: NaiveDate,
        /// Requested end date.
        date_to: NaiveDate,
    },
}

/// An inclusive date range over which balances are aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    /// First day of the period (inclusive).
    pub date_from: NaiveDate,
    /// Last day of the period (inclusive).
    pub date_to: NaiveDate,
}

impl ReportingPeriod {
    /// Creates a period, rejecting inverted ranges.
    pub fn new(date_from: NaiveDate, date_to: NaiveDate) -> Result<Self, PeriodError> {
        if date_from > date_to {
            return Err(PeriodError::InvertedRange { date_from, date_to });
        }
        Ok(Self { date_from, date_to })
    }

    /// Returns true if the given date falls within this period.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.date_from && date <= self.date_to
    }
}
