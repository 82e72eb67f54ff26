//! Common types used across the application.

pub mod amount;
pub mod id;
pub mod period;

pub use amount::is_negligible;
pub use id::*;
pub use period::{PeriodError, ReportingPeriod};
