//! Amount helpers.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts in Kanopi are `rust_decimal::Decimal`.

use rust_decimal::Decimal;

/// Threshold below which a balance is treated as accumulation noise.
#[must_use]
pub fn negligible_threshold() -> Decimal {
    // 1e-6
    Decimal::new(1, 6)
}

/// Returns true if the amount is within noise distance of zero.
///
/// Sub-threshold residues are expected from upstream rounding and are
/// filtered silently rather than reported as data errors.
#[must_use]
pub fn is_negligible(amount: Decimal) -> bool {
    amount.abs() <= negligible_threshold()
}
