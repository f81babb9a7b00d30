//! Labor and add-on cost.

use rust_decimal::Decimal;

use super::input::Extra;
use crate::error::{EstimateError, Result};

/// Labor cost: hours at the hourly rate, scaled by the urgency multiplier.
pub fn labor_cost(
    total_hours: u32,
    hourly_rate: Decimal,
    rush_multiplier: Decimal,
) -> Result<Decimal> {
    Decimal::from(total_hours)
        .checked_mul(hourly_rate)
        .and_then(|cost| cost.checked_mul(rush_multiplier))
        .ok_or_else(|| out_of_range("hourly rate"))
}

/// Sum of flat add-on prices. No multiplier touches extras.
pub fn extras_cost(extras: &[Extra]) -> Result<Decimal> {
    extras
        .iter()
        .try_fold(Decimal::ZERO, |sum, e| sum.checked_add(e.price))
        .ok_or_else(|| out_of_range("extra"))
}

/// Labor plus extras.
pub fn total_cost(base_price: Decimal, extras_price: Decimal) -> Result<Decimal> {
    base_price
        .checked_add(extras_price)
        .ok_or_else(|| out_of_range("total price"))
}

pub(crate) fn out_of_range(field: &str) -> EstimateError {
    EstimateError::invalid(field, "amount out of range")
}
