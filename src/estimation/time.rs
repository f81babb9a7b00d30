//! Effort and deadline estimation.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{EstimateError, Result};

/// Productive hours assumed per working day.
pub const HOURS_PER_DAY: u32 = 6;

/// Total hours: the product of base hours and every effort multiplier, rounded up once.
pub fn total_hours(base_hours: u32, multipliers: &[Decimal]) -> Result<u32> {
    let out_of_range = || EstimateError::invalid("hours", "effort out of range");

    let product = multipliers
        .iter()
        .try_fold(Decimal::from(base_hours), |acc, m| acc.checked_mul(*m))
        .ok_or_else(out_of_range)?;

    product
        .ceil()
        .to_u32()
        .filter(|hours| *hours >= 1)
        .ok_or_else(out_of_range)
}

/// Working days needed for the given hours.
pub fn suggested_deadline_days(total_hours: u32) -> u32 {
    total_hours.div_ceil(HOURS_PER_DAY).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_ceiling_applies_once() {
        // Per-factor ceiling would give ceil(8 * 0.8) = 7, then ceil(7 * 1.3) = 10.
        assert_eq!(total_hours(8, &[dec!(0.8), dec!(1.3)]).unwrap(), 9);
        assert_eq!(total_hours(80, &[dec!(1.5), dec!(1.3)]).unwrap(), 156);
        assert_eq!(total_hours(30, &[dec!(0.8), dec!(1.6)]).unwrap(), 39);
    }

    #[test]
    fn test_hours_never_below_one() {
        assert_eq!(total_hours(1, &[dec!(0.1)]).unwrap(), 1);
    }

    #[test]
    fn test_huge_effort_is_rejected() {
        assert!(total_hours(u32::MAX, &[dec!(2)]).is_err());
        assert!(total_hours(200, &[Decimal::MAX, Decimal::MAX]).is_err());
    }

    #[test]
    fn test_deadline_rounds_up() {
        assert_eq!(suggested_deadline_days(1), 1);
        assert_eq!(suggested_deadline_days(6), 1);
        assert_eq!(suggested_deadline_days(8), 2);
        assert_eq!(suggested_deadline_days(156), 26);
    }
}
