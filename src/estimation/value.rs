//! Price band and effective rate.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::cost::out_of_range;
use super::rates::PriceRange;
use crate::error::Result;

/// Lower edge of the band, as a fraction of the total.
pub const BAND_LOW: Decimal = dec!(0.8);
/// Upper edge of the band, as a fraction of the total.
pub const BAND_HIGH: Decimal = dec!(1.2);

/// ±20% band around the computed price, floored and ceiled to whole units.
pub fn price_band(total_price: Decimal) -> Result<PriceRange> {
    let low = total_price.checked_mul(BAND_LOW);
    let high = total_price.checked_mul(BAND_HIGH);

    match (low, high) {
        (Some(low), Some(high)) => Ok(PriceRange::new(low.floor(), high.ceil())),
        _ => Err(out_of_range("total price")),
    }
}

/// Total price per hour, rounded half away from zero.
pub fn effective_hourly_rate(total_price: Decimal, total_hours: u32) -> Decimal {
    (total_price / Decimal::from(total_hours.max(1)))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
