use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a currency amount to 2 decimal places, half-up.
///
/// A value exactly at the midpoint rounds away from zero, not to even.
/// Floor values must never drop below the mathematically required minimum,
/// and banker's rounding produces inconsistent results near the boundary.
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    // Pin the scale so whole-dollar amounts still render as e.g. "60.00"
    rounded.rescale(2);
    rounded
}
