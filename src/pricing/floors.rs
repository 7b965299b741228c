// Floor Calculator
//
// Derives the minimum reference price and minimum past-30-day-low price a
// seller must maintain so that the planned promotional price still meets the
// marketplace's discount-percentage requirements.

use chrono::{Duration, NaiveDate};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::pricing::error::{PricingError, PricingResult};
use crate::pricing::money::round_money;

/// Discount percentages above this bound are rejected outright: a discount of
/// 100% or more implies a non-positive required baseline price.
const MAX_DISCOUNT_PERCENT: f64 = 99.9999;

/// Result of a floor calculation
///
/// Floors are absent when the corresponding discount factor is not positive
/// (the 100%-discount degenerate case). Windows are always present; they are
/// defined by the start date alone, independent of feasibility.
#[derive(Debug, Clone, PartialEq)]
pub struct FloorResult {
    pub ref_price_floor: Option<Decimal>,
    pub past30_price_floor: Option<Decimal>,
    pub ref_window_start: NaiveDate,
    pub ref_window_end: NaiveDate,
    pub past_window_start: NaiveDate,
    pub past_window_end: NaiveDate,
    pub feasible: bool,
    pub reason: Option<String>,
}

/// Computes both price floors and their calendar windows.
///
/// For each discount percentage `p`, the multiplicative factor is
/// `f = 1 - p/100` and the floor is `round_money(min_price / f)`.
/// The reference window is `[start - 90 days, start - 1 day]` and the
/// past-30 window is `[start - 30 days, start - 1 day]`, both endpoints
/// inclusive, with no business-day adjustment.
pub fn compute_floors(
    min_price: Decimal,
    ref_discount_percent: f64,
    past30_discount_percent: f64,
    start_date: NaiveDate,
) -> PricingResult<FloorResult> {
    ensure_positive_price(min_price)?;

    let ref_factor = percent_to_factor(ref_discount_percent, "ref_discount_percent")?;
    let past_factor = percent_to_factor(past30_discount_percent, "past30_discount_percent")?;

    let mut reasons: Vec<String> = Vec::new();

    let ref_price_floor = floor_for_factor(
        min_price,
        ref_factor,
        "reference price discount is 100%, cannot satisfy the minimum promo price",
        &mut reasons,
    );
    let past30_price_floor = floor_for_factor(
        min_price,
        past_factor,
        "past 30-day low discount is 100%, cannot satisfy the minimum promo price",
        &mut reasons,
    );

    let feasible = reasons.is_empty();
    let reason = if feasible { None } else { Some(reasons.join("; ")) };

    Ok(FloorResult {
        ref_price_floor,
        past30_price_floor,
        ref_window_start: start_date - Duration::days(90),
        ref_window_end: start_date - Duration::days(1),
        past_window_start: start_date - Duration::days(30),
        past_window_end: start_date - Duration::days(1),
        feasible,
        reason,
    })
}

fn ensure_positive_price(min_price: Decimal) -> PricingResult<()> {
    if min_price <= Decimal::ZERO {
        return Err(PricingError::invalid_input(
            "min_acceptable_price",
            "must be greater than 0",
        ));
    }
    Ok(())
}

/// Converts a discount percentage to its multiplicative factor `1 - p/100`.
///
/// The upper bound is exactly 99.9999, not 100: rejecting at 99.9999
/// sidesteps exact-100 floating-point edge cases at the boundary.
fn percent_to_factor(percent: f64, field: &str) -> PricingResult<Decimal> {
    if !percent.is_finite() {
        return Err(PricingError::invalid_input(field, "must be a number"));
    }
    if !(0.0..=MAX_DISCOUNT_PERCENT).contains(&percent) {
        return Err(PricingError::invalid_input(
            field,
            "must be between 0 and 99.9999",
        ));
    }
    let percent = Decimal::from_f64(percent)
        .ok_or_else(|| PricingError::invalid_input(field, "must be a number"))?;
    Ok(Decimal::ONE - percent / Decimal::ONE_HUNDRED)
}

/// Derives one floor from a discount factor, or records why it is undefined.
///
/// A non-positive factor means the required baseline price would be infinite;
/// the floor stays absent and the reason list grows by one entry.
fn floor_for_factor(
    min_price: Decimal,
    factor: Decimal,
    infeasible_reason: &str,
    reasons: &mut Vec<String>,
) -> Option<Decimal> {
    if factor <= Decimal::ZERO {
        reasons.push(infeasible_reason.to_string());
        None
    } else {
        Some(round_money(min_price / factor))
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    /// The floor always suffices: applying the required discount to the floor
    /// still meets the minimum promo price, within rounding tolerance.
    #[test]
    fn prop_floor_meets_minimum_after_discount() {
        proptest!(|(
            price_cents in 1u32..=10_000_000u32,
            discount_bp in 0u32..=9_999u32
        )| {
            let min_price = Decimal::from(price_cents) / Decimal::ONE_HUNDRED;
            let percent = f64::from(discount_bp) / 100.0;
            let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

            let result = compute_floors(min_price, percent, 0.0, start).unwrap();
            let floor = result.ref_price_floor.unwrap();
            let factor = percent_to_factor(percent, "ref_discount_percent").unwrap();

            // Half-up rounding can undershoot the exact quotient by < 0.005
            prop_assert!(
                floor * factor >= min_price - dec!(0.01),
                "floor {} * factor {} fell below min price {}",
                floor, factor, min_price
            );
        });
    }

    /// A discount of exactly 0 requires no markup: floor == min price.
    #[test]
    fn prop_zero_discount_is_identity() {
        proptest!(|(price_cents in 1u32..=10_000_000u32)| {
            let min_price = Decimal::from(price_cents) / Decimal::ONE_HUNDRED;
            let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

            let result = compute_floors(min_price, 0.0, 0.0, start).unwrap();
            prop_assert_eq!(result.ref_price_floor, Some(min_price));
            prop_assert_eq!(result.past30_price_floor, Some(min_price));
        });
    }

    /// Window invariants hold for every start date, including month and year
    /// boundaries: ref window is [S-90, S-1], past-30 window is [S-30, S-1].
    #[test]
    fn prop_window_offsets_hold_for_all_start_dates() {
        proptest!(|(day_offset in 0i64..=3_650i64)| {
            let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
                + Duration::days(day_offset);

            let result = compute_floors(dec!(10.00), 15.0, 5.0, start).unwrap();
            prop_assert_eq!(result.ref_window_start, start - Duration::days(90));
            prop_assert_eq!(result.ref_window_end, start - Duration::days(1));
            prop_assert_eq!(result.past_window_start, start - Duration::days(30));
            prop_assert_eq!(result.past_window_end, start - Duration::days(1));
        });
    }

    /// Valid discounts always produce a feasible result with both floors set.
    #[test]
    fn prop_valid_discounts_are_feasible() {
        proptest!(|(
            ref_bp in 0u32..=9_999u32,
            past_bp in 0u32..=9_999u32
        )| {
            let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
            let result = compute_floors(
                dec!(19.99),
                f64::from(ref_bp) / 100.0,
                f64::from(past_bp) / 100.0,
                start,
            ).unwrap();

            prop_assert!(result.feasible);
            prop_assert!(result.ref_price_floor.is_some());
            prop_assert!(result.past30_price_floor.is_some());
            prop_assert_eq!(result.reason, None);
        });
    }
}
