// Row and batch calculators
//
// Thin orchestration over the floor calculator. Each row is an independent,
// pure transformation; a batch is a sequential fold with no partial-success
// semantics, which is the right trade-off for small manual batches.

use crate::pricing::error::PricingResult;
use crate::pricing::floors::compute_floors;
use crate::pricing::models::{InputRow, OutputRow};

/// Transforms one input row into its computed result.
///
/// Delegates to the floor calculator, passing `asin` and `start_date` through
/// unchanged. Validation failures propagate to the caller unmodified.
pub fn calculate_row(row: &InputRow) -> PricingResult<OutputRow> {
    let floors = compute_floors(
        row.min_acceptable_price,
        row.ref_discount_percent,
        row.past30_discount_percent,
        row.start_date,
    )?;

    Ok(OutputRow {
        asin: row.asin.clone(),
        start_date: row.start_date,
        ref_price_floor: floors.ref_price_floor,
        ref_window_start: floors.ref_window_start,
        ref_window_end: floors.ref_window_end,
        past30_price_floor: floors.past30_price_floor,
        past_window_start: floors.past_window_start,
        past_window_end: floors.past_window_end,
        feasible: floors.feasible,
        reason: floors.reason,
    })
}

/// Applies `calculate_row` across a batch, preserving input order.
///
/// A failure on any single row aborts the entire batch with that row's error;
/// there is no row skipping.
pub fn calculate_batch(rows: &[InputRow]) -> PricingResult<Vec<OutputRow>> {
    rows.iter().map(calculate_row).collect()
}
