// Tabular input/output contracts
//
// The core does not read or write spreadsheet files; callers hand it an
// in-memory table (header row + cell rows) and get flat records back.
// Column names are the contract the upload template is built around.

use chrono::{Datelike, Duration, Local};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::pricing::dates::{format_date, parse_date};
use crate::pricing::error::{PricingError, PricingResult};
use crate::pricing::models::{InputRow, OutputRow};

pub const COL_ASIN: &str = "ASIN";
pub const COL_START_DATE_MDY: &str = "Start Date (MM/DD/YYYY)";
pub const COL_START_DATE_YMD: &str = "Start Date (YYYY/MM/DD)";
pub const COL_MIN_PRICE: &str = "Min Acceptable Price ($)";
pub const COL_REF_DISCOUNT: &str = "Ref Price Discount (%)";
pub const COL_PAST30_DISCOUNT: &str = "Past 30-Day Low Discount (%)";

/// Fixed column order for serialized output rows
pub const OUTPUT_COLUMNS: [&str; 10] = [
    "ASIN",
    "Start Date",
    "Ref Price Floor",
    "Ref Window Start",
    "Ref Window End",
    "Past 30-Day Low Floor",
    "Past Window Start",
    "Past Window End",
    "Feasible",
    "Reason",
];

/// Builds input rows from a table of string cells.
///
/// The start-date column may use either accepted variant; every other column
/// is required by its exact name. Fails with `MissingColumn` naming the
/// missing column, or with the cell-level error for unparseable values.
pub fn input_rows_from_table(
    headers: &[String],
    rows: &[Vec<String>],
) -> PricingResult<Vec<InputRow>> {
    let date_col = [COL_START_DATE_MDY, COL_START_DATE_YMD]
        .into_iter()
        .find(|candidate| headers.iter().any(|h| h == candidate))
        .ok_or_else(|| PricingError::MissingColumn {
            column: format!("{} or {}", COL_START_DATE_MDY, COL_START_DATE_YMD),
        })?;

    let asin_idx = column_index(headers, COL_ASIN)?;
    let date_idx = column_index(headers, date_col)?;
    let price_idx = column_index(headers, COL_MIN_PRICE)?;
    let ref_idx = column_index(headers, COL_REF_DISCOUNT)?;
    let past_idx = column_index(headers, COL_PAST30_DISCOUNT)?;

    rows.iter()
        .map(|cells| {
            let asin = cell(cells, asin_idx, COL_ASIN)?.trim().to_string();
            if asin.is_empty() {
                return Err(PricingError::invalid_input(COL_ASIN, "must not be empty"));
            }

            Ok(InputRow {
                asin,
                start_date: parse_date(cell(cells, date_idx, date_col)?)?,
                min_acceptable_price: parse_price(cell(cells, price_idx, COL_MIN_PRICE)?)?,
                ref_discount_percent: parse_number(cell(cells, ref_idx, COL_REF_DISCOUNT)?, COL_REF_DISCOUNT)?,
                past30_discount_percent: parse_number(
                    cell(cells, past_idx, COL_PAST30_DISCOUNT)?,
                    COL_PAST30_DISCOUNT,
                )?,
            })
        })
        .collect()
}

/// Serializes one output row into the fixed `OUTPUT_COLUMNS` order.
///
/// Dates are formatted `YYYY/MM/DD`; absent floors and reasons become empty
/// strings rather than sentinel numbers.
pub fn output_row_to_record(row: &OutputRow) -> Vec<String> {
    vec![
        row.asin.clone(),
        format_date(row.start_date),
        format_floor(row.ref_price_floor),
        format_date(row.ref_window_start),
        format_date(row.ref_window_end),
        format_floor(row.past30_price_floor),
        format_date(row.past_window_start),
        format_date(row.past_window_end),
        row.feasible.to_string(),
        row.reason.clone().unwrap_or_default(),
    ]
}

/// Header row for the downloadable input template
pub fn template_headers() -> Vec<String> {
    vec![
        COL_ASIN.to_string(),
        COL_START_DATE_MDY.to_string(),
        COL_MIN_PRICE.to_string(),
        COL_REF_DISCOUNT.to_string(),
        COL_PAST30_DISCOUNT.to_string(),
    ]
}

/// One illustrative record matching `template_headers`, two weeks out
pub fn template_row() -> Vec<String> {
    let start = Local::now().date_naive() + Duration::days(14);
    vec![
        "B00EXAMPLE".to_string(),
        start.format("%m/%d/%Y").to_string(),
        "19.99".to_string(),
        "20".to_string(),
        "0".to_string(),
    ]
}

/// One example input row with a start date early next month
pub fn template_input_rows() -> Vec<InputRow> {
    let today = Local::now().date_naive();
    let first_of_month = today.with_day(1).unwrap_or(today);
    vec![InputRow {
        asin: "B00EXAMPLE".to_string(),
        start_date: first_of_month + Duration::days(30),
        min_acceptable_price: Decimal::new(1999, 2),
        ref_discount_percent: 20.0,
        past30_discount_percent: 10.0,
    }]
}

fn column_index(headers: &[String], column: &str) -> PricingResult<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| PricingError::MissingColumn {
            column: column.to_string(),
        })
}

fn cell<'a>(cells: &'a [String], index: usize, column: &str) -> PricingResult<&'a str> {
    cells
        .get(index)
        .map(String::as_str)
        .ok_or_else(|| PricingError::invalid_input(column, "missing value"))
}

fn parse_number(raw: &str, column: &str) -> PricingResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| PricingError::invalid_input(column, "must be a number"))
}

fn parse_price(raw: &str) -> PricingResult<Decimal> {
    let value = parse_number(raw, COL_MIN_PRICE)?;
    Decimal::from_f64(value)
        .ok_or_else(|| PricingError::invalid_input(COL_MIN_PRICE, "must be a number"))
}

fn format_floor(floor: Option<Decimal>) -> String {
    floor.map(|f| format!("{:.2}", f)).unwrap_or_default()
}
