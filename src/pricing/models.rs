use chrono::NaiveDate;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::pricing::dates::parse_date;
use crate::pricing::error::{PricingError, PricingResult};

/// One pricing request: the seller's minimum acceptable promo price and the
/// marketplace's two discount requirements for a product.
///
/// Immutable once constructed; built by the HTTP payload or the tabular
/// reader and consumed solely by the row calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputRow {
    pub asin: String,
    pub start_date: NaiveDate,
    pub min_acceptable_price: Decimal,
    /// e.g. 20 means 20% off, factor 0.8
    pub ref_discount_percent: f64,
    /// e.g. 10 means 10% off, factor 0.9
    pub past30_discount_percent: f64,
}

/// One computed result: both floors (absent in the 100%-discount degenerate
/// case), both calendar windows, and the feasibility verdict.
///
/// Invariant: `reason` is present exactly when `feasible` is false.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OutputRow {
    #[schema(example = "B00EXAMPLE")]
    pub asin: String,
    pub start_date: NaiveDate,
    pub ref_price_floor: Option<Decimal>,
    pub ref_window_start: NaiveDate,
    pub ref_window_end: NaiveDate,
    pub past30_price_floor: Option<Decimal>,
    pub past_window_start: NaiveDate,
    pub past_window_end: NaiveDate,
    pub feasible: bool,
    pub reason: Option<String>,
}

/// Request body for floor calculations
///
/// The start date arrives as a string so both accepted formats
/// (MM/DD/YYYY and YYYY/MM/DD) can be used.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CalculateRequest {
    #[schema(example = "B00EXAMPLE")]
    #[validate(length(min = 1, message = "asin must not be empty"))]
    pub asin: String,
    #[schema(example = "06/01/2024")]
    pub start_date: String,
    #[schema(example = 19.99)]
    #[validate(custom = "crate::validation::validate_positive_price")]
    pub min_acceptable_price: f64,
    #[schema(example = 20.0, minimum = 0.0, maximum = 99.9999)]
    #[validate(custom = "crate::validation::validate_discount_percent")]
    pub ref_discount_percent: f64,
    #[schema(example = 10.0, minimum = 0.0, maximum = 99.9999)]
    #[validate(custom = "crate::validation::validate_discount_percent")]
    pub past30_discount_percent: f64,
}

impl CalculateRequest {
    /// Parses the start date and converts the price into an `InputRow`
    pub fn to_input_row(&self) -> PricingResult<InputRow> {
        let start_date = parse_date(&self.start_date)?;
        let min_acceptable_price = Decimal::from_f64(self.min_acceptable_price)
            .ok_or_else(|| {
                PricingError::invalid_input("min_acceptable_price", "must be a number")
            })?;

        Ok(InputRow {
            asin: self.asin.trim().to_string(),
            start_date,
            min_acceptable_price,
            ref_discount_percent: self.ref_discount_percent,
            past30_discount_percent: self.past30_discount_percent,
        })
    }
}

/// Response for a single calculation: the computed row plus its advisories
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculateResponse {
    pub result: OutputRow,
    pub suggestions: Vec<String>,
}

/// Template table returned by GET /api/template, purely illustrative
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TemplateResponse {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
