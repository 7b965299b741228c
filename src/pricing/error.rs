// Error types for the pricing engine
// Every failure here is a rejected input, never a system fault

use thiserror::Error;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Main error type for floor calculations and tabular input handling
///
/// All errors are raised synchronously at the point of invalidity and
/// propagate unrecovered through the row and batch calculators. Each variant
/// carries a human-readable message identifying the offending field or column.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Non-numeric or out-of-range numeric field
    /// (zero or negative price, discount outside [0, 99.9999])
    #[error("{field}: {message}")]
    InvalidInput { field: String, message: String },

    /// Unparseable date string
    #[error("invalid date format '{input}': expected MM/DD/YYYY or YYYY/MM/DD")]
    InvalidDateFormat { input: String },

    /// Tabular input missing a required column
    #[error("missing column: {column}")]
    MissingColumn { column: String },

    /// Request payload failed validator checks
    #[error("Validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),
}

/// Result type alias for pricing operations
pub type PricingResult<T> = Result<T, PricingError>;

impl PricingError {
    /// Shorthand for field-specific input errors
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        PricingError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl IntoResponse for PricingError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            PricingError::InvalidInput { .. } => (StatusCode::BAD_REQUEST, "Invalid input"),
            PricingError::InvalidDateFormat { .. } => {
                (StatusCode::BAD_REQUEST, "Invalid date format")
            }
            PricingError::MissingColumn { .. } => (StatusCode::BAD_REQUEST, "Missing column"),
            PricingError::ValidationError(_) => (StatusCode::BAD_REQUEST, "Validation error"),
        };

        let body = Json(json!({
            "error": error_message,
            "details": self.to_string(),
        }));

        (status, body).into_response()
    }
}
