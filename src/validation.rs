// Validation utilities module
// Provides custom validation functions for payload fields

use validator::ValidationError;

/// Validates that a price is a finite number greater than zero
pub fn validate_positive_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() || price <= 0.0 {
        Err(ValidationError::new("price_must_be_positive"))
    } else {
        Ok(())
    }
}

/// Validates that a discount percentage is within [0, 99.9999]
///
/// The bound is 99.9999 rather than 100: a 100% discount implies a
/// non-positive required baseline price.
pub fn validate_discount_percent(percent: f64) -> Result<(), ValidationError> {
    if !percent.is_finite() || !(0.0..=99.9999).contains(&percent) {
        Err(ValidationError::new("discount_out_of_range"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_price() {
        assert!(validate_positive_price(19.99).is_ok());
        assert!(validate_positive_price(0.01).is_ok());
        assert!(validate_positive_price(0.0).is_err());
        assert!(validate_positive_price(-1.0).is_err());
        assert!(validate_positive_price(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_discount_percent() {
        assert!(validate_discount_percent(0.0).is_ok());
        assert!(validate_discount_percent(20.0).is_ok());
        assert!(validate_discount_percent(99.9999).is_ok());
        assert!(validate_discount_percent(100.0).is_err());
        assert!(validate_discount_percent(-0.1).is_err());
        assert!(validate_discount_percent(f64::INFINITY).is_err());
    }
}
