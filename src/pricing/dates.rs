// Date parsing for heterogeneous promotion start dates
// Accepts MM/DD/YYYY and YYYY/MM/DD, with `.` and `-` treated as `/`

use chrono::NaiveDate;

use crate::pricing::error::{PricingError, PricingResult};

/// Parses a date string into a calendar date.
///
/// Separators `.` and `-` are normalized to `/`, then formats are attempted
/// in order: `MM/DD/YYYY`, then `YYYY/MM/DD`, then strict ISO `YYYY-MM-DD`
/// as a fallback. When both calendar parts are <= 12 the string is ambiguous;
/// `MM/DD/YYYY` is tried first and wins. That tie-break is deliberate, not
/// an error.
pub fn parse_date(input: &str) -> PricingResult<NaiveDate> {
    let normalized = input.trim().replace(['.', '-'], "/");

    for format in ["%m/%d/%Y", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(&normalized, format) {
            return Ok(date);
        }
    }

    // ISO fallback with the dashes restored
    if let Ok(date) = NaiveDate::parse_from_str(&normalized.replace('/', "-"), "%Y-%m-%d") {
        return Ok(date);
    }

    Err(PricingError::InvalidDateFormat {
        input: input.to_string(),
    })
}

/// Formats a calendar date as `YYYY/MM/DD` for tabular output and advisories
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_us_format() {
        let date = parse_date("03/15/2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_parse_iso_slash_format() {
        let date = parse_date("2024/03/15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_both_formats_agree() {
        assert_eq!(
            parse_date("03/15/2024").unwrap(),
            parse_date("2024/03/15").unwrap()
        );
    }

    #[test]
    fn test_parse_normalizes_dots_and_dashes() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(parse_date("2024.03.15").unwrap(), expected);
        assert_eq!(parse_date("2024-03-15").unwrap(), expected);
        assert_eq!(parse_date("03-15-2024").unwrap(), expected);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let date = parse_date("  2024/03/15  ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_ambiguous_date_prefers_month_day_year() {
        // Both parts <= 12: MM/DD/YYYY is tried first and wins
        let date = parse_date("03/04/2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
    }

    #[test]
    fn test_parse_invalid_date_fails() {
        let result = parse_date("13/40/2024");
        assert!(matches!(
            result,
            Err(PricingError::InvalidDateFormat { .. })
        ));
    }

    #[test]
    fn test_parse_garbage_fails() {
        assert!(parse_date("not a date").is_err());
        assert!(parse_date("").is_err());
        assert!(parse_date("2024").is_err());
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(format_date(date), "2024/06/01");
    }
}
