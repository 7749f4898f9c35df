//! Single-field extraction with a silent default.

use regex::Regex;

use crate::models::order::UNKNOWN;

/// Return the first capture group of the first match, or "unknown".
///
/// Absence of a field is data, not an error: a non-matching pattern must
/// never fail the surrounding parse.
pub fn extract_field(pattern: &Regex, text: &str) -> String {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::rules::patterns::{ORDER_DATE, ORDER_TOTAL};

    #[test]
    fn test_extract_field_match() {
        assert_eq!(
            extract_field(&ORDER_DATE, "Order Placed: January 5, 2024"),
            "January 5, 2024"
        );
    }

    #[test]
    fn test_extract_field_missing_is_unknown() {
        assert_eq!(extract_field(&ORDER_TOTAL, "no totals here"), UNKNOWN);
        assert_eq!(extract_field(&ORDER_TOTAL, ""), UNKNOWN);
    }

    #[test]
    fn test_extract_field_first_match_wins() {
        let text = "Order Placed: May 1, 2024\nOrder Placed: May 2, 2024";
        assert_eq!(extract_field(&ORDER_DATE, text), "May 1, 2024");
    }

    #[test]
    fn test_extract_field_stops_at_line_end() {
        let text = "Order Placed: May 1, 2024\nOrder Total: $10.00";
        assert_eq!(extract_field(&ORDER_DATE, text), "May 1, 2024");
    }
}
