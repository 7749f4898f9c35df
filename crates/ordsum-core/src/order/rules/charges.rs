//! Charge summary extraction.

use super::fields::extract_field;
use super::patterns::{ESTIMATED_TAX, GRAND_TOTAL, SHIPPING, SUBTOTAL, TOTAL_BEFORE_TAX};
use crate::models::order::Charges;

/// Extract the five charge fields, each defaulting to "unknown" on its own.
///
/// The fields are independent; subtotal + shipping is not required to equal
/// total_before_tax.
pub fn extract_charges(text: &str) -> Charges {
    Charges {
        subtotal: extract_field(&SUBTOTAL, text),
        shipping: extract_field(&SHIPPING, text),
        total_before_tax: extract_field(&TOTAL_BEFORE_TAX, text),
        estimated_tax: extract_field(&ESTIMATED_TAX, text),
        grand_total: extract_field(&GRAND_TOTAL, text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::UNKNOWN;

    const FULL_CHARGES: &str = "\
Item(s) Subtotal: $40.00
Shipping & Handling: $5.00
Total before tax: $45.00
Estimated tax to be collected: $0.67
Grand Total: $45.67";

    #[test]
    fn test_extract_all_charges() {
        let charges = extract_charges(FULL_CHARGES);
        assert_eq!(charges.subtotal, "$40.00");
        assert_eq!(charges.shipping, "$5.00");
        assert_eq!(charges.total_before_tax, "$45.00");
        assert_eq!(charges.estimated_tax, "$0.67");
        assert_eq!(charges.grand_total, "$45.67");
    }

    #[test]
    fn test_missing_grand_total_leaves_others_intact() {
        let text = "\
Item(s) Subtotal: $40.00
Shipping & Handling: $5.00
Total before tax: $45.00
Estimated tax to be collected: $0.67";
        let charges = extract_charges(text);
        assert_eq!(charges.grand_total, UNKNOWN);
        assert_eq!(charges.subtotal, "$40.00");
        assert_eq!(charges.estimated_tax, "$0.67");
    }

    #[test]
    fn test_empty_text_is_all_unknown() {
        assert_eq!(extract_charges(""), Charges::default());
    }
}
