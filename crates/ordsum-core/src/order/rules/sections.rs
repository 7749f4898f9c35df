//! Address and payment section extraction.

use regex::Captures;

use super::fields::extract_field;
use super::patterns::{BILLING_ADDRESS, PAYMENT_METHOD, SHIPPING_ADDRESS};
use crate::models::order::{BillingAddress, PaymentInfo, ShippingAddress, UNKNOWN};

fn group_or_unknown(caps: &Captures<'_>, group: usize) -> String {
    caps.get(group)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Capture the four lines following the shipping-address header.
///
/// The layout is rigid: a reordered or short section fails the match and
/// every field stays "unknown". Partial documents degrade, they do not
/// error.
pub fn extract_shipping_address(text: &str) -> ShippingAddress {
    match SHIPPING_ADDRESS.captures(text) {
        Some(caps) => ShippingAddress {
            name: group_or_unknown(&caps, 1),
            line1: group_or_unknown(&caps, 2),
            line2: group_or_unknown(&caps, 3),
            country: group_or_unknown(&caps, 4),
        },
        None => ShippingAddress::default(),
    }
}

/// Extract the payment method line and the billing address block.
pub fn extract_payment_info(text: &str) -> PaymentInfo {
    let method = extract_field(&PAYMENT_METHOD, text);

    let billing = match BILLING_ADDRESS.captures(text) {
        Some(caps) => BillingAddress {
            name: group_or_unknown(&caps, 1),
            line1: group_or_unknown(&caps, 2),
            country: group_or_unknown(&caps, 3),
        },
        None => BillingAddress::default(),
    };

    PaymentInfo { method, billing }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTIONS: &str = "\
Shipping Address:
Jane Doe
123 Main St
Springfield, IL 62701
United States

Payment Method:
Visa ending in 1234

Billing address
Jane Doe
123 Main St
United States";

    #[test]
    fn test_extract_shipping_address() {
        let address = extract_shipping_address(SECTIONS);
        assert_eq!(address.name, "Jane Doe");
        assert_eq!(address.line1, "123 Main St");
        assert_eq!(address.line2, "Springfield, IL 62701");
        assert_eq!(address.country, "United States");
    }

    #[test]
    fn test_missing_section_is_all_unknown() {
        let address = extract_shipping_address("no address here");
        assert_eq!(address, ShippingAddress::default());
    }

    #[test]
    fn test_short_section_is_all_unknown() {
        // Only two lines follow the header; the rigid match fails whole.
        let address = extract_shipping_address("Shipping Address:\nJane Doe\n123 Main St");
        assert_eq!(address, ShippingAddress::default());
    }

    #[test]
    fn test_extract_payment_info() {
        let info = extract_payment_info(SECTIONS);
        assert_eq!(info.method, "Visa ending in 1234");
        assert_eq!(info.billing.name, "Jane Doe");
        assert_eq!(info.billing.line1, "123 Main St");
        assert_eq!(info.billing.country, "United States");
    }

    #[test]
    fn test_payment_method_alone() {
        let info = extract_payment_info("Payment Method:\nGift card");
        assert_eq!(info.method, "Gift card");
        assert_eq!(info.billing, BillingAddress::default());
    }
}
