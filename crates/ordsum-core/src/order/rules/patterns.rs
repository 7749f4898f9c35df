//! Compiled regex patterns for order-confirmation extraction.
//!
//! These target a single retailer's confirmation layout and are
//! intentionally literal; a document in any other layout degrades to
//! "unknown" fields rather than erroring.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Order summary
    pub static ref ORDER_DATE: Regex = Regex::new(
        r"Order Placed: (.+)"
    ).unwrap();

    pub static ref ORDER_NUMBER: Regex = Regex::new(
        r"Amazon\.com order number: (.+)"
    ).unwrap();

    pub static ref ORDER_TOTAL: Regex = Regex::new(
        r"Order Total: (\$[\d.,]+)"
    ).unwrap();

    // Item blocks: "<qty> of: <name> Condition: New$<price>"; the name may
    // wrap across lines up to the Condition marker
    pub static ref ITEM_BLOCK: Regex = Regex::new(
        r"(?s)(\d+) of: (.+?)Condition: New\$(\d+\.\d+)"
    ).unwrap();

    // Charges
    pub static ref SUBTOTAL: Regex = Regex::new(
        r"Item\(s\) Subtotal: (\$[\d.,]+)"
    ).unwrap();

    pub static ref SHIPPING: Regex = Regex::new(
        r"Shipping & Handling: (\$[\d.,]+)"
    ).unwrap();

    pub static ref TOTAL_BEFORE_TAX: Regex = Regex::new(
        r"Total before tax: (\$[\d.,]+)"
    ).unwrap();

    pub static ref ESTIMATED_TAX: Regex = Regex::new(
        r"Estimated tax to be collected: (\$[\d.,]+)"
    ).unwrap();

    pub static ref GRAND_TOTAL: Regex = Regex::new(
        r"Grand Total:\s*(\$[\d.,]+)"
    ).unwrap();

    // Address sections: fixed line counts after each header; a section with
    // fewer lines fails the whole match and every field stays "unknown"
    pub static ref SHIPPING_ADDRESS: Regex = Regex::new(
        r"Shipping Address:\n(.+)\n(.+)\n(.+)\n(.+)"
    ).unwrap();

    pub static ref PAYMENT_METHOD: Regex = Regex::new(
        r"Payment Method:\n(.+)"
    ).unwrap();

    pub static ref BILLING_ADDRESS: Regex = Regex::new(
        r"Billing address\n(.+)\n(.+)\n(.+)"
    ).unwrap();
}
