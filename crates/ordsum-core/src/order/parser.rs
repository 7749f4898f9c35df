//! Rule-based order parser.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::order::{OrderRecord, OrderStatus, UNKNOWN};

use super::rules::{
    charges::extract_charges,
    fields::extract_field,
    items::extract_line_items,
    patterns::{ORDER_DATE, ORDER_NUMBER, ORDER_TOTAL},
    sections::{extract_payment_info, extract_shipping_address},
};

/// The fixed status phrase this layout carries for unshipped orders.
const NOT_YET_SHIPPED: &str = "Not Yet Shipped";

/// Result of parsing one confirmation document.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// Parsed order data.
    pub record: OrderRecord,
    /// Fields that fell back to "unknown".
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for order parsing.
pub trait OrderParser {
    /// Parse an order record from extracted text. Never fails; malformed
    /// input degrades to "unknown" fields.
    fn parse(&self, text: &str) -> ParseOutcome;
}

/// Pattern-based parser for the single supported confirmation layout.
pub struct RuleOrderParser;

impl RuleOrderParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RuleOrderParser {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderParser for RuleOrderParser {
    fn parse(&self, text: &str) -> ParseOutcome {
        let start = Instant::now();
        let mut warnings = Vec::new();

        info!("Parsing order from {} characters of text", text.len());

        let order_date = extract_field(&ORDER_DATE, text);
        let order_number = extract_field(&ORDER_NUMBER, text);
        let order_total = extract_field(&ORDER_TOTAL, text);

        // Presence check for one fixed phrase, not a general status parse
        let status = if text.contains(NOT_YET_SHIPPED) {
            OrderStatus::NotYetShipped
        } else {
            OrderStatus::Unknown
        };

        for (field, value) in [
            ("order date", order_date.as_str()),
            ("order number", order_number.as_str()),
            ("order total", order_total.as_str()),
        ] {
            if value == UNKNOWN {
                warnings.push(format!("Could not extract {}", field));
            }
        }

        let items = extract_line_items(text);
        if items.is_empty() {
            warnings.push("Could not extract any line items".to_string());
        }

        let charges = extract_charges(text);
        let shipping_address = extract_shipping_address(text);
        let payment_information = extract_payment_info(text);

        let record = OrderRecord {
            order_date,
            order_number,
            order_total,
            status,
            items,
            charges,
            shipping_address,
            payment_information,
        };

        debug!(
            "Parsed order {} with {} warnings",
            record.order_number,
            warnings.len()
        );

        ParseOutcome {
            record,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}
