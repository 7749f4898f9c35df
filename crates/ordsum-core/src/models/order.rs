//! Order data models for parsed order confirmations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel stored in every string field that could not be extracted.
///
/// Absent fields hold this value rather than an empty string or `None`, so
/// downstream rendering can display them literally.
pub const UNKNOWN: &str = "unknown";

fn unknown() -> String {
    UNKNOWN.to_string()
}

/// A parsed order confirmation.
///
/// Created once per parse call and owned by the caller for the duration of
/// one request; only enrichment mutates it afterwards, filling each item's
/// `exact_quantity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Date the order was placed, verbatim from the document.
    pub order_date: String,

    /// Retailer order number.
    pub order_number: String,

    /// Order total as a currency string.
    pub order_total: String,

    /// Shipping status.
    pub status: OrderStatus,

    /// Consolidated line items in first-seen order.
    pub items: Vec<LineItem>,

    /// Summary of charges.
    pub charges: Charges,

    /// Shipping address block.
    pub shipping_address: ShippingAddress,

    /// Payment method and billing address.
    pub payment_information: PaymentInfo,
}

/// Shipping status found on the confirmation.
///
/// The status is a presence check for one fixed phrase; any other status
/// text yields `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// The "Not Yet Shipped" phrase was present.
    NotYetShipped,
    /// No recognized status phrase.
    #[default]
    Unknown,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::NotYetShipped => write!(f, "Not Yet Shipped"),
            OrderStatus::Unknown => write!(f, "{}", UNKNOWN),
        }
    }
}

/// One consolidated (name, price) entry with a summed quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name, whitespace-trimmed.
    pub name: String,

    /// Unit price as the literal captured string (no numeric conversion).
    pub unit_price: String,

    /// Quantity accumulated across matching blocks.
    pub quantity: u32,

    /// Package quantity from enrichment, when it ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact_quantity: Option<QuantityOutcome>,
}

/// Summary of charges.
///
/// Five fixed fields; a field missing from the document holds "unknown",
/// never null. No cross-validation between fields is performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Charges {
    pub subtotal: String,
    pub shipping: String,
    pub total_before_tax: String,
    pub estimated_tax: String,
    pub grand_total: String,
}

impl Default for Charges {
    fn default() -> Self {
        Self {
            subtotal: unknown(),
            shipping: unknown(),
            total_before_tax: unknown(),
            estimated_tax: unknown(),
            grand_total: unknown(),
        }
    }
}

impl Charges {
    /// The five charge fields as (key, value) pairs, in fixed order.
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("subtotal", self.subtotal.as_str()),
            ("shipping", self.shipping.as_str()),
            ("total_before_tax", self.total_before_tax.as_str()),
            ("estimated_tax", self.estimated_tax.as_str()),
            ("grand_total", self.grand_total.as_str()),
        ]
    }
}

/// Shipping address block: the four free-text lines after the header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingAddress {
    pub name: String,
    pub line1: String,
    pub line2: String,
    pub country: String,
}

impl Default for ShippingAddress {
    fn default() -> Self {
        Self {
            name: unknown(),
            line1: unknown(),
            line2: unknown(),
            country: unknown(),
        }
    }
}

/// Payment method and billing address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentInfo {
    /// Payment method line.
    pub method: String,

    /// Billing address block.
    pub billing: BillingAddress,
}

impl Default for PaymentInfo {
    fn default() -> Self {
        Self {
            method: unknown(),
            billing: BillingAddress::default(),
        }
    }
}

/// Billing address block: three free-text lines after the header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingAddress {
    pub name: String,
    pub line1: String,
    pub country: String,
}

impl Default for BillingAddress {
    fn default() -> Self {
        Self {
            name: unknown(),
            line1: unknown(),
            country: unknown(),
        }
    }
}

/// Result of one pack-quantity lookup for a line item.
///
/// Anything other than `Exact` is advisory: the overall request still
/// succeeds and renders with the outcome text in place of a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityOutcome {
    /// Package quantity parsed from the product title.
    Exact(u32),
    /// Page loaded but no quantity pattern matched.
    NotFound,
    /// The external service did not respond within the bounded wait.
    Timeout,
    /// Page state changed between locating and using an element; retryable.
    StaleReference,
    /// Any other failure from the lookup layer, with a readable cause.
    TransientError(String),
}

impl QuantityOutcome {
    /// Whether this outcome is inherently transient and safe to retry.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            QuantityOutcome::Timeout | QuantityOutcome::StaleReference
        )
    }
}

impl fmt::Display for QuantityOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantityOutcome::Exact(n) => write!(f, "{}", n),
            QuantityOutcome::NotFound => write!(f, "not found"),
            QuantityOutcome::Timeout => write!(f, "timed out"),
            QuantityOutcome::StaleReference => write!(f, "stale reference"),
            QuantityOutcome::TransientError(cause) => write!(f, "transient error: {}", cause),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(OrderStatus::NotYetShipped.to_string(), "Not Yet Shipped");
        assert_eq!(OrderStatus::Unknown.to_string(), UNKNOWN);
    }

    #[test]
    fn test_charges_default_all_unknown() {
        let charges = Charges::default();
        for (_, value) in charges.entries() {
            assert_eq!(value, UNKNOWN);
        }
    }

    #[test]
    fn test_charges_entries_order() {
        let keys: Vec<&str> = Charges::default()
            .entries()
            .iter()
            .map(|(key, _)| *key)
            .collect();
        assert_eq!(
            keys,
            vec![
                "subtotal",
                "shipping",
                "total_before_tax",
                "estimated_tax",
                "grand_total"
            ]
        );
    }

    #[test]
    fn test_quantity_outcome_display() {
        assert_eq!(QuantityOutcome::Exact(24).to_string(), "24");
        assert_eq!(QuantityOutcome::NotFound.to_string(), "not found");
        assert_eq!(QuantityOutcome::Timeout.to_string(), "timed out");
        assert_eq!(
            QuantityOutcome::TransientError("connection reset".to_string()).to_string(),
            "transient error: connection reset"
        );
    }

    #[test]
    fn test_quantity_outcome_retryable() {
        assert!(QuantityOutcome::Timeout.is_retryable());
        assert!(QuantityOutcome::StaleReference.is_retryable());
        assert!(!QuantityOutcome::NotFound.is_retryable());
        assert!(!QuantityOutcome::Exact(2).is_retryable());
    }
}
