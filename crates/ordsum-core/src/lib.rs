//! Core library for order-confirmation processing.
//!
//! This crate provides:
//! - PDF processing (text extraction)
//! - Rule-based extraction of order fields, line items, charges, and addresses
//! - Best-effort pack-quantity enrichment from a live retail site
//! - HTML rendering of parsed orders

pub mod error;
pub mod models;
pub mod pdf;
pub mod order;
pub mod enrich;
pub mod render;

pub use error::{OrdsumError, Result};
pub use models::order::{
    Charges, LineItem, OrderRecord, OrderStatus, PaymentInfo, QuantityOutcome, ShippingAddress,
    UNKNOWN,
};
pub use pdf::{PdfExtractor, PdfProcessor};
pub use order::{OrderParser, ParseOutcome, RuleOrderParser};
pub use enrich::{enrich_items, QuantityLookup, RetailQuantityLookup};
pub use render::render_order_html;
