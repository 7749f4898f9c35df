//! Rule-based field extractors for order confirmations.
//!
//! Every extractor is a (pattern, default) pair evaluated independently:
//! a field that fails to match becomes "unknown" data, never an error.

pub mod charges;
pub mod fields;
pub mod items;
pub mod patterns;
pub mod sections;

pub use charges::extract_charges;
pub use fields::extract_field;
pub use items::extract_line_items;
pub use sections::{extract_payment_info, extract_shipping_address};
