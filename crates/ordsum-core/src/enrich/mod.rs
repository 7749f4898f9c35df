//! Best-effort pack-quantity enrichment for parsed line items.
//!
//! Enrichment is advisory: every outcome other than a parsed quantity is
//! recorded as a typed outcome on the item and the overall request still
//! succeeds and renders.

mod quantity;
mod retail;

pub use quantity::parse_pack_quantity;
pub use retail::RetailQuantityLookup;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::models::order::{OrderRecord, QuantityOutcome};

/// Capability for looking up a package quantity by item name.
///
/// Implementations bound their own waits and map every failure into a
/// typed outcome; `lookup` itself never errors. The core enrichment logic
/// is testable against a fake implementation of this trait.
#[async_trait]
pub trait QuantityLookup: Send + Sync {
    /// Look up the approximate package quantity for an item name.
    async fn lookup(&self, item_name: &str) -> QuantityOutcome;
}

/// Enrich every line item in place, strictly sequentially.
///
/// Each item's lookup completes (value or typed failure) before the next
/// begins; one item's outcome never affects another's.
pub async fn enrich_items(record: &mut OrderRecord, lookup: &dyn QuantityLookup) {
    info!("Enriching {} line items", record.items.len());

    for item in &mut record.items {
        let outcome = lookup.lookup(&item.name).await;
        debug!(item = %item.name, outcome = %outcome, "Lookup finished");
        item.exact_quantity = Some(outcome);
    }
}
