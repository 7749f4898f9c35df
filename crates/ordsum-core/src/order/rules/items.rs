//! Line-item extraction and consolidation.

use tracing::debug;

use super::patterns::ITEM_BLOCK;
use crate::models::order::LineItem;

/// Scan for item blocks and consolidate entries sharing (name, price).
///
/// A repeated (trimmed name, price string) key adds its quantity to the
/// existing entry; first-seen order is preserved. The price is kept as the
/// literal captured string, formatting intact.
pub fn extract_line_items(text: &str) -> Vec<LineItem> {
    let mut items: Vec<LineItem> = Vec::new();

    for caps in ITEM_BLOCK.captures_iter(text) {
        let quantity: u32 = match caps[1].parse() {
            Ok(q) if q > 0 => q,
            _ => continue,
        };
        let name = caps[2].trim().to_string();
        let unit_price = caps[3].to_string();

        match items
            .iter()
            .position(|i| i.name == name && i.unit_price == unit_price)
        {
            Some(idx) => items[idx].quantity += quantity,
            None => items.push(LineItem {
                name,
                unit_price,
                quantity,
                exact_quantity: None,
            }),
        }
    }

    debug!("Extracted {} consolidated line items", items.len());
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_item() {
        let items = extract_line_items("1 of: Blue Widget Condition: New$12.34");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Blue Widget");
        assert_eq!(items[0].unit_price, "12.34");
        assert_eq!(items[0].quantity, 1);
        assert!(items[0].exact_quantity.is_none());
    }

    #[test]
    fn test_same_name_and_price_accumulates() {
        let text = "2 of: Widget Condition: New$9.99\n3 of: Widget Condition: New$9.99";
        let items = extract_line_items(text);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 5);
    }

    #[test]
    fn test_same_name_different_price_stays_distinct() {
        let text = "2 of: Widget Condition: New$9.99\n3 of: Widget Condition: New$8.99";
        let items = extract_line_items(text);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].unit_price, "9.99");
        assert_eq!(items[1].unit_price, "8.99");
    }

    #[test]
    fn test_first_seen_order_preserved() {
        let text = "1 of: Beta Condition: New$2.00\n\
                    1 of: Alpha Condition: New$1.00\n\
                    4 of: Beta Condition: New$2.00";
        let items = extract_line_items(text);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Beta");
        assert_eq!(items[0].quantity, 5);
        assert_eq!(items[1].name, "Alpha");
    }

    #[test]
    fn test_name_spanning_lines_is_trimmed() {
        let text = "1 of: Stainless Steel\nWater Bottle Condition: New$19.99";
        let items = extract_line_items(text);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Stainless Steel\nWater Bottle");
    }

    #[test]
    fn test_no_items_in_unrelated_text() {
        assert!(extract_line_items("Order Placed: May 1, 2024").is_empty());
    }
}
