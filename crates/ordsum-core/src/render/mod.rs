//! HTML rendering of parsed orders.

use crate::models::order::{Charges, LineItem, OrderRecord, UNKNOWN};

/// Render an order record as a self-contained HTML fragment.
///
/// Every field renders verbatim from the record (escaped); "unknown"
/// values are displayed literally rather than hidden. The exact-quantity
/// column appears only when enrichment ran.
pub fn render_order_html(record: &OrderRecord) -> String {
    let show_exact = record.items.iter().any(|item| item.exact_quantity.is_some());

    let mut output = String::new();

    output.push_str("<h1>Order Summary:</h1>\n");
    output.push_str(&format!(
        "<p><strong>Order Date:</strong> {}</p>\n",
        escape(&record.order_date)
    ));
    output.push_str(&format!(
        "<p><strong>Order Number:</strong> {}</p>\n",
        escape(&record.order_number)
    ));
    output.push_str(&format!(
        "<p><strong>Order Total:</strong> {}</p>\n",
        escape(&record.order_total)
    ));
    output.push_str(&format!(
        "<p><strong>Status:</strong> {}</p>\n",
        escape(&record.status.to_string())
    ));

    output.push_str("\n<h2>Items Ordered:</h2>\n");
    output.push_str(&render_items_table(&record.items, show_exact));

    output.push_str("\n<h3>Summary of Charges:</h3>\n<ul>\n");
    output.push_str(&render_charges(&record.charges));
    output.push_str("</ul>\n");

    output.push_str("\n<h3>Shipping Address:</h3>\n");
    let address = &record.shipping_address;
    for line in [&address.name, &address.line1, &address.line2, &address.country] {
        output.push_str(&format!("<p>{}</p>\n", escape(line)));
    }

    output.push_str("\n<h3>Payment Information:</h3>\n");
    let payment = &record.payment_information;
    output.push_str(&format!(
        "<p><strong>Payment Method:</strong> {}</p>\n",
        escape(&payment.method)
    ));
    output.push_str(&format!(
        "<p><strong>Billing Address:</strong> {}, {}, {}</p>\n",
        escape(&payment.billing.name),
        escape(&payment.billing.line1),
        escape(&payment.billing.country)
    ));

    output
}

fn render_items_table(items: &[LineItem], show_exact: bool) -> String {
    let mut table = String::from(
        "<table border=\"1\" style=\"width: 100%; border-collapse: collapse; text-align: left;\">\n<thead>\n<tr>",
    );
    table.push_str("<th>Quantity</th><th>Item Name</th><th>Price</th>");
    if show_exact {
        table.push_str("<th>Exact Quantity</th>");
    }
    table.push_str("</tr>\n</thead>\n<tbody>\n");

    for item in items {
        table.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>${}</td>",
            item.quantity,
            escape(&item.name),
            escape(&item.unit_price)
        ));
        if show_exact {
            let exact = item
                .exact_quantity
                .as_ref()
                .map(|outcome| outcome.to_string())
                .unwrap_or_else(|| UNKNOWN.to_string());
            table.push_str(&format!("<td>{}</td>", escape(&exact)));
        }
        table.push_str("</tr>\n");
    }

    table.push_str("</tbody>\n</table>\n");
    table
}

fn render_charges(charges: &Charges) -> String {
    charges
        .entries()
        .iter()
        .map(|(key, value)| {
            format!(
                "<li><strong>{}:</strong> {}</li>\n",
                charge_label(key),
                escape(value)
            )
        })
        .collect()
}

/// "total_before_tax" becomes "Total Before Tax".
fn charge_label(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Minimal escaping for text interpolated into the fragment.
fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::{OrderStatus, QuantityOutcome};
    use crate::order::{OrderParser, RuleOrderParser};

    fn sample_record() -> OrderRecord {
        let text = "\
Order Placed: January 5, 2024
Amazon.com order number: 111-2223334
Order Total: $45.67
Not Yet Shipped
1 of: Blue Widget Condition: New$12.34
";
        RuleOrderParser::new().parse(text).record
    }

    #[test]
    fn test_each_charge_key_rendered_once() {
        let html = render_order_html(&sample_record());

        for label in [
            "Subtotal",
            "Shipping",
            "Total Before Tax",
            "Estimated Tax",
            "Grand Total",
        ] {
            let needle = format!("<strong>{}:</strong>", label);
            assert_eq!(
                html.matches(&needle).count(),
                1,
                "expected exactly one {} entry",
                label
            );
        }
    }

    #[test]
    fn test_charge_label_title_case() {
        assert_eq!(charge_label("subtotal"), "Subtotal");
        assert_eq!(charge_label("total_before_tax"), "Total Before Tax");
        assert_eq!(charge_label("grand_total"), "Grand Total");
    }

    #[test]
    fn test_unknown_rendered_literally() {
        let record = RuleOrderParser::new().parse("").record;
        let html = render_order_html(&record);
        assert!(html.contains("<p><strong>Order Date:</strong> unknown</p>"));
        assert!(html.contains("<strong>Grand Total:</strong> unknown"));
    }

    #[test]
    fn test_exact_column_only_when_enriched() {
        let mut record = sample_record();
        let html = render_order_html(&record);
        assert!(!html.contains("Exact Quantity"));

        record.items[0].exact_quantity = Some(QuantityOutcome::Exact(24));
        let html = render_order_html(&record);
        assert!(html.contains("<th>Exact Quantity</th>"));
        assert!(html.contains("<td>24</td>"));
    }

    #[test]
    fn test_typed_outcome_rendered_as_text() {
        let mut record = sample_record();
        record.items[0].exact_quantity = Some(QuantityOutcome::StaleReference);
        let html = render_order_html(&record);
        assert!(html.contains("<td>stale reference</td>"));
    }

    #[test]
    fn test_item_row_contents() {
        let html = render_order_html(&sample_record());
        assert!(html.contains("<td>1</td><td>Blue Widget</td><td>$12.34</td>"));
    }

    #[test]
    fn test_status_rendered() {
        let record = sample_record();
        assert_eq!(record.status, OrderStatus::NotYetShipped);
        let html = render_order_html(&record);
        assert!(html.contains("<strong>Status:</strong> Not Yet Shipped"));
    }

    #[test]
    fn test_names_are_escaped() {
        let mut record = sample_record();
        record.items[0].name = "Salt & Pepper <Set>".to_string();
        let html = render_order_html(&record);
        assert!(html.contains("Salt &amp; Pepper &lt;Set&gt;"));
    }
}
