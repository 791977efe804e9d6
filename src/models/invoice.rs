//! Invoice being built during a session
//!
//! Holds the header fields and the ordered list of line items. Items are
//! kept in the order they were added and are never merged or deduplicated.

use crate::error::{InvoiceError, InvoiceResult};

use super::line_item::LineItem;
use super::money::Money;

/// Placeholder shown for blank header fields
pub const BLANK_FIELD: &str = "-";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invoice {
    pub customer: String,
    pub vehicle: String,
    items: Vec<LineItem>,
    /// Running sum of item amounts, kept in range by `add_item`
    total: Money,
}

impl Invoice {
    pub fn new(customer: impl Into<String>, vehicle: impl Into<String>) -> Self {
        Self {
            customer: customer.into().trim().to_string(),
            vehicle: vehicle.into().trim().to_string(),
            items: Vec::new(),
            total: Money::zero(),
        }
    }

    /// Check whether an amount can be added without overflowing the total
    pub fn can_add(&self, amount: Money) -> bool {
        self.total.checked_add(amount).is_some()
    }

    /// Append a line item
    ///
    /// Fails without changing the invoice if the total would overflow.
    pub fn add_item(&mut self, item: LineItem) -> InvoiceResult<()> {
        self.total = self.total.checked_add(item.amount).ok_or_else(|| {
            InvoiceError::Validation(format!(
                "Adding {} would exceed the largest invoice total",
                item.amount
            ))
        })?;
        self.items.push(item);
        Ok(())
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Exact sum of all item amounts
    pub fn total(&self) -> Money {
        self.total
    }

    /// Customer name for display, `-` when blank
    pub fn customer_display(&self) -> &str {
        display_or_blank(&self.customer)
    }

    /// Vehicle for display, `-` when blank
    pub fn vehicle_display(&self) -> &str {
        display_or_blank(&self.vehicle)
    }
}

fn display_or_blank(value: &str) -> &str {
    if value.trim().is_empty() {
        BLANK_FIELD
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Catalog;

    #[test]
    fn test_blank_fields_show_placeholder() {
        let invoice = Invoice::new("  ", "");
        assert_eq!(invoice.customer_display(), "-");
        assert_eq!(invoice.vehicle_display(), "-");

        let invoice = Invoice::new(" Alex ", "Sultan RS");
        assert_eq!(invoice.customer_display(), "Alex");
        assert_eq!(invoice.vehicle_display(), "Sultan RS");
    }

    #[test]
    fn test_items_keep_insertion_order_and_duplicates() {
        let catalog = Catalog::default();
        let refuel = catalog.get(2).unwrap().clone();
        let roadside = catalog.get(1).unwrap().clone();

        let mut invoice = Invoice::new("Sam", "");
        invoice.add_item(LineItem::new(refuel.clone(), "", Money::from_dollars(225))).unwrap();
        invoice.add_item(LineItem::new(roadside, "", Money::from_dollars(450))).unwrap();
        invoice.add_item(LineItem::new(refuel, "", Money::from_dollars(200))).unwrap();

        let labels: Vec<&str> = invoice.items().iter().map(|i| i.job_type.label.as_str()).collect();
        assert_eq!(labels, vec!["Refuel", "Roadside", "Refuel"]);
        assert_eq!(invoice.len(), 3);
    }

    #[test]
    fn test_total_is_exact_sum() {
        let catalog = Catalog::default();
        let cosmetic = catalog.get(4).unwrap().clone();

        let mut invoice = Invoice::new("Alex", "");
        assert!(invoice.is_empty());
        assert_eq!(invoice.total(), Money::zero());

        for input in ["0.10", "0.20", "10.005"] {
            invoice
                .add_item(LineItem::new(cosmetic.clone(), "", Money::parse(input).unwrap()))
                .unwrap();
        }
        assert_eq!(invoice.total().to_string(), "$10.31");
    }

    #[test]
    fn test_total_overflow_is_rejected() {
        let catalog = Catalog::default();
        let cosmetic = catalog.get(4).unwrap().clone();
        let big = Money::parse("90000000000000000").unwrap();

        let mut invoice = Invoice::new("A", "");
        invoice.add_item(LineItem::new(cosmetic.clone(), "", big)).unwrap();
        assert!(!invoice.can_add(big));
        assert!(invoice.can_add(Money::parse("2000000000000000").unwrap()));

        let err = invoice
            .add_item(LineItem::new(cosmetic, "", big))
            .unwrap_err();
        assert!(matches!(err, InvoiceError::Validation(_)));
        assert_eq!(invoice.len(), 1);
        assert_eq!(invoice.total(), big);
    }
}
