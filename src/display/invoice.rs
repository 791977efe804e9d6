//! Invoice display formatting
//!
//! Renders the job menu, per-item confirmations and the final invoice block.
//! Everything here returns plain strings; the session decides where they go.

use std::fmt::Write;

use chrono::NaiveDateTime;

use crate::models::{Catalog, Invoice, JobType, LineItem, Money};

/// Width of the label column on invoice item lines
const LABEL_WIDTH: usize = 12;

/// Width of the separator rules
const RULE_WIDTH: usize = 47;

/// Format used when a configured timestamp format cannot be rendered
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Options that affect how amounts and items are shown
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub currency_symbol: String,
    pub timestamp_format: String,
    pub flag_overrides: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            flag_overrides: false,
        }
    }
}

impl RenderOptions {
    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}

/// Format the job type menu, one numbered entry per line
pub fn format_menu(catalog: &Catalog, symbol: &str) -> String {
    let label_width = catalog.iter().map(|j| j.label.len()).max().unwrap_or(0);

    let mut output = String::new();
    for job in catalog.iter() {
        let _ = writeln!(
            output,
            "{}) {:<label_width$} ({})",
            job.id,
            job.label,
            job.range.describe(symbol),
            label_width = label_width,
        );
    }
    output
}

/// Confirmation line printed after an item is added
pub fn format_added(item: &LineItem, options: &RenderOptions) -> String {
    format!("Added: {} - {}", item.job_type.label, options.money(item.amount))
}

/// Warning shown when a price falls outside the job type's range
pub fn format_range_warning(job: &JobType, symbol: &str) -> String {
    format!(
        "⚠ Out of allowed range for {} ({}).",
        job.label,
        job.range.describe(symbol)
    )
}

/// Format a timestamp, falling back to the default format if the
/// configured one contains invalid specifiers
pub fn format_timestamp(time: &NaiveDateTime, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", time.format(format)).is_err() {
        out.clear();
        let _ = write!(out, "{}", time.format(DEFAULT_TIMESTAMP_FORMAT));
    }
    out
}

/// Format a single numbered item line
pub fn format_item_line(index: usize, item: &LineItem, options: &RenderOptions) -> String {
    let notes = if item.has_notes() {
        format!(" ({})", item.notes)
    } else {
        String::new()
    };
    let marker = if options.flag_overrides && item.overridden {
        " [override]"
    } else {
        ""
    };

    format!(
        "{}) {:<width$}{}  {}{}",
        index,
        item.job_type.label,
        notes,
        options.money(item.amount),
        marker,
        width = LABEL_WIDTH,
    )
}

/// Format the complete invoice block
///
/// The block starts with two blank lines so it stands apart from the
/// prompts above it when copied out of the terminal.
pub fn format_invoice(invoice: &Invoice, time: &NaiveDateTime, options: &RenderOptions) -> String {
    let rule = "-".repeat(RULE_WIDTH);

    let mut output = String::new();
    output.push_str("\n\n===== INVOICE (copy this into Google Docs) =====\n");
    let _ = writeln!(
        output,
        "Date/Time: {}",
        format_timestamp(time, &options.timestamp_format)
    );
    let _ = writeln!(output, "Customer:  {}", invoice.customer_display());
    let _ = writeln!(output, "Vehicle:   {}", invoice.vehicle_display());
    let _ = writeln!(output, "{}", rule);

    for (i, item) in invoice.items().iter().enumerate() {
        let _ = writeln!(output, "{}", format_item_line(i + 1, item, options));
    }

    let _ = writeln!(output, "{}", rule);
    let _ = writeln!(output, "TOTAL: {}", options.money(invoice.total()));
    let _ = writeln!(output, "{}", "=".repeat(RULE_WIDTH));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap()
    }

    fn item(catalog: &Catalog, id: u32, notes: &str, amount: &str) -> LineItem {
        LineItem::new(
            catalog.get(id).unwrap().clone(),
            notes,
            Money::parse(amount).unwrap(),
        )
    }

    #[test]
    fn test_menu_lists_ranges_and_placeholders() {
        let menu = format_menu(&Catalog::default(), "$");
        let lines: Vec<&str> = menu.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "1) Roadside    ($300 - $1000)");
        assert_eq!(lines[1], "2) Refuel      ($200 - $250)");
        assert_eq!(lines[3], "4) Cosmetic    (set range later)");
        assert_eq!(lines[5], "6) Performance (set range later)");
    }

    #[test]
    fn test_item_line() {
        let catalog = Catalog::default();
        let options = RenderOptions::default();

        assert_eq!(
            format_item_line(1, &item(&catalog, 1, "", "450"), &options),
            "1) Roadside      $450.00"
        );
        assert_eq!(
            format_item_line(2, &item(&catalog, 2, "2 jerry cans", "225"), &options),
            "2) Refuel       (2 jerry cans)  $225.00"
        );
    }

    #[test]
    fn test_override_marker_only_when_enabled() {
        let catalog = Catalog::default();
        let overridden = item(&catalog, 2, "", "500").with_override(true);

        let plain = format_item_line(1, &overridden, &RenderOptions::default());
        assert!(!plain.contains("[override]"));

        let flagged = RenderOptions {
            flag_overrides: true,
            ..RenderOptions::default()
        };
        assert!(format_item_line(1, &overridden, &flagged).ends_with("$500.00 [override]"));
    }

    #[test]
    fn test_invoice_block() {
        let catalog = Catalog::default();
        let mut invoice = Invoice::new("Alex", "");
        invoice.add_item(item(&catalog, 1, "", "$450")).unwrap();
        invoice.add_item(item(&catalog, 2, "2 jerry cans", "225")).unwrap();

        let output = format_invoice(&invoice, &sample_time(), &RenderOptions::default());
        let expected = "\n\n===== INVOICE (copy this into Google Docs) =====\n\
            Date/Time: 2026-10-18 14:05\n\
            Customer:  Alex\n\
            Vehicle:   -\n\
            -----------------------------------------------\n\
            1) Roadside      $450.00\n\
            2) Refuel       (2 jerry cans)  $225.00\n\
            -----------------------------------------------\n\
            TOTAL: $675.00\n\
            ===============================================\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_custom_currency_symbol() {
        let catalog = Catalog::default();
        let mut invoice = Invoice::new("Sam", "Kuruma");
        invoice.add_item(item(&catalog, 3, "", "120.5")).unwrap();

        let options = RenderOptions {
            currency_symbol: "€".into(),
            ..RenderOptions::default()
        };
        let output = format_invoice(&invoice, &sample_time(), &options);
        assert!(output.contains("TOTAL: €120.50\n"));
        assert!(output.contains("Vehicle:   Kuruma\n"));
    }

    #[test]
    fn test_range_warning() {
        let catalog = Catalog::default();
        assert_eq!(
            format_range_warning(catalog.get(2).unwrap(), "$"),
            "⚠ Out of allowed range for Refuel ($200 - $250)."
        );
    }

    #[test]
    fn test_timestamp_format() {
        assert_eq!(format_timestamp(&sample_time(), "%Y-%m-%d %H:%M"), "2026-10-18 14:05");
        assert_eq!(format_timestamp(&sample_time(), "%d/%m/%Y"), "18/10/2026");
        assert_eq!(format_timestamp(&sample_time(), "%Q"), "2026-10-18 14:05");
    }
}
