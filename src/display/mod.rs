//! Display formatting for terminal output
//!
//! Formats the menu and the finished invoice as plain text meant to be
//! copied out of the terminal.

pub mod invoice;

pub use invoice::{
    format_added, format_invoice, format_item_line, format_menu, format_range_warning,
    format_timestamp, RenderOptions,
};
