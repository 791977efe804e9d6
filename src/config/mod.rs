//! Configuration module for the invoice helper
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Optional user settings (currency, timestamp format, price ranges)

pub mod paths;
pub mod settings;

pub use paths::InvoicePaths;
pub use settings::{RangeSetting, Settings};
