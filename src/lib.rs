//! Mechanic invoice helper - interactive terminal invoice builder
//!
//! Collects a customer, an optional vehicle and a list of priced jobs from a
//! small fixed catalog, checks each price against the job's allowed range,
//! and prints an invoice ready to paste into a document.
//!
//! # Architecture
//!
//! - `config`: Path resolution and optional settings
//! - `error`: Custom error types
//! - `models`: Money, job catalog, line items and the invoice
//! - `session`: The interactive prompt loop
//! - `display`: Text formatting for the menu and invoice
//! - `logging`: Diagnostic tracing setup
//!
//! # Example
//!
//! ```rust,no_run
//! use mechanic_invoice::config::{InvoicePaths, Settings};
//! use mechanic_invoice::session::InvoiceSession;
//!
//! # fn main() -> Result<(), mechanic_invoice::InvoiceError> {
//! let paths = InvoicePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let stdin = std::io::stdin();
//! let session = InvoiceSession::new(
//!     stdin.lock(),
//!     std::io::stdout(),
//!     settings.catalog()?,
//!     settings.render_options(),
//! );
//! let invoice = session.run()?;
//! println!("{} items", invoice.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod session;

pub use error::{InvoiceError, InvoiceResult};
