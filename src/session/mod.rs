//! Interactive invoice session
//!
//! Reads the header, loops over the job menu collecting priced line items,
//! and prints the finished invoice.

pub mod flow;
pub mod prompt;

pub use flow::{InvoiceSession, SessionState};
pub use prompt::Prompter;
