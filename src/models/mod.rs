//! Core data models for the invoice helper
//!
//! Money amounts, the job type catalog, line items and the invoice being
//! assembled during a session.

pub mod invoice;
pub mod job_type;
pub mod line_item;
pub mod money;

pub use invoice::Invoice;
pub use job_type::{Catalog, JobType, PriceRange, RangeCheck};
pub use line_item::LineItem;
pub use money::{Money, MoneyParseError};
