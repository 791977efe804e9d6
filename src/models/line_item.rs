//! Line items
//!
//! One billed unit of work on an invoice.

use super::job_type::JobType;
use super::money::Money;

/// A single billed job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub job_type: JobType,
    /// Free-text notes, empty when none were given
    pub notes: String,
    pub amount: Money,
    /// The operator accepted this amount outside the job type's range
    pub overridden: bool,
}

impl LineItem {
    pub fn new(job_type: JobType, notes: impl Into<String>, amount: Money) -> Self {
        Self {
            job_type,
            notes: notes.into().trim().to_string(),
            amount,
            overridden: false,
        }
    }

    /// Mark the amount as an accepted out-of-range override
    pub fn with_override(mut self, overridden: bool) -> Self {
        self.overridden = overridden;
        self
    }

    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }
}
