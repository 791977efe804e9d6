//! Invoice session state machine
//!
//! A session walks `CollectingHeader -> SelectingType -> EnteringNotes ->
//! EnteringPrice -> (ConfirmingRange) -> SelectingType ...` until the
//! operator picks `0`, then renders the invoice (or reports that nothing was
//! added) and stops in `Done`.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDateTime};

use crate::display::{
    format_added, format_invoice, format_menu, format_range_warning, RenderOptions,
};
use crate::error::InvoiceResult;
use crate::models::{Catalog, Invoice, JobType, LineItem, Money, RangeCheck};

use super::prompt::Prompter;

/// Where the session currently is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    CollectingHeader,
    SelectingType,
    EnteringNotes {
        job: JobType,
    },
    EnteringPrice {
        job: JobType,
        notes: String,
    },
    /// Price is outside the job's range; waiting for the operator's override
    ConfirmingRange {
        job: JobType,
        notes: String,
        amount: Money,
    },
    Rendering,
    Done,
}

/// One interactive invoice run
pub struct InvoiceSession<R, W> {
    prompter: Prompter<R, W>,
    catalog: Catalog,
    options: RenderOptions,
    invoice: Invoice,
    clock: fn() -> NaiveDateTime,
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl<R: BufRead, W: Write> InvoiceSession<R, W> {
    pub fn new(input: R, output: W, catalog: Catalog, options: RenderOptions) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            catalog,
            options,
            invoice: Invoice::default(),
            clock: local_now,
        }
    }

    /// Use a fixed clock for the invoice timestamp
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    /// Drive the session to completion and return the finished invoice
    pub fn run(mut self) -> InvoiceResult<Invoice> {
        let mut state = SessionState::CollectingHeader;
        while state != SessionState::Done {
            state = self.step(state)?;
        }

        tracing::info!(
            items = self.invoice.len(),
            total = %self.invoice.total(),
            "invoice session finished"
        );
        Ok(self.invoice)
    }

    /// Advance one state
    pub fn step(&mut self, state: SessionState) -> InvoiceResult<SessionState> {
        match state {
            SessionState::CollectingHeader => self.collect_header(),
            SessionState::SelectingType => self.select_type(),
            SessionState::EnteringNotes { job } => self.enter_notes(job),
            SessionState::EnteringPrice { job, notes } => self.enter_price(job, notes),
            SessionState::ConfirmingRange { job, notes, amount } => {
                self.confirm_range(job, notes, amount)
            }
            SessionState::Rendering => self.render(),
            SessionState::Done => Ok(SessionState::Done),
        }
    }

    fn collect_header(&mut self) -> InvoiceResult<SessionState> {
        self.prompter.say("=== HighLife Mechanic Invoice Helper ===")?;
        let customer = self.prompter.prompt_string("Customer name (or IGN): ")?;
        let vehicle = self.prompter.prompt_string("Vehicle (optional): ")?;

        self.invoice = Invoice::new(customer, vehicle);
        Ok(SessionState::SelectingType)
    }

    fn select_type(&mut self) -> InvoiceResult<SessionState> {
        self.prompter.say("")?;
        self.prompter.say("Add a line item:")?;
        self.prompter
            .write(&format_menu(&self.catalog, &self.options.currency_symbol))?;
        self.prompter.write("Choose (number), or 0 to finish: ")?;

        let choice = match self.prompter.read_int()? {
            Some(0) => return self.finish(),
            Some(choice) => choice,
            None => {
                tracing::debug!("input closed at menu, finishing");
                return self.finish();
            }
        };

        let job = u32::try_from(choice)
            .ok()
            .and_then(|id| self.catalog.get(id))
            .cloned();
        match job {
            Some(job) => Ok(SessionState::EnteringNotes { job }),
            None => {
                tracing::debug!(choice, "menu choice not in catalog");
                self.prompter.say("Invalid choice.")?;
                Ok(SessionState::SelectingType)
            }
        }
    }

    fn enter_notes(&mut self, job: JobType) -> InvoiceResult<SessionState> {
        let notes = self
            .prompter
            .prompt_string("Notes (optional, e.g., 'Highway callout', '2 jerry cans'): ")?;
        Ok(SessionState::EnteringPrice { job, notes })
    }

    fn enter_price(&mut self, job: JobType, notes: String) -> InvoiceResult<SessionState> {
        let symbol = self.options.currency_symbol.clone();
        self.prompter
            .write(&format!("Enter price for {} (numbers only): {}", job.label, symbol))?;

        let Some(amount) = self.prompter.read_money(&symbol)? else {
            tracing::debug!(job = %job.label, "input closed during price entry, item dropped");
            return self.finish();
        };

        match job.range.check(amount) {
            RangeCheck::Accepted => self.add_item(job, notes, amount, false),
            RangeCheck::Negative => {
                self.prompter.say("Price can't be negative.")?;
                Ok(SessionState::EnteringPrice { job, notes })
            }
            RangeCheck::OutOfRange { .. } => {
                tracing::debug!(job = %job.label, amount = %amount, "price outside allowed range");
                self.prompter.say(&format_range_warning(&job, &symbol))?;
                Ok(SessionState::ConfirmingRange { job, notes, amount })
            }
        }
    }

    fn confirm_range(
        &mut self,
        job: JobType,
        notes: String,
        amount: Money,
    ) -> InvoiceResult<SessionState> {
        if self
            .prompter
            .confirm("Type 'y' to accept anyway, or 'n' to re-enter: ")?
        {
            tracing::info!(job = %job.label, amount = %amount, "out-of-range price accepted");
            self.add_item(job, notes, amount, true)
        } else {
            Ok(SessionState::EnteringPrice { job, notes })
        }
    }

    fn add_item(
        &mut self,
        job: JobType,
        notes: String,
        amount: Money,
        overridden: bool,
    ) -> InvoiceResult<SessionState> {
        if !self.invoice.can_add(amount) {
            tracing::warn!(job = %job.label, amount = %amount, "price would overflow invoice total");
            self.prompter
                .say("That price would push the invoice total past what can be recorded.")?;
            return Ok(SessionState::EnteringPrice { job, notes });
        }

        let item = LineItem::new(job, notes, amount).with_override(overridden);
        let added = format_added(&item, &self.options);
        tracing::debug!(job = %item.job_type.label, amount = %item.amount, "line item added");
        self.invoice.add_item(item)?;
        self.prompter.say(&added)?;
        Ok(SessionState::SelectingType)
    }

    fn finish(&mut self) -> InvoiceResult<SessionState> {
        if self.invoice.is_empty() {
            self.prompter.say("")?;
            self.prompter.say("No items added. Exiting.")?;
            Ok(SessionState::Done)
        } else {
            Ok(SessionState::Rendering)
        }
    }

    fn render(&mut self) -> InvoiceResult<SessionState> {
        let now = (self.clock)();
        self.prompter
            .write(&format_invoice(&self.invoice, &now, &self.options))?;
        Ok(SessionState::Done)
    }
}
