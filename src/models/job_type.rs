//! Job type catalog
//!
//! Job types are the billable categories an operator can pick from the menu.
//! Each one may carry an allowed price range. Ranges are advisory: a price
//! outside the range is allowed, but only after the operator confirms it.

use crate::error::{InvoiceError, InvoiceResult};

use super::money::Money;

/// Allowed price range for a job type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceRange {
    /// No range known yet; any non-negative amount is accepted
    Unbounded,
    /// Inclusive range `[min, max]`
    Bounded { min: Money, max: Money },
}

/// Outcome of checking a price against a job type's range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeCheck {
    /// Price can be used as-is
    Accepted,
    /// Negative price on an unbounded job type; must be re-entered
    Negative,
    /// Price falls outside a bounded range; needs operator override
    OutOfRange { min: Money, max: Money },
}

impl PriceRange {
    /// Build a range from whole-unit bounds
    ///
    /// `(0, 0)` is the "no range yet" marker and yields `Unbounded`.
    pub fn new(min: i64, max: i64) -> InvoiceResult<Self> {
        let to_money = |dollars: i64| {
            Money::checked_from_dollars(dollars).ok_or_else(|| {
                InvoiceError::Validation(format!("Price bound is too large: {}", dollars))
            })
        };
        let (min, max) = (to_money(min)?, to_money(max)?);

        if min.is_zero() && max.is_zero() {
            return Ok(Self::Unbounded);
        }
        if min.is_negative() {
            return Err(InvoiceError::Validation(format!(
                "Minimum price cannot be negative: {}",
                min
            )));
        }
        if min > max {
            return Err(InvoiceError::Validation(format!(
                "Minimum price {} is greater than maximum {}",
                min, max
            )));
        }
        Ok(Self::Bounded { min, max })
    }

    /// Check an amount against this range
    pub fn check(&self, amount: Money) -> RangeCheck {
        match *self {
            Self::Unbounded if amount.is_negative() => RangeCheck::Negative,
            Self::Unbounded => RangeCheck::Accepted,
            Self::Bounded { min, max } if amount < min || amount > max => {
                RangeCheck::OutOfRange { min, max }
            }
            Self::Bounded { .. } => RangeCheck::Accepted,
        }
    }

    /// Render for the menu: "$300 - $1000" or "set range later"
    pub fn describe(&self, symbol: &str) -> String {
        match self {
            Self::Unbounded => "set range later".to_string(),
            Self::Bounded { min, max } => {
                format!("{} - {}", min.format_short(symbol), max.format_short(symbol))
            }
        }
    }
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobType {
    /// Menu number, starting at 1
    pub id: u32,
    pub label: String,
    pub range: PriceRange,
}

impl JobType {
    pub fn new(id: u32, label: impl Into<String>, range: PriceRange) -> Self {
        Self {
            id,
            label: label.into(),
            range,
        }
    }
}

/// The fixed, ordered set of job types offered in the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<JobType>,
}

/// Built-in job types as (label, min, max) in whole dollars
const DEFAULT_JOB_TYPES: &[(&str, i64, i64)] = &[
    ("Roadside", 300, 1000),
    ("Refuel", 200, 250),
    ("Flip", 100, 500),
    ("Cosmetic", 0, 0),
    ("Body Work", 0, 0),
    ("Performance", 0, 0),
];

impl Catalog {
    /// Look up a job type by its menu number
    pub fn get(&self, id: u32) -> Option<&JobType> {
        if id == 0 {
            return None;
        }
        self.entries.get(id as usize - 1)
    }

    /// Replace the range of the job type with the given label
    pub fn set_range(&mut self, label: &str, range: PriceRange) -> InvoiceResult<()> {
        let job = self
            .entries
            .iter_mut()
            .find(|j| j.label.eq_ignore_ascii_case(label.trim()))
            .ok_or_else(|| InvoiceError::UnknownJobType(label.to_string()))?;
        job.range = range;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &JobType> {
        self.entries.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let entries = DEFAULT_JOB_TYPES
            .iter()
            .enumerate()
            .map(|(i, (label, min, max))| {
                let range = if *min == 0 && *max == 0 {
                    PriceRange::Unbounded
                } else {
                    PriceRange::Bounded {
                        min: Money::from_dollars(*min),
                        max: Money::from_dollars(*max),
                    }
                };
                JobType::new(i as u32 + 1, *label, range)
            })
            .collect();
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars(d: i64) -> Money {
        Money::from_dollars(d)
    }

    #[test]
    fn test_zero_zero_is_unbounded() {
        assert_eq!(PriceRange::new(0, 0).unwrap(), PriceRange::Unbounded);
        assert!(matches!(
            PriceRange::new(200, 250).unwrap(),
            PriceRange::Bounded { .. }
        ));
    }

    #[test]
    fn test_invalid_ranges() {
        for (min, max) in [(500, 100), (-10, 100)] {
            assert!(matches!(
                PriceRange::new(min, max),
                Err(InvoiceError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_huge_bounds_are_rejected_not_wrapped() {
        for (min, max) in [(0, i64::MAX), (i64::MAX / 50, i64::MAX / 50), (i64::MIN, 0)] {
            assert!(
                matches!(PriceRange::new(min, max), Err(InvoiceError::Validation(_))),
                "bounds {min}..{max}"
            );
        }
        assert!(PriceRange::new(0, 92_233_720_368_547_758).is_ok());
    }

    #[test]
    fn test_bounded_check_is_inclusive() {
        let range = PriceRange::new(200, 250).unwrap();
        assert_eq!(range.check(dollars(200)), RangeCheck::Accepted);
        assert_eq!(range.check(dollars(225)), RangeCheck::Accepted);
        assert_eq!(range.check(dollars(250)), RangeCheck::Accepted);
        assert_eq!(
            range.check(Money::from_cents(25001)),
            RangeCheck::OutOfRange {
                min: dollars(200),
                max: dollars(250)
            }
        );
        assert!(matches!(
            range.check(Money::from_cents(19999)),
            RangeCheck::OutOfRange { .. }
        ));
        assert!(matches!(
            range.check(dollars(-5)),
            RangeCheck::OutOfRange { .. }
        ));
    }

    #[test]
    fn test_unbounded_check() {
        let range = PriceRange::Unbounded;
        assert_eq!(range.check(Money::zero()), RangeCheck::Accepted);
        assert_eq!(range.check(dollars(1_000_000)), RangeCheck::Accepted);
        assert_eq!(range.check(Money::from_cents(-1)), RangeCheck::Negative);
    }

    #[test]
    fn test_describe() {
        assert_eq!(PriceRange::new(300, 1000).unwrap().describe("$"), "$300 - $1000");
        assert_eq!(PriceRange::Unbounded.describe("$"), "set range later");
    }

    #[test]
    fn test_default_catalog() {
        let catalog = Catalog::default();
        assert_eq!(catalog.iter().count(), 6);
        assert_eq!(catalog.get(1).unwrap().label, "Roadside");
        assert_eq!(catalog.get(2).unwrap().range, PriceRange::new(200, 250).unwrap());
        assert_eq!(catalog.get(4).unwrap().range, PriceRange::Unbounded);
        assert_eq!(catalog.get(6).unwrap().label, "Performance");
        assert!(catalog.get(0).is_none());
        assert!(catalog.get(7).is_none());
    }

    #[test]
    fn test_set_range_by_label() {
        let mut catalog = Catalog::default();
        catalog
            .set_range("body work", PriceRange::new(400, 900).unwrap())
            .unwrap();
        assert_eq!(
            catalog.get(5).unwrap().range,
            PriceRange::new(400, 900).unwrap()
        );

        let err = catalog
            .set_range("Towing", PriceRange::Unbounded)
            .unwrap_err();
        assert!(matches!(err, InvoiceError::UnknownJobType(_)));
    }
}
