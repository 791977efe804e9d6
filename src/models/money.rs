//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so every amount carries exactly
//! two fractional digits. Parsing goes through `rust_decimal` so that input
//! with more precision is rounded half-up instead of being truncated.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Fractional digits kept before rounding to cents
///
/// Digits past the third cannot change a half-up rounding to two places.
const KEPT_FRACTION_DIGITS: usize = 3;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use mechanic_invoice::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    ///
    /// Only for known-small constants; use `checked_from_dollars` for
    /// values read from configuration.
    pub const fn from_dollars(dollars: i64) -> Self {
        Self(dollars * 100)
    }

    /// Create a Money amount from whole units, `None` if it doesn't fit
    pub fn checked_from_dollars(dollars: i64) -> Option<Self> {
        dollars.checked_mul(100).map(Self)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add two amounts, `None` on overflow
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Parse a money amount typed by the operator
    ///
    /// Any `$` characters are stripped, the rest must be a plain base-10
    /// decimal: optional sign, digits, optional fraction. No separators or
    /// exponents. Extra precision is rounded half-up (midpoint away from
    /// zero) to two fractional digits: "10.005" becomes $10.01.
    ///
    /// Accepts: "250", "250.00", "$250", "-5", "$-5", "0.5", ".5"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        Self::parse_with_symbol(s, "$")
    }

    /// Parse a money amount, additionally stripping a custom currency symbol
    pub fn parse_with_symbol(s: &str, symbol: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let mut cleaned = trimmed.replace('$', "");
        if !symbol.is_empty() {
            cleaned = cleaned.replace(symbol, "");
        }

        let literal = normalize_literal(cleaned.trim())
            .ok_or_else(|| MoneyParseError::InvalidFormat(trimmed.to_string()))?;

        let cents = Decimal::from_str_exact(&literal)
            .ok()
            .map(|value| value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|rounded| rounded.checked_mul(Decimal::from(100)))
            .and_then(|c| c.to_i64())
            .ok_or_else(|| MoneyParseError::OutOfRange(trimmed.to_string()))?;

        Ok(Self(cents))
    }

    /// Format with a currency symbol, always with two fractional digits
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }

    /// Format without the fractional part when it is zero ("$300", "$12.50")
    ///
    /// Used for catalog price ranges, which are configured in whole units.
    pub fn format_short(&self, symbol: &str) -> String {
        if self.cents_part() == 0 {
            let sign = if self.is_negative() { "-" } else { "" };
            format!("{}{}{}", sign, symbol, self.dollars().abs())
        } else {
            self.format_with_symbol(symbol)
        }
    }
}

/// Check a decimal literal and rewrite it as `[-]int.frac`
///
/// Leading zeros are dropped from the integer part and the fraction is cut
/// to `KEPT_FRACTION_DIGITS`, so the result never exceeds what `Decimal`
/// can hold exactly unless the integer part itself is too large.
fn normalize_literal(s: &str) -> Option<String> {
    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }

    let int_part = match int_part.trim_start_matches('0') {
        "" => "0",
        digits => digits,
    };
    let frac_part = &frac_part[..frac_part.len().min(KEPT_FRACTION_DIGITS)];

    Some(format!(
        "{}{}.{}",
        if negative { "-" } else { "" },
        int_part,
        if frac_part.is_empty() { "0" } else { frac_part }
    ))
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    /// Not a base-10 decimal number
    InvalidFormat(String),
    /// A number, but too large to hold as cents
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
