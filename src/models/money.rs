//! Money type for ledger amounts
//!
//! Amounts are stored as an integer count of hundredths of the association's
//! single currency unit, so sums and differences are exact. Rounding to whole
//! units only happens when an amount is rendered for display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Number of minor units in one whole unit
const MINOR_PER_UNIT: i64 = 100;

/// A monetary amount in hundredths of the implicit currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create an amount from hundredths
    ///
    /// # Examples
    /// ```
    /// use unity_ledger::models::Money;
    /// let fee = Money::from_minor(500_050); // 5000.50
    /// assert_eq!(fee.units(), 5000);
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create an amount from whole units
    pub const fn from_units(units: i64) -> Self {
        Self(units * MINOR_PER_UNIT)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// The amount in hundredths
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Whole units, truncated toward zero
    pub const fn units(&self) -> i64 {
        self.0 / MINOR_PER_UNIT
    }

    /// The hundredths part (0-99)
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_UNIT).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Whole units rounded to nearest, ties to even
    pub fn rounded_units(&self) -> i64 {
        let units = self.0.div_euclid(MINOR_PER_UNIT);
        let rem = self.0.rem_euclid(MINOR_PER_UNIT);
        let half = MINOR_PER_UNIT / 2;
        if rem > half || (rem == half && units % 2 != 0) {
            units + 1
        } else {
            units
        }
    }

    /// Parse an amount from user input
    ///
    /// Accepts "5000", "5,000", "5000.5", "5000.50" and a leading '-'.
    /// More than two fractional digits is rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());

        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let body: String = body.chars().filter(|c| *c != ',').collect();

        let (whole, frac) = match body.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (body.as_str(), ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        if frac.len() > 2 {
            return Err(invalid());
        }

        let whole_units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let minor: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        let total = whole_units
            .checked_mul(MINOR_PER_UNIT)
            .and_then(|v| v.checked_add(minor))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Display form rounded to whole units with thousands separators
    ///
    /// This is the report convention; it never alters the stored value.
    pub fn format_whole(&self) -> String {
        let rounded = self.rounded_units();
        let grouped = group_thousands(rounded.unsigned_abs());
        if rounded < 0 {
            format!("-{}", grouped)
        } else {
            grouped
        }
    }

    /// Plain decimal form for machine-readable exports, e.g. "5000.50"
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.units().abs(), self.minor_part())
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        f.pad(&format!(
            "{}{}.{:02}",
            sign,
            group_thousands(self.units().unsigned_abs()),
            self.minor_part()
        ))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
