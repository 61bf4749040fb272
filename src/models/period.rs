//! Report lookback periods
//!
//! A report covers a trailing window that starts `months * 30` days before
//! the report date and has no upper bound. Months are fixed 30-day blocks,
//! not calendar months, so "12 months" is 360 days.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::LedgerError;

/// Days counted per month of lookback
pub const DAYS_PER_PERIOD_MONTH: i64 = 30;

/// The supported report lookback periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ReportPeriod {
    OneMonth,
    ThreeMonths,
    FourMonths,
    SixMonths,
    TwelveMonths,
}

impl ReportPeriod {
    pub const ALL: [ReportPeriod; 5] = [
        ReportPeriod::OneMonth,
        ReportPeriod::ThreeMonths,
        ReportPeriod::FourMonths,
        ReportPeriod::SixMonths,
        ReportPeriod::TwelveMonths,
    ];

    /// Select a period by its month count
    ///
    /// Only 1, 3, 4, 6 and 12 are accepted; anything else is a configuration
    /// error and is never rounded to a neighbouring period.
    pub fn from_months(months: u32) -> Result<Self, LedgerError> {
        match months {
            1 => Ok(Self::OneMonth),
            3 => Ok(Self::ThreeMonths),
            4 => Ok(Self::FourMonths),
            6 => Ok(Self::SixMonths),
            12 => Ok(Self::TwelveMonths),
            other => Err(LedgerError::Config(format!(
                "Unsupported report period: {} months. Choose one of 1, 3, 4, 6, 12",
                other
            ))),
        }
    }

    pub const fn months(self) -> u32 {
        match self {
            Self::OneMonth => 1,
            Self::ThreeMonths => 3,
            Self::FourMonths => 4,
            Self::SixMonths => 6,
            Self::TwelveMonths => 12,
        }
    }

    /// Length of the lookback in days
    pub const fn days(self) -> i64 {
        self.months() as i64 * DAYS_PER_PERIOD_MONTH
    }

    /// First date (inclusive) of the window ending on `today`
    pub fn start_date(self, today: NaiveDate) -> NaiveDate {
        today - Duration::days(self.days())
    }

    /// Check if a date falls inside the window ending on `today`
    pub fn contains(self, date: NaiveDate, today: NaiveDate) -> bool {
        date >= self.start_date(today)
    }
}

impl TryFrom<u32> for ReportPeriod {
    type Error = LedgerError;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        Self::from_months(months)
    }
}

impl From<ReportPeriod> for u32 {
    fn from(period: ReportPeriod) -> Self {
        period.months()
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.months() {
            1 => write!(f, "1 month"),
            n => write!(f, "{} months", n),
        }
    }
}
