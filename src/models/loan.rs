//! Loan model
//!
//! Loans are recorded for reference only. The rate is kept as entered and no
//! interest or repayment schedule is computed from it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{LoanId, MemberId};
use super::money::Money;

/// Status given to new loans when none is supplied
pub const DEFAULT_LOAN_STATUS: &str = "active";

/// A loan issued to a member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: LoanId,

    pub member_id: MemberId,

    pub principal: Money,

    /// Annual rate in percent, as entered
    #[serde(default)]
    pub rate: f64,

    pub date: NaiveDate,

    /// Free-text status
    #[serde(default = "default_status")]
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    pub created_at: DateTime<Utc>,
}

fn default_status() -> String {
    DEFAULT_LOAN_STATUS.to_string()
}

impl Loan {
    pub fn new(member_id: MemberId, principal: Money, rate: f64, date: NaiveDate) -> Self {
        Self {
            id: LoanId::new(),
            member_id,
            principal,
            rate,
            date,
            status: default_status(),
            note: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        self.note = if note.trim().is_empty() { None } else { Some(note) };
        self
    }

    pub fn validate(&self) -> Result<(), LoanValidationError> {
        if self.principal.is_negative() {
            return Err(LoanValidationError::NegativePrincipal(self.principal));
        }
        if !self.rate.is_finite() || self.rate < 0.0 {
            return Err(LoanValidationError::InvalidRate(self.rate));
        }
        Ok(())
    }
}

impl fmt::Display for Loan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} at {}% ({})",
            self.date.format("%Y-%m-%d"),
            self.principal,
            self.rate,
            self.status
        )
    }
}

/// Validation errors for loans
#[derive(Debug, Clone, PartialEq)]
pub enum LoanValidationError {
    NegativePrincipal(Money),
    InvalidRate(f64),
}

impl fmt::Display for LoanValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativePrincipal(amount) => {
                write!(f, "Loan principal cannot be negative: {}", amount)
            }
            Self::InvalidRate(rate) => write!(f, "Invalid loan rate: {}", rate),
        }
    }
}

impl std::error::Error for LoanValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
    }

    #[test]
    fn test_new_loan_defaults() {
        let loan = Loan::new(MemberId::new(), Money::from_units(100_000), 2.5, date());
        assert_eq!(loan.status, "active");
        assert!(loan.note.is_none());
        assert!(loan.validate().is_ok());
    }

    #[test]
    fn test_status_is_free_text() {
        let loan = Loan::new(MemberId::new(), Money::from_units(1), 0.0, date())
            .with_status("repaid in kind");
        assert_eq!(loan.status, "repaid in kind");
    }

    #[test]
    fn test_validation() {
        let negative = Loan::new(MemberId::new(), Money::from_units(-1), 1.0, date());
        assert!(matches!(
            negative.validate(),
            Err(LoanValidationError::NegativePrincipal(_))
        ));

        let bad_rate = Loan::new(MemberId::new(), Money::from_units(1), f64::NAN, date());
        assert!(matches!(
            bad_rate.validate(),
            Err(LoanValidationError::InvalidRate(_))
        ));
    }

    #[test]
    fn test_missing_status_defaults_on_load() {
        let json = format!(
            r#"{{"id":"{}","member_id":"{}","principal":100,"rate":1.5,"date":"2025-02-01","created_at":"2025-02-01T00:00:00Z"}}"#,
            uuid::Uuid::new_v4(),
            uuid::Uuid::new_v4()
        );
        let loan: Loan = serde_json::from_str(&json).unwrap();
        assert_eq!(loan.status, "active");
    }
}
