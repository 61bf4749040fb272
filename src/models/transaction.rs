//! Transaction model
//!
//! A transaction records money received from or paid out on behalf of a
//! member. Its type is derived from its category when it is built and is
//! persisted alongside it; [`Transaction::validate`] checks the two agree.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{Category, TransactionType};
use super::ids::{MemberId, TransactionId};
use super::money::Money;

/// A ledger transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    /// Transaction date, stored as `YYYY-MM-DD`
    pub date: NaiveDate,

    /// The member this transaction is recorded against
    pub member_id: MemberId,

    pub category: Category,

    /// Income or expense, always `category.transaction_type()`
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    /// Non-negative amount
    pub amount: Money,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction, deriving its type from the category
    pub fn new(date: NaiveDate, member_id: MemberId, category: Category, amount: Money) -> Self {
        Self {
            id: TransactionId::new(),
            date,
            member_id,
            category,
            transaction_type: category.transaction_type(),
            amount,
            note: None,
            created_at: Utc::now(),
        }
    }

    /// Attach a note; blank notes are dropped
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        self.note = if note.trim().is_empty() { None } else { Some(note) };
        self
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    /// Validate the transaction's invariants
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }

        let expected = self.category.transaction_type();
        if self.transaction_type != expected {
            return Err(TransactionValidationError::TypeMismatch {
                category: self.category,
                stored: self.transaction_type,
                expected,
            });
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.transaction_type,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
    TypeMismatch {
        category: Category,
        stored: TransactionType,
        expected: TransactionType,
    },
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Transaction amount cannot be negative: {}", amount)
            }
            Self::TypeMismatch {
                category,
                stored,
                expected,
            } => write!(
                f,
                "Category '{}' must be recorded as {}, found {}",
                category, expected, stored
            ),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_type_derived_from_category() {
        let member = MemberId::new();
        for category in Category::ALL {
            let txn = Transaction::new(today(), member, category, Money::from_units(100));
            assert_eq!(txn.transaction_type, category.transaction_type());
            assert!(txn.validate().is_ok());
        }
    }

    #[test]
    fn test_income_expense_flags() {
        let member = MemberId::new();
        let dues = Transaction::new(today(), member, Category::Dues, Money::from_units(5000));
        assert!(dues.is_income());
        assert!(!dues.is_expense());

        let health = Transaction::new(today(), member, Category::Health, Money::from_units(2000));
        assert!(health.is_expense());
    }

    #[test]
    fn test_negative_amount_invalid() {
        let txn = Transaction::new(today(), MemberId::new(), Category::Dues, Money::from_units(-1));
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::NegativeAmount(_))
        ));
    }

    #[test]
    fn test_type_mismatch_invalid() {
        let mut txn =
            Transaction::new(today(), MemberId::new(), Category::Health, Money::from_units(10));
        txn.transaction_type = TransactionType::Income;
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_blank_note_dropped() {
        let txn = Transaction::new(today(), MemberId::new(), Category::Donation, Money::zero())
            .with_note("   ");
        assert!(txn.note.is_none());

        let txn = txn.with_note("Thingyan donation");
        assert_eq!(txn.note.as_deref(), Some("Thingyan donation"));
    }

    #[test]
    fn test_serialized_layout() {
        let txn = Transaction::new(today(), MemberId::new(), Category::Dues, Money::from_units(50));
        let value = serde_json::to_value(&txn).unwrap();
        assert_eq!(value["date"], "2025-01-15");
        assert_eq!(value["category"], "dues");
        assert_eq!(value["type"], "Income");
        assert_eq!(value["amount"], 5000);
        assert!(value.get("note").is_none());
    }
}
