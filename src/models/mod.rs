//! Core data models for Unity Ledger
//!
//! Members, transactions and loans, plus the value types they are built
//! from: IDs, money, categories and report periods.

pub mod category;
pub mod ids;
pub mod loan;
pub mod member;
pub mod money;
pub mod period;
pub mod transaction;

pub use category::{Category, TransactionType};
pub use ids::{LoanId, MemberId, TransactionId};
pub use loan::{Loan, LoanValidationError, DEFAULT_LOAN_STATUS};
pub use member::Member;
pub use money::{Money, MoneyParseError};
pub use period::ReportPeriod;
pub use transaction::{Transaction, TransactionValidationError};
