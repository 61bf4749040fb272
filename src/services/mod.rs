//! Service layer for Unity Ledger
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and cross-entity checks such as member references.

pub mod import;
pub mod loan;
pub mod member;
pub mod transaction;

pub use import::{ImportService, ImportSummary};
pub use loan::{CreateLoanInput, LoanService};
pub use member::MemberService;
pub use transaction::{CreateTransactionInput, TransactionService};
