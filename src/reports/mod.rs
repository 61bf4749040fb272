//! Reports module for Unity Ledger
//!
//! The ledger summary is the single report: income, expense and balance over
//! a lookback period, with per-category and per-member breakdowns.

pub mod ledger_summary;

pub use ledger_summary::{CategoryTotal, LedgerSummary, MemberTotal};
