//! Unity Ledger - terminal ledger for community associations
//!
//! This library records members, their dues and donations, welfare payments
//! made on their behalf, and loans issued to them. The reporting query totals
//! income and expense over a lookback window of 1, 3, 4, 6 or 12 thirty-day
//! blocks.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (members, transactions, loans, money, periods)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `reports`: The ledger summary report
//! - `export`: JSON, YAML and CSV export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `unity` binary
//!
//! # Example
//!
//! ```rust,no_run
//! use unity_ledger::config::LedgerPaths;
//! use unity_ledger::models::ReportPeriod;
//! use unity_ledger::reports::LedgerSummary;
//! use unity_ledger::storage::Storage;
//!
//! # fn main() -> Result<(), unity_ledger::LedgerError> {
//! let storage = Storage::open(LedgerPaths::new()?)?;
//! let report = LedgerSummary::generate(&storage, ReportPeriod::from_months(3)?)?;
//! println!("balance: {}", report.balance);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
