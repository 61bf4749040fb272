//! Export module for Unity Ledger
//!
//! Provides complete data export functionality in multiple formats:
//! - CSV: transactions, members and loans (spreadsheet-compatible)
//! - JSON: machine-readable full ledger export
//! - YAML: human-readable full ledger export

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_loans_csv, export_members_csv, export_transactions_csv};
pub use json::{export_full_json, read_json_export, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, read_yaml_export};
