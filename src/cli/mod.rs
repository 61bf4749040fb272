//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod loan;
pub mod member;
pub mod report;
pub mod transaction;

pub use export::{handle_check_command, handle_export_command, ExportArgs, ExportFormat};
pub use loan::{handle_loan_command, LoanCommands};
pub use member::{handle_member_command, MemberCommands};
pub use report::{handle_report_command, ReportArgs};
pub use transaction::{handle_transaction_command, TransactionCommands};

use std::collections::HashMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{MemberId, Money};
use crate::storage::Storage;

/// Parse a `YYYY-MM-DD` date argument, or use today's local date
pub(crate) fn parse_date_or_today(date: Option<&str>) -> LedgerResult<NaiveDate> {
    match date {
        Some(s) => parse_date(s),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

pub(crate) fn parse_date(s: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        LedgerError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })
}

pub(crate) fn parse_amount(s: &str) -> LedgerResult<Money> {
    Money::parse(s).map_err(|e| {
        LedgerError::Validation(format!(
            "Invalid amount: '{}'. Use a number like '5000' or '5,000.50'. {}",
            s, e
        ))
    })
}

/// Create an output file wrapped in a buffered writer
pub(crate) fn create_output(path: &Path) -> LedgerResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

pub(crate) fn member_names(storage: &Storage) -> LedgerResult<HashMap<MemberId, String>> {
    Ok(storage
        .members
        .get_all()?
        .into_iter()
        .map(|m| (m.id, m.name))
        .collect())
}
