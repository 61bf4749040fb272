//! CSV Export functionality
//!
//! Exports transactions, members and loans to CSV format. Amounts are written
//! unrounded as plain decimals.

use std::collections::HashMap;
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::MemberId;
use crate::storage::Storage;

fn export_err(e: std::io::Error) -> LedgerError {
    LedgerError::Export(e.to_string())
}

fn member_names(storage: &Storage) -> LedgerResult<HashMap<MemberId, String>> {
    Ok(storage
        .members
        .get_all()?
        .into_iter()
        .map(|m| (m.id, m.name))
        .collect())
}

/// Export all transactions to CSV
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: &mut W) -> LedgerResult<()> {
    let names = member_names(storage)?;

    writeln!(writer, "ID,Date,Member ID,Member,Category,Type,Amount,Note").map_err(export_err)?;

    for txn in storage.transactions.get_all()? {
        let member_name = names.get(&txn.member_id).map(String::as_str).unwrap_or("");
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{}",
            txn.id.as_uuid(),
            txn.date.format("%Y-%m-%d"),
            txn.member_id.as_uuid(),
            escape_csv(member_name),
            txn.category,
            txn.transaction_type,
            txn.amount.to_decimal_string(),
            escape_csv(txn.note.as_deref().unwrap_or(""))
        )
        .map_err(export_err)?;
    }

    Ok(())
}

/// Export all members to CSV
pub fn export_members_csv<W: Write>(storage: &Storage, writer: &mut W) -> LedgerResult<()> {
    writeln!(writer, "ID,Name,Phone,Created").map_err(export_err)?;

    for member in storage.members.get_all()? {
        writeln!(
            writer,
            "{},{},{},{}",
            member.id.as_uuid(),
            escape_csv(&member.name),
            escape_csv(&member.phone),
            member.created_at.format("%Y-%m-%d")
        )
        .map_err(export_err)?;
    }

    Ok(())
}

/// Export all loans to CSV
pub fn export_loans_csv<W: Write>(storage: &Storage, writer: &mut W) -> LedgerResult<()> {
    let names = member_names(storage)?;

    writeln!(writer, "ID,Date,Member,Principal,Rate,Status,Note").map_err(export_err)?;

    for loan in storage.loans.get_all()? {
        let member_name = names.get(&loan.member_id).map(String::as_str).unwrap_or("");
        writeln!(
            writer,
            "{},{},{},{},{},{},{}",
            loan.id.as_uuid(),
            loan.date.format("%Y-%m-%d"),
            escape_csv(member_name),
            loan.principal.to_decimal_string(),
            loan.rate,
            escape_csv(&loan.status),
            escape_csv(loan.note.as_deref().unwrap_or(""))
        )
        .map_err(export_err)?;
    }

    Ok(())
}

/// Quote a CSV field when it contains a delimiter, quote or newline
pub(crate) fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use crate::models::{Category, Money};
    use crate::services::{CreateTransactionInput, MemberService, TransactionService};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_export_transactions_csv() {
        let (_temp_dir, storage) = create_test_storage();
        let aye = MemberService::new(&storage).create("Aye", "").unwrap();

        TransactionService::new(&storage)
            .create(
                CreateTransactionInput::new(
                    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
                    aye.id,
                    Category::Bereavement,
                    Money::from_minor(3_000_050),
                )
                .note("flowers, \"wreath\""),
            )
            .unwrap();

        let mut output = Vec::new();
        export_transactions_csv(&storage, &mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        let mut lines = csv_string.lines();
        assert_eq!(
            lines.next(),
            Some("ID,Date,Member ID,Member,Category,Type,Amount,Note")
        );
        let row = lines.next().unwrap();
        assert!(row.contains(",2025-01-15,"));
        assert!(row.contains(",Aye,bereavement,Expense,30000.50,"));
        assert!(row.ends_with("\"flowers, \"\"wreath\"\"\""));
    }

    #[test]
    fn test_export_members_csv() {
        let (_temp_dir, storage) = create_test_storage();
        MemberService::new(&storage).create("Aye", "09-111").unwrap();

        let mut output = Vec::new();
        export_members_csv(&storage, &mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        assert!(csv_string.starts_with("ID,Name,Phone,Created\n"));
        assert!(csv_string.contains(",Aye,09-111,"));
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
