//! Storage initialization
//!
//! Creates the data directory and the three empty tables on first run.
//! Running it again never touches tables that already exist.

use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;

use super::file_io::create_table_if_absent;
use super::loans::LoanData;
use super::members::MemberData;
use super::transactions::TransactionData;

/// Initialize storage; safe to call any number of times
pub fn initialize_storage(paths: &LedgerPaths) -> Result<(), LedgerError> {
    paths.ensure_directories()?;

    let mut created = Vec::new();
    if create_table_if_absent(paths.members_file(), &MemberData::default())? {
        created.push("members");
    }
    if create_table_if_absent(paths.transactions_file(), &TransactionData::default())? {
        created.push("transactions");
    }
    if create_table_if_absent(paths.loans_file(), &LoanData::default())? {
        created.push("loans");
    }

    if !created.is_empty() {
        tracing::info!(tables = ?created, "created ledger tables");
    }
    Ok(())
}

/// Check if any table file is missing
pub fn needs_initialization(paths: &LedgerPaths) -> bool {
    !(paths.members_file().exists()
        && paths.transactions_file().exists()
        && paths.loans_file().exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Member;
    use crate::storage::file_io::{read_table, write_table};
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(needs_initialization(&paths));
        initialize_storage(&paths).unwrap();
        assert!(!needs_initialization(&paths));

        let members: MemberData = read_table(paths.members_file()).unwrap();
        assert!(members.members.is_empty());
    }

    #[test]
    fn test_second_init_keeps_data() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        initialize_storage(&paths).unwrap();

        let data = MemberData {
            members: vec![Member::new("Aye", "")],
        };
        write_table(paths.members_file(), &data).unwrap();

        initialize_storage(&paths).unwrap();
        initialize_storage(&paths).unwrap();

        let members: MemberData = read_table(paths.members_file()).unwrap();
        assert_eq!(members.members.len(), 1);
        assert_eq!(members.members[0].name, "Aye");
    }

    #[test]
    fn test_init_fills_in_missing_table_only() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        initialize_storage(&paths).unwrap();

        std::fs::remove_file(paths.loans_file()).unwrap();
        assert!(needs_initialization(&paths));

        initialize_storage(&paths).unwrap();
        assert!(paths.loans_file().exists());
    }
}
