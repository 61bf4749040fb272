//! Storage layer for Unity Ledger
//!
//! Each table (members, transactions, loans) lives in its own JSON file and
//! is guarded by its own lock. Tables are append-only: every insert rewrites
//! the table file atomically before returning.

pub mod file_io;
pub mod init;
pub mod loans;
pub mod members;
pub mod transactions;

pub use file_io::{read_table, write_table};
pub use init::initialize_storage;
pub use loans::LoanRepository;
pub use members::MemberRepository;
pub use transactions::{TransactionFilter, TransactionRepository};

use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;

/// Map a poisoned lock into a storage error
pub(crate) fn lock_error<E: std::fmt::Display>(e: E) -> LedgerError {
    LedgerError::Storage(format!("Failed to acquire table lock: {}", e))
}

/// Handle to an opened ledger, passed explicitly to services and reports
pub struct Storage {
    paths: LedgerPaths,
    pub members: MemberRepository,
    pub transactions: TransactionRepository,
    pub loans: LoanRepository,
}

impl Storage {
    /// Create a storage handle without touching the table files
    pub fn new(paths: LedgerPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        Ok(Self {
            members: MemberRepository::new(paths.members_file()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            loans: LoanRepository::new(paths.loans_file()),
            paths,
        })
    }

    /// Initialize any missing tables, then load everything
    pub fn open(paths: LedgerPaths) -> Result<Self, LedgerError> {
        initialize_storage(&paths)?;
        let storage = Self::new(paths)?;
        storage.load_all()?;
        Ok(storage)
    }

    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// Load all tables from disk
    pub fn load_all(&self) -> Result<(), LedgerError> {
        self.members.load()?;
        self.transactions.load()?;
        self.loans.load()?;
        Ok(())
    }
}
