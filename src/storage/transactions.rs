//! Transaction repository for JSON storage
//!
//! Manages loading and appending transactions in transactions.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::LedgerError;
use crate::models::{Category, MemberId, Transaction, TransactionId, TransactionType};

use super::file_io::{read_table, write_table};
use super::lock_error;

/// Serializable transaction table
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub(crate) struct TransactionData {
    pub(crate) transactions: Vec<Transaction>,
}

/// Optional criteria for listing transactions; unset fields match everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Earliest date, inclusive
    pub since: Option<NaiveDate>,
    /// Latest date, inclusive
    pub until: Option<NaiveDate>,
    pub member_id: Option<MemberId>,
    pub category: Option<Category>,
    pub transaction_type: Option<TransactionType>,
}

impl TransactionFilter {
    /// Filter for everything on or after `date`
    pub fn since(date: NaiveDate) -> Self {
        Self {
            since: Some(date),
            ..Self::default()
        }
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        self.since.map_or(true, |d| txn.date >= d)
            && self.until.map_or(true, |d| txn.date <= d)
            && self.member_id.map_or(true, |m| txn.member_id == m)
            && self.category.map_or(true, |c| txn.category == c)
            && self.transaction_type.map_or(true, |t| txn.transaction_type == t)
    }
}

#[derive(Default)]
struct TransactionTable {
    rows: Vec<Transaction>,
    by_id: HashMap<TransactionId, usize>,
    /// Index: member_id -> positions in `rows`
    by_member: HashMap<MemberId, Vec<usize>>,
}

impl TransactionTable {
    fn push(&mut self, txn: Transaction) {
        let position = self.rows.len();
        self.by_id.insert(txn.id, position);
        self.by_member.entry(txn.member_id).or_default().push(position);
        self.rows.push(txn);
    }

    fn pop(&mut self) {
        if let Some(txn) = self.rows.pop() {
            self.by_id.remove(&txn.id);
            if let Some(positions) = self.by_member.get_mut(&txn.member_id) {
                positions.pop();
            }
        }
    }
}

/// Repository for transaction persistence, in insertion order
pub struct TransactionRepository {
    path: PathBuf,
    table: RwLock<TransactionTable>,
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            table: RwLock::new(TransactionTable::default()),
        }
    }

    /// Load transactions from disk and build indexes
    ///
    /// Every record is checked against the category/type mapping; a stored
    /// record that disagrees with it fails the load.
    pub fn load(&self) -> Result<(), LedgerError> {
        let file_data: TransactionData = read_table(&self.path)?;

        let mut table = self.table.write().map_err(lock_error)?;
        *table = TransactionTable::default();

        for txn in file_data.transactions {
            txn.validate().map_err(|e| {
                LedgerError::Storage(format!(
                    "Invalid transaction {} in {}: {}",
                    txn.id,
                    self.path.display(),
                    e
                ))
            })?;
            if table.by_id.contains_key(&txn.id) {
                return Err(LedgerError::Storage(format!(
                    "Duplicate transaction id {} in {}",
                    txn.id,
                    self.path.display()
                )));
            }
            table.push(txn);
        }

        tracing::debug!(count = table.rows.len(), "loaded transactions");
        Ok(())
    }

    /// Append a transaction and persist the table
    ///
    /// A record that fails [`Transaction::validate`] is rejected before
    /// anything is written.
    pub fn insert(&self, txn: Transaction) -> Result<(), LedgerError> {
        txn.validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        let mut table = self.table.write().map_err(lock_error)?;

        if table.by_id.contains_key(&txn.id) {
            return Err(LedgerError::Storage(format!(
                "Transaction id {} already exists",
                txn.id
            )));
        }

        table.push(txn);

        let file_data = TransactionData {
            transactions: table.rows.clone(),
        };
        if let Err(e) = write_table(&self.path, &file_data) {
            table.pop();
            return Err(e);
        }

        Ok(())
    }

    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, LedgerError> {
        let table = self.table.read().map_err(lock_error)?;
        Ok(table.by_id.get(&id).map(|&i| table.rows[i].clone()))
    }

    /// All transactions in insertion order
    pub fn get_all(&self) -> Result<Vec<Transaction>, LedgerError> {
        let table = self.table.read().map_err(lock_error)?;
        Ok(table.rows.clone())
    }

    /// Transactions dated on or after `start`, in insertion order
    pub fn get_since(&self, start: NaiveDate) -> Result<Vec<Transaction>, LedgerError> {
        self.get_filtered(&TransactionFilter::since(start))
    }

    pub fn get_by_member(&self, member_id: MemberId) -> Result<Vec<Transaction>, LedgerError> {
        let table = self.table.read().map_err(lock_error)?;
        let positions = table
            .by_member
            .get(&member_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[]);
        Ok(positions.iter().map(|&i| table.rows[i].clone()).collect())
    }

    /// Transactions matching every set field of `filter`, in insertion order
    pub fn get_filtered(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>, LedgerError> {
        if let Some(member_id) = filter.member_id {
            let mut rows = self.get_by_member(member_id)?;
            rows.retain(|t| filter.matches(t));
            return Ok(rows);
        }

        let table = self.table.read().map_err(lock_error)?;
        Ok(table
            .rows
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect())
    }

    pub fn count(&self) -> Result<usize, LedgerError> {
        let table = self.table.read().map_err(lock_error)?;
        Ok(table.rows.len())
    }
}
