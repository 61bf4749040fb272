//! Loan repository for JSON storage

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::LedgerError;
use crate::models::{Loan, LoanId, MemberId};

use super::file_io::{read_table, write_table};
use super::lock_error;

/// Serializable loan table
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub(crate) struct LoanData {
    pub(crate) loans: Vec<Loan>,
}

/// Repository for loan persistence, in insertion order
pub struct LoanRepository {
    path: PathBuf,
    rows: RwLock<Vec<Loan>>,
}

impl LoanRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            rows: RwLock::new(Vec::new()),
        }
    }

    pub fn load(&self) -> Result<(), LedgerError> {
        let file_data: LoanData = read_table(&self.path)?;

        let mut rows = self.rows.write().map_err(lock_error)?;
        *rows = file_data.loans;

        tracing::debug!(count = rows.len(), "loaded loans");
        Ok(())
    }

    /// Append a loan and persist the table
    pub fn insert(&self, loan: Loan) -> Result<(), LedgerError> {
        loan.validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        let mut rows = self.rows.write().map_err(lock_error)?;

        if rows.iter().any(|l| l.id == loan.id) {
            return Err(LedgerError::Storage(format!(
                "Loan id {} already exists",
                loan.id
            )));
        }

        rows.push(loan);

        let file_data = LoanData {
            loans: rows.clone(),
        };
        if let Err(e) = write_table(&self.path, &file_data) {
            rows.pop();
            return Err(e);
        }

        Ok(())
    }

    pub fn get(&self, id: LoanId) -> Result<Option<Loan>, LedgerError> {
        let rows = self.rows.read().map_err(lock_error)?;
        Ok(rows.iter().find(|l| l.id == id).cloned())
    }

    pub fn get_all(&self) -> Result<Vec<Loan>, LedgerError> {
        let rows = self.rows.read().map_err(lock_error)?;
        Ok(rows.clone())
    }

    pub fn get_by_member(&self, member_id: MemberId) -> Result<Vec<Loan>, LedgerError> {
        let rows = self.rows.read().map_err(lock_error)?;
        Ok(rows
            .iter()
            .filter(|l| l.member_id == member_id)
            .cloned()
            .collect())
    }

    pub fn count(&self) -> Result<usize, LedgerError> {
        let rows = self.rows.read().map_err(lock_error)?;
        Ok(rows.len())
    }
}
