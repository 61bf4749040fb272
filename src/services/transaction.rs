//! Transaction service
//!
//! Records dues, donations and welfare payments. The caller supplies a
//! category; the income/expense type is always derived from it here.

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, MemberId, Money, Transaction, TransactionId};
use crate::storage::{Storage, TransactionFilter};

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Input for recording a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub date: NaiveDate,
    pub member_id: MemberId,
    pub category: Category,
    pub amount: Money,
    pub note: Option<String>,
}

impl CreateTransactionInput {
    pub fn new(date: NaiveDate, member_id: MemberId, category: Category, amount: Money) -> Self {
        Self {
            date,
            member_id,
            category,
            amount,
            note: None,
        }
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction
    ///
    /// Fails with a reference error if the member does not exist, and with a
    /// validation error if the amount is negative. Nothing is written in
    /// either case.
    pub fn create(&self, input: CreateTransactionInput) -> LedgerResult<Transaction> {
        if !self.storage.members.exists(input.member_id)? {
            return Err(LedgerError::member_not_found(input.member_id.to_string()));
        }

        let mut txn = Transaction::new(input.date, input.member_id, input.category, input.amount);
        if let Some(note) = input.note {
            txn = txn.with_note(note);
        }

        txn.validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.storage.transactions.insert(txn.clone())?;

        tracing::info!(
            transaction_id = %txn.id,
            member_id = %txn.member_id,
            category = %txn.category,
            kind = %txn.transaction_type,
            amount = %txn.amount,
            "transaction recorded"
        );
        Ok(txn)
    }

    pub fn get(&self, id: TransactionId) -> LedgerResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// Find a transaction by its full or short ID
    pub fn find(&self, identifier: &str) -> LedgerResult<Option<Transaction>> {
        Ok(self
            .storage
            .transactions
            .get_all()?
            .into_iter()
            .find(|t| t.id.matches(identifier)))
    }

    /// List transactions matching a filter, in insertion order
    pub fn list(&self, filter: &TransactionFilter) -> LedgerResult<Vec<Transaction>> {
        self.storage.transactions.get_filtered(filter)
    }

    pub fn list_all(&self) -> LedgerResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }
}
