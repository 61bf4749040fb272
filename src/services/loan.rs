//! Loan service

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Loan, MemberId, Money};
use crate::storage::Storage;

/// Service for loan management
pub struct LoanService<'a> {
    storage: &'a Storage,
}

/// Input for recording a new loan
#[derive(Debug, Clone)]
pub struct CreateLoanInput {
    pub member_id: MemberId,
    pub principal: Money,
    pub rate: f64,
    pub date: NaiveDate,
    pub status: Option<String>,
    pub note: Option<String>,
}

impl<'a> LoanService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a loan against an existing member
    pub fn create(&self, input: CreateLoanInput) -> LedgerResult<Loan> {
        if !self.storage.members.exists(input.member_id)? {
            return Err(LedgerError::member_not_found(input.member_id.to_string()));
        }

        let mut loan = Loan::new(input.member_id, input.principal, input.rate, input.date);
        if let Some(status) = input.status {
            loan = loan.with_status(status);
        }
        if let Some(note) = input.note {
            loan = loan.with_note(note);
        }

        loan.validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.storage.loans.insert(loan.clone())?;

        tracing::info!(
            loan_id = %loan.id,
            member_id = %loan.member_id,
            principal = %loan.principal,
            "loan recorded"
        );
        Ok(loan)
    }

    pub fn list(&self) -> LedgerResult<Vec<Loan>> {
        self.storage.loans.get_all()
    }

    pub fn list_for_member(&self, member_id: MemberId) -> LedgerResult<Vec<Loan>> {
        self.storage.loans.get_by_member(member_id)
    }

    /// Sum of principal over a set of loans
    pub fn total_principal(loans: &[Loan]) -> Money {
        loans.iter().map(|l| l.principal).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use crate::services::MemberService;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();
        (temp_dir, storage)
    }

    fn input(member_id: MemberId, principal: i64) -> CreateLoanInput {
        CreateLoanInput {
            member_id,
            principal: Money::from_units(principal),
            rate: 2.5,
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            status: None,
            note: None,
        }
    }

    #[test]
    fn test_create_loan() {
        let (_temp_dir, storage) = create_test_storage();
        let aye = MemberService::new(&storage).create("Aye", "").unwrap();
        let service = LoanService::new(&storage);

        let loan = service.create(input(aye.id, 100_000)).unwrap();
        assert_eq!(loan.status, "active");
        assert_eq!(loan.rate, 2.5);

        let repaid = service
            .create(CreateLoanInput {
                status: Some("repaid".into()),
                ..input(aye.id, 50_000)
            })
            .unwrap();
        assert_eq!(repaid.status, "repaid");

        let loans = service.list_for_member(aye.id).unwrap();
        assert_eq!(loans.len(), 2);
        assert_eq!(
            LoanService::total_principal(&loans),
            Money::from_units(150_000)
        );
    }

    #[test]
    fn test_unknown_member() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LoanService::new(&storage);

        let err = service.create(input(MemberId::new(), 10)).unwrap_err();
        assert!(err.is_reference());
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_negative_principal_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let aye = MemberService::new(&storage).create("Aye", "").unwrap();
        let service = LoanService::new(&storage);

        let err = service.create(input(aye.id, -10)).unwrap_err();
        assert!(err.is_validation());
    }
}
