//! Loan display formatting

use std::collections::HashMap;

use super::truncate;
use crate::models::{Loan, MemberId, Money};

/// Format loans as a table, resolving member names from `member_names`
pub fn format_loan_list(loans: &[Loan], member_names: &HashMap<MemberId, String>) -> String {
    if loans.is_empty() {
        return "No loans found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<14} {:<10}  {:<20} {:>14} {:>7}  {}\n",
        "ID", "Date", "Member", "Principal", "Rate", "Status"
    ));
    output.push_str(&"-".repeat(80));
    output.push('\n');

    for loan in loans {
        let member = member_names
            .get(&loan.member_id)
            .map(String::as_str)
            .unwrap_or("");
        output.push_str(&format!(
            "{:<14} {}  {:<20} {:>14} {:>6}%  {}\n",
            loan.id.to_string(),
            loan.date.format("%Y-%m-%d"),
            truncate(member, 20),
            loan.principal,
            loan.rate,
            loan.status
        ));
    }

    let total: Money = loans.iter().map(|l| l.principal).sum();
    output.push_str(&"-".repeat(80));
    output.push('\n');
    output.push_str(&format!("{:<46} {:>14}\n", "Total principal:", total));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_loan_list() {
        let member = MemberId::new();
        let mut names = HashMap::new();
        names.insert(member, "Aye".to_string());

        let date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        let loans = vec![
            Loan::new(member, Money::from_units(200_000), 2.0, date),
            Loan::new(member, Money::from_units(50_000), 0.0, date).with_status("repaid"),
        ];

        let output = format_loan_list(&loans, &names);
        assert!(output.contains("Aye"));
        assert!(output.contains("repaid"));
        assert!(output.contains("250,000.00"));
    }

    #[test]
    fn test_empty_loan_list() {
        assert_eq!(format_loan_list(&[], &HashMap::new()), "No loans found.\n");
    }
}
