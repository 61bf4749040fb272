//! Transaction display formatting
//!
//! Register view with a running balance, detail view and the category table.

use std::collections::HashMap;

use super::truncate;
use crate::models::{Category, MemberId, Money, Transaction, TransactionType};

/// Format transactions as a register with separate in/out columns
///
/// The running balance adds income and subtracts expense in list order.
pub fn format_transaction_register(
    transactions: &[Transaction],
    member_names: &HashMap<MemberId, String>,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10}  {:<20} {:<16} {:>12} {:>12}\n",
        "Date", "Member", "Category", "Out", "In"
    ));
    output.push_str(&"-".repeat(74));
    output.push('\n');

    let mut running_balance = Money::zero();

    for txn in transactions {
        let (outflow, inflow) = match txn.transaction_type {
            TransactionType::Expense => {
                running_balance -= txn.amount;
                (txn.amount.to_string(), String::new())
            }
            TransactionType::Income => {
                running_balance += txn.amount;
                (String::new(), txn.amount.to_string())
            }
        };

        let member = member_names
            .get(&txn.member_id)
            .map(String::as_str)
            .unwrap_or("");

        output.push_str(&format!(
            "{}  {:<20} {:<16} {:>12} {:>12}\n",
            txn.date.format("%Y-%m-%d"),
            truncate(member, 20),
            txn.category.label(),
            outflow,
            inflow
        ));
    }

    output.push_str(&"-".repeat(74));
    output.push('\n');
    output.push_str(&format!("{:>61} {:>12}\n", "Balance:", running_balance));

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, member_name: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Member:      {}\n", member_name));
    output.push_str(&format!("Category:    {}\n", txn.category.label()));
    output.push_str(&format!("Type:        {}\n", txn.transaction_type));
    output.push_str(&format!("Amount:      {}\n", txn.amount));

    if let Some(note) = &txn.note {
        output.push_str(&format!("Note:        {}\n", note));
    }

    output
}

/// Format the fixed category set with each category's type
pub fn format_category_list() -> String {
    let mut output = String::new();
    output.push_str(&format!("{:<16} {:<16} {}\n", "Name", "Label", "Type"));
    output.push_str(&"-".repeat(42));
    output.push('\n');

    for category in Category::ALL {
        output.push_str(&format!(
            "{:<16} {:<16} {}\n",
            category,
            category.label(),
            category.transaction_type()
        ));
    }

    output
}
