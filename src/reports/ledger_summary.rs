//! Ledger Summary Report
//!
//! Totals income and expense over a lookback window and lists the
//! transactions inside it. The window starts `months * 30` days before
//! today, inclusive, and has no upper bound.

use std::collections::HashMap;
use std::io::Write;

use chrono::{Local, NaiveDate};

use crate::config::Settings;
use crate::display::truncate;
use crate::error::{LedgerError, LedgerResult};
use crate::export::csv::escape_csv;
use crate::models::{Category, MemberId, Money, ReportPeriod, Transaction, TransactionType};
use crate::storage::Storage;

/// Totals for one category within the window
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
    pub transaction_count: usize,
}

/// Income and expense recorded against one member within the window
#[derive(Debug, Clone, PartialEq)]
pub struct MemberTotal {
    pub member_id: MemberId,
    pub member_name: String,
    pub income: Money,
    pub expense: Money,
}

impl MemberTotal {
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

/// Ledger summary for a report period
#[derive(Debug, Clone)]
pub struct LedgerSummary {
    pub period: ReportPeriod,
    /// First day included in the window
    pub start_date: NaiveDate,
    /// The date the window was measured back from
    pub as_of: NaiveDate,
    pub total_income: Money,
    pub total_expense: Money,
    /// `total_income - total_expense`
    pub balance: Money,
    /// Transactions in the window, in insertion order
    pub transactions: Vec<Transaction>,
    member_names: HashMap<MemberId, String>,
}

impl LedgerSummary {
    /// Generate the summary for the period ending today (local time)
    pub fn generate(storage: &Storage, period: ReportPeriod) -> LedgerResult<Self> {
        Self::generate_as_of(storage, period, Local::now().date_naive())
    }

    /// Generate the summary measured back from an explicit date
    pub fn generate_as_of(
        storage: &Storage,
        period: ReportPeriod,
        today: NaiveDate,
    ) -> LedgerResult<Self> {
        let start_date = period.start_date(today);
        let transactions = storage.transactions.get_since(start_date)?;

        let mut total_income = Money::zero();
        let mut total_expense = Money::zero();
        for txn in &transactions {
            match txn.transaction_type {
                TransactionType::Income => total_income += txn.amount,
                TransactionType::Expense => total_expense += txn.amount,
            }
        }

        let member_names = storage
            .members
            .get_all()?
            .into_iter()
            .map(|m| (m.id, m.name))
            .collect();

        tracing::debug!(
            period = %period,
            %start_date,
            rows = transactions.len(),
            "generated ledger summary"
        );

        Ok(Self {
            period,
            start_date,
            as_of: today,
            total_income,
            total_expense,
            balance: total_income - total_expense,
            transactions,
            member_names,
        })
    }

    /// Name of a member, or an empty string if it is not on file
    pub fn member_name(&self, id: MemberId) -> &str {
        self.member_names.get(&id).map(String::as_str).unwrap_or("")
    }

    /// Per-category totals in fixed category order, omitting empty categories
    pub fn category_totals(&self) -> Vec<CategoryTotal> {
        Category::ALL
            .iter()
            .filter_map(|&category| {
                let rows: Vec<_> = self
                    .transactions
                    .iter()
                    .filter(|t| t.category == category)
                    .collect();
                if rows.is_empty() {
                    return None;
                }
                Some(CategoryTotal {
                    category,
                    total: rows.iter().map(|t| t.amount).sum(),
                    transaction_count: rows.len(),
                })
            })
            .collect()
    }

    /// Per-member totals, ordered by first appearance in the window
    pub fn member_totals(&self) -> Vec<MemberTotal> {
        let mut totals: Vec<MemberTotal> = Vec::new();
        let mut index: HashMap<MemberId, usize> = HashMap::new();

        for txn in &self.transactions {
            let slot = *index.entry(txn.member_id).or_insert_with(|| {
                totals.push(MemberTotal {
                    member_id: txn.member_id,
                    member_name: self.member_name(txn.member_id).to_string(),
                    income: Money::zero(),
                    expense: Money::zero(),
                });
                totals.len() - 1
            });

            match txn.transaction_type {
                TransactionType::Income => totals[slot].income += txn.amount,
                TransactionType::Expense => totals[slot].expense += txn.amount,
            }
        }

        totals
    }

    /// Format the report for terminal display
    ///
    /// Amounts are shown rounded to whole units.
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();

        let title = if settings.org_name.is_empty() {
            "Ledger Report".to_string()
        } else {
            format!("{} Ledger Report", settings.org_name)
        };
        output.push_str(&format!(
            "{}: last {} ({} to {})\n",
            title, self.period, self.start_date, self.as_of
        ));
        output.push_str(&"=".repeat(72));
        output.push('\n');

        let currency = &settings.currency;
        output.push_str(&format!(
            "Total Income:  {:>16} {}\n",
            self.total_income.format_whole(),
            currency
        ));
        output.push_str(&format!(
            "Total Expense: {:>16} {}\n",
            self.total_expense.format_whole(),
            currency
        ));
        output.push_str(&format!(
            "Balance:       {:>16} {}\n\n",
            self.balance.format_whole(),
            currency
        ));

        if self.transactions.is_empty() {
            output.push_str("No transactions in this period.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<10}  {:<20} {:<16} {:<8} {:>14}\n",
            "Date", "Member", "Category", "Type", "Amount"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        for txn in &self.transactions {
            output.push_str(&format!(
                "{:<10}  {:<20} {:<16} {:<8} {:>14}\n",
                txn.date.format("%Y-%m-%d"),
                truncate(self.member_name(txn.member_id), 20),
                txn.category.label(),
                txn.transaction_type,
                txn.amount.format_whole()
            ));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!("{} transaction(s)\n", self.transactions.len()));

        output
    }

    /// Format per-category totals for terminal display
    pub fn format_category_breakdown(&self, settings: &Settings) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{:<20} {:<8} {:>8} {:>16}\n",
            "Category", "Type", "Count", "Total"
        ));
        output.push_str(&"-".repeat(55));
        output.push('\n');

        for row in self.category_totals() {
            output.push_str(&format!(
                "{:<20} {:<8} {:>8} {:>16}\n",
                row.category.label(),
                row.category.transaction_type(),
                row.transaction_count,
                format!("{} {}", row.total.format_whole(), settings.currency)
            ));
        }

        output
    }

    /// Export the report to CSV format
    ///
    /// Amounts are written unrounded. The three total rows follow the
    /// transaction rows.
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> LedgerResult<()> {
        let export_err = |e: std::io::Error| LedgerError::Export(e.to_string());

        writeln!(writer, "Date,Member,Category,Type,Amount,Note").map_err(export_err)?;

        for txn in &self.transactions {
            writeln!(
                writer,
                "{},{},{},{},{},{}",
                txn.date.format("%Y-%m-%d"),
                escape_csv(self.member_name(txn.member_id)),
                txn.category,
                txn.transaction_type,
                txn.amount.to_decimal_string(),
                escape_csv(txn.note.as_deref().unwrap_or(""))
            )
            .map_err(export_err)?;
        }

        for (label, amount) in [
            ("TOTAL INCOME", self.total_income),
            ("TOTAL EXPENSE", self.total_expense),
            ("BALANCE", self.balance),
        ] {
            writeln!(writer, ",,{},,{},", label, amount.to_decimal_string())
                .map_err(export_err)?;
        }

        Ok(())
    }
}
