//! Transaction CLI commands
//!
//! Implements CLI commands for recording and listing transactions.

use clap::Subcommand;

use super::{member_names, parse_amount, parse_date, parse_date_or_today};
use crate::display::{format_category_list, format_transaction_details, format_transaction_register};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, TransactionType};
use crate::services::{CreateTransactionInput, MemberService, TransactionService};
use crate::storage::{Storage, TransactionFilter};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Member name or ID
        member: String,
        /// Category (dues, donation, health, education, bereavement, general-expense)
        category: String,
        /// Amount, never negative (e.g. "5000" or "5,000.50")
        amount: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,
    },
    /// List transactions
    #[command(alias = "ls")]
    List {
        /// Filter by member name or ID
        #[arg(short, long)]
        member: Option<String>,
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by type (income, expense)
        #[arg(short = 't', long = "type")]
        transaction_type: Option<String>,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Show only the most recent N matches
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },
    /// List the categories and whether each is income or expense
    Categories,
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    let service = TransactionService::new(storage);
    let member_service = MemberService::new(storage);

    match cmd {
        TransactionCommands::Add {
            member,
            category,
            amount,
            date,
            note,
        } => {
            let member = member_service.resolve(&member)?;
            let category: Category = category.parse().map_err(LedgerError::Validation)?;
            let amount = parse_amount(&amount)?;
            let date = parse_date_or_today(date.as_deref())?;

            let mut input = CreateTransactionInput::new(date, member.id, category, amount);
            input.note = note;

            let txn = service.create(input)?;

            println!("Recorded transaction:");
            println!("  ID:       {}", txn.id);
            println!("  Date:     {}", txn.date);
            println!("  Member:   {}", member.name);
            println!("  Category: {} ({})", txn.category.label(), txn.transaction_type);
            println!("  Amount:   {}", txn.amount);
        }

        TransactionCommands::List {
            member,
            category,
            transaction_type,
            from,
            to,
            limit,
        } => {
            let mut filter = TransactionFilter::default();

            if let Some(identifier) = &member {
                filter.member_id = Some(member_service.resolve(identifier)?.id);
            }
            if let Some(name) = &category {
                filter.category = Some(name.parse().map_err(LedgerError::Validation)?);
            }
            if let Some(kind) = &transaction_type {
                filter.transaction_type = Some(TransactionType::parse(kind).ok_or_else(|| {
                    LedgerError::Validation(format!(
                        "Invalid type: '{}'. Use income or expense",
                        kind
                    ))
                })?);
            }
            if let Some(from) = &from {
                filter.since = Some(parse_date(from)?);
            }
            if let Some(to) = &to {
                filter.until = Some(parse_date(to)?);
            }

            let mut transactions = service.list(&filter)?;
            if let Some(limit) = limit {
                let skip = transactions.len().saturating_sub(limit);
                transactions.drain(..skip);
            }

            let names = member_names(storage)?;
            print!("{}", format_transaction_register(&transactions, &names));
            println!("\nShowing {} transaction(s)", transactions.len());
        }

        TransactionCommands::Show { id } => {
            let txn = service
                .find(&id)?
                .ok_or_else(|| LedgerError::transaction_not_found(&id))?;

            let member_name = member_service
                .get(txn.member_id)?
                .map(|m| m.name)
                .unwrap_or_default();

            print!("{}", format_transaction_details(&txn, &member_name));
        }

        TransactionCommands::Categories => {
            print!("{}", format_category_list());
        }
    }

    Ok(())
}
