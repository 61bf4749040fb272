//! Loan CLI commands

use clap::Subcommand;

use super::{member_names, parse_amount, parse_date_or_today};
use crate::display::format_loan_list;
use crate::error::LedgerResult;
use crate::services::{CreateLoanInput, LoanService, MemberService};
use crate::storage::Storage;

/// Loan subcommands
#[derive(Subcommand)]
pub enum LoanCommands {
    /// Record a loan issued to a member
    Add {
        /// Member name or ID
        member: String,
        /// Principal amount
        principal: String,
        /// Annual rate in percent (recorded only)
        #[arg(short, long, default_value_t = 0.0)]
        rate: f64,
        /// Loan date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text status, defaults to "active"
        #[arg(short, long)]
        status: Option<String>,
        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,
    },
    /// List loans
    #[command(alias = "ls")]
    List {
        /// Filter by member name or ID
        #[arg(short, long)]
        member: Option<String>,
    },
}

/// Handle a loan command
pub fn handle_loan_command(storage: &Storage, cmd: LoanCommands) -> LedgerResult<()> {
    let service = LoanService::new(storage);
    let member_service = MemberService::new(storage);

    match cmd {
        LoanCommands::Add {
            member,
            principal,
            rate,
            date,
            status,
            note,
        } => {
            let member = member_service.resolve(&member)?;

            let loan = service.create(CreateLoanInput {
                member_id: member.id,
                principal: parse_amount(&principal)?,
                rate,
                date: parse_date_or_today(date.as_deref())?,
                status,
                note,
            })?;

            println!("Recorded loan:");
            println!("  ID:        {}", loan.id);
            println!("  Member:    {}", member.name);
            println!("  Principal: {}", loan.principal);
            println!("  Rate:      {}%", loan.rate);
            println!("  Status:    {}", loan.status);
        }

        LoanCommands::List { member } => {
            let loans = match member {
                Some(identifier) => {
                    let member = member_service.resolve(&identifier)?;
                    service.list_for_member(member.id)?
                }
                None => service.list()?,
            };

            let names = member_names(storage)?;
            print!("{}", format_loan_list(&loans, &names));
        }
    }

    Ok(())
}
