//! Member CLI commands

use std::fs::File;
use std::path::PathBuf;

use clap::Subcommand;

use crate::display::{format_member_details, format_member_list};
use crate::error::{LedgerError, LedgerResult};
use crate::services::{ImportService, LoanService, MemberService};
use crate::storage::Storage;

/// Member subcommands
#[derive(Subcommand)]
pub enum MemberCommands {
    /// Register a new member
    Add {
        /// Member name
        name: String,
        /// Phone number
        #[arg(short, long, default_value = "")]
        phone: String,
    },
    /// List all members
    #[command(alias = "ls")]
    List,
    /// Show member details
    Show {
        /// Member name or ID
        member: String,
    },
    /// Import members from a CSV file with a `name,phone` header
    Import {
        /// Path to CSV file
        file: PathBuf,
    },
}

/// Handle a member command
pub fn handle_member_command(storage: &Storage, cmd: MemberCommands) -> LedgerResult<()> {
    let service = MemberService::new(storage);

    match cmd {
        MemberCommands::Add { name, phone } => {
            let member = service.create(&name, &phone)?;

            println!("Added member:");
            println!("  ID:    {}", member.id);
            println!("  Name:  {}", member.name);
            if !member.phone.is_empty() {
                println!("  Phone: {}", member.phone);
            }
        }

        MemberCommands::List => {
            let members = service.list()?;
            println!("{}", format_member_list(&members));
        }

        MemberCommands::Show { member } => {
            let member = service.resolve(&member)?;
            let loans = LoanService::new(storage).list_for_member(member.id)?;
            print!("{}", format_member_details(&member, &loans));
        }

        MemberCommands::Import { file } => {
            let reader = File::open(&file).map_err(|e| {
                LedgerError::Import(format!("Failed to open {}: {}", file.display(), e))
            })?;

            let summary = ImportService::new(storage).import_members_csv(reader)?;

            println!("Imported {} member(s) from {}", summary.imported, file.display());
            if summary.skipped > 0 {
                println!("Skipped {} row(s):", summary.skipped);
                for (row, reason) in &summary.messages {
                    println!("  row {}: {}", row, reason);
                }
            }
        }
    }

    Ok(())
}
