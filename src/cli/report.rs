//! CLI command for the ledger report

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::models::ReportPeriod;
use crate::reports::LedgerSummary;
use crate::storage::Storage;

/// Report arguments
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Lookback period in months: 1, 3, 4, 6 or 12 (30-day blocks)
    #[arg(short, long)]
    pub months: Option<u32>,

    /// Export to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show totals per category
    #[arg(long)]
    pub by_category: bool,

    /// Show totals per member
    #[arg(long)]
    pub by_member: bool,
}

/// Handle the report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    args: ReportArgs,
) -> LedgerResult<()> {
    let period = match args.months {
        Some(months) => ReportPeriod::from_months(months)?,
        None => settings.default_period()?,
    };

    let report = LedgerSummary::generate(storage, period)?;

    if let Some(path) = args.output {
        let mut writer = super::create_output(&path)?;
        write_report_csv(&report, &mut writer)?;
        println!("Ledger report exported to: {}", path.display());
        return Ok(());
    }

    println!("{}", report.format_terminal(settings));

    if args.by_category {
        println!("{}", report.format_category_breakdown(settings));
    }

    if args.by_member {
        println!("{:<20} {:>14} {:>14} {:>14}", "Member", "Income", "Expense", "Net");
        println!("{}", "-".repeat(65));
        for row in report.member_totals() {
            println!(
                "{:<20} {:>14} {:>14} {:>14}",
                crate::display::truncate(&row.member_name, 20),
                row.income.format_whole(),
                row.expense.format_whole(),
                row.net().format_whole()
            );
        }
    }

    Ok(())
}

/// Write the report as CSV and flush, so a failed write is reported
fn write_report_csv<W: Write>(report: &LedgerSummary, writer: &mut W) -> LedgerResult<()> {
    report.export_csv(writer)?;
    writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))
}
