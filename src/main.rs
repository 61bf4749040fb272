use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use unity_ledger::cli::{
    handle_check_command, handle_export_command, handle_loan_command, handle_member_command,
    handle_report_command, handle_transaction_command, ExportArgs, LoanCommands, MemberCommands, ReportArgs,
    TransactionCommands,
};
use unity_ledger::config::{paths::DATA_DIR_ENV, LedgerPaths, Settings};
use unity_ledger::storage::{initialize_storage, Storage};

/// Environment variable holding the log filter, e.g. `UNITY_LOG=debug`
const LOG_ENV: &str = "UNITY_LOG";

#[derive(Parser)]
#[command(
    name = "unity",
    version,
    about = "Terminal ledger for community associations",
    long_about = "Unity Ledger records members, monthly dues, donations, welfare \
                  payments and loans for a community association, and reports \
                  income, expense and balance over the last 1, 3, 4, 6 or 12 months."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the ledger and write default settings
    Init,

    /// Show current configuration and paths
    Config,

    /// Member management commands
    #[command(subcommand)]
    Member(MemberCommands),

    /// Transaction commands
    #[command(subcommand, alias = "transaction")]
    Txn(TransactionCommands),

    /// Loan commands
    #[command(subcommand)]
    Loan(LoanCommands),

    /// Income, expense and balance over a lookback period
    Report(ReportArgs),

    /// Export the full ledger
    Export(ExportArgs),

    /// Read a JSON or YAML export back and check its integrity
    Check {
        /// Export file (.json, .yaml or .yml)
        file: PathBuf,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("Unity Ledger - community association ledger");
        println!();
        println!("Run 'unity --help' for usage information.");
        return Ok(());
    };

    match command {
        Commands::Init => {
            println!("Initializing Unity Ledger at: {}", paths.base_dir().display());
            initialize_storage(&paths)?;
            if !paths.is_initialized() {
                settings.save(&paths)?;
            }
            println!("Initialization complete!");
            println!();
            println!("Next: 'unity member add <name>' then 'unity txn add <member> dues <amount>'.");
        }
        Commands::Config => {
            println!("Unity Ledger Configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("(override with {})", DATA_DIR_ENV);
            println!();
            println!("Settings:");
            println!("  Organisation:   {}", settings.org_name);
            println!("  Currency:       {}", settings.currency);
            println!("  Report months:  {}", settings.default_report_months);
        }
        Commands::Member(cmd) => {
            let storage = Storage::open(paths)?;
            handle_member_command(&storage, cmd)?;
        }
        Commands::Txn(cmd) => {
            let storage = Storage::open(paths)?;
            handle_transaction_command(&storage, cmd)?;
        }
        Commands::Loan(cmd) => {
            let storage = Storage::open(paths)?;
            handle_loan_command(&storage, cmd)?;
        }
        Commands::Report(args) => {
            let storage = Storage::open(paths)?;
            handle_report_command(&storage, &settings, args)?;
        }
        Commands::Export(args) => {
            let storage = Storage::open(paths)?;
            handle_export_command(&storage, args)?;
        }
        Commands::Check { file } => {
            handle_check_command(&file)?;
        }
    }

    Ok(())
}
