//! CLI commands for data export and export checking

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use crate::error::{LedgerError, LedgerResult};
use crate::export::{csv, json, yaml, LedgerExport};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON format (full ledger)
    Json,
    /// YAML format (full ledger, human-readable)
    Yaml,
    /// CSV format (one table, see --table)
    Csv,
}

/// Table written by a CSV export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CsvTable {
    #[default]
    Transactions,
    Members,
    Loans,
}

/// Export arguments
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path; writes to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Table to write for CSV exports
    #[arg(short, long, value_enum, default_value_t = CsvTable::Transactions)]
    pub table: CsvTable,

    /// Compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> LedgerResult<()> {
    if !matches!(args.format, ExportFormat::Csv) && args.table != CsvTable::Transactions {
        return Err(LedgerError::Validation(
            "--table only applies to csv exports".into(),
        ));
    }

    match &args.output {
        Some(path) => {
            let mut writer = super::create_output(path)?;
            write_export(storage, &args, &mut writer)?;
            writer
                .flush()
                .map_err(|e| LedgerError::Export(e.to_string()))?;

            match args.format {
                ExportFormat::Csv => {
                    println!("{:?} exported to: {}", args.table, path.display());
                }
                _ => println!("Full ledger exported to: {}", path.display()),
            }
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_export(storage, &args, &mut writer)?;
            if matches!(args.format, ExportFormat::Json) {
                writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;
            }
        }
    }

    Ok(())
}

fn write_export<W: Write>(storage: &Storage, args: &ExportArgs, writer: &mut W) -> LedgerResult<()> {
    match (args.format, args.table) {
        (ExportFormat::Json, _) => json::export_full_json(storage, writer, !args.compact),
        (ExportFormat::Yaml, _) => yaml::export_full_yaml(storage, writer),
        (ExportFormat::Csv, CsvTable::Transactions) => csv::export_transactions_csv(storage, writer),
        (ExportFormat::Csv, CsvTable::Members) => csv::export_members_csv(storage, writer),
        (ExportFormat::Csv, CsvTable::Loans) => csv::export_loans_csv(storage, writer),
    }
}

/// Read a JSON or YAML export back and check its integrity
///
/// Files ending in `.yaml` or `.yml` are read as YAML, anything else as JSON.
pub fn read_export_file(path: &Path) -> LedgerResult<LedgerExport> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        LedgerError::Import(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

    if is_yaml {
        yaml::read_yaml_export(&contents)
    } else {
        json::read_json_export(&contents)
    }
}

/// Handle the check command
pub fn handle_check_command(path: &Path) -> LedgerResult<()> {
    let export = read_export_file(path)?;

    println!("Export OK: {}", path.display());
    println!("  Schema version: {}", export.schema_version);
    println!("  Exported at:    {}", export.exported_at);
    println!("  Members:        {}", export.metadata.member_count);
    println!("  Transactions:   {}", export.metadata.transaction_count);
    println!("  Loans:          {}", export.metadata.loan_count);
    Ok(())
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

    #[test]
    fn test_read_export_file_by_extension() {
        let (temp_dir, storage) = create_test_storage();
        MemberService::new(&storage).create("Aye", "").unwrap();

        let json_path = temp_dir.path().join("ledger.json");
        let mut file = std::fs::File::create(&json_path).unwrap();
        json::export_full_json(&storage, &mut file, true).unwrap();

        let yaml_path = temp_dir.path().join("ledger.yml");
        let mut file = std::fs::File::create(&yaml_path).unwrap();
        yaml::export_full_yaml(&storage, &mut file).unwrap();

        assert_eq!(read_export_file(&json_path).unwrap().members.len(), 1);
        assert_eq!(read_export_file(&yaml_path).unwrap().members.len(), 1);
    }

    #[test]
    fn test_read_export_file_rejects_garbage() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            read_export_file(&path).unwrap_err(),
            LedgerError::Import(_)
        ));
    }
}
