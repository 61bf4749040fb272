//! YAML Export functionality
//!
//! Exports the complete ledger to YAML format for human-readable backup.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::LedgerExport;
use crate::storage::Storage;

/// Export the full ledger to YAML format
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> LedgerResult<()> {
    let export = LedgerExport::from_storage(storage)?;
    let export_err = |e: std::io::Error| LedgerError::Export(e.to_string());

    writeln!(writer, "# Unity Ledger Full Export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a YAML export and check its integrity
pub fn read_yaml_export(yaml_str: &str) -> LedgerResult<LedgerExport> {
    let export: LedgerExport =
        serde_yaml::from_str(yaml_str).map_err(|e| LedgerError::Import(e.to_string()))?;

    export.validate().map_err(LedgerError::Import)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use crate::services::MemberService;
    use tempfile::TempDir;

    #[test]
    fn test_yaml_export() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();

        MemberService::new(&storage).create("Aye", "09-111").unwrap();

        let mut output = Vec::new();
        export_full_yaml(&storage, &mut output).unwrap();

        let yaml_str = String::from_utf8(output).unwrap();
        assert!(yaml_str.starts_with("# Unity Ledger Full Export"));
        assert!(yaml_str.contains("schema_version"));

        let export = read_yaml_export(&yaml_str).unwrap();
        assert_eq!(export.members.len(), 1);
        assert_eq!(export.members[0].name, "Aye");
    }
}
