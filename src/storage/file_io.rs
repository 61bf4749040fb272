//! Reading and replacing the ledger's table files
//!
//! Each of members.json, transactions.json and loans.json holds one whole
//! table. Tables are append-only in memory but are always written out in
//! full: the new table goes to `<name>.json.tmp`, is synced, then renamed
//! over the old file. A crash or failed write leaves the previous table.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::LedgerError;

/// Load a table file; a table that was never written is empty
pub fn read_table<T, P>(path: P) -> Result<T, LedgerError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        tracing::debug!(table = %path.display(), "table file missing, starting empty");
        return Ok(T::default());
    }

    let file = File::open(path).map_err(|e| {
        LedgerError::Storage(format!("Failed to open table {}: {}", path.display(), e))
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        LedgerError::Storage(format!("Table {} is corrupt: {}", path.display(), e))
    })
}

/// Replace a table file with the full contents of `table`
pub fn write_table<T, P>(path: P, table: &T) -> Result<(), LedgerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(data_dir) = path.parent() {
        fs::create_dir_all(data_dir).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create data directory {}: {}",
                data_dir.display(),
                e
            ))
        })?;
    }

    let staged = path.with_extension("json.tmp");

    let result = stage_table(&staged, table).and_then(|()| {
        fs::rename(&staged, path).map_err(|e| {
            LedgerError::Storage(format!("Failed to replace table {}: {}", path.display(), e))
        })
    });
    if result.is_err() {
        let _ = fs::remove_file(&staged);
    }
    result?;

    tracing::debug!(table = %path.display(), "table replaced");
    Ok(())
}

fn stage_table<T: Serialize>(staged: &Path, table: &T) -> Result<(), LedgerError> {
    let storage_err = |what: &str, e: &dyn std::fmt::Display| {
        LedgerError::Storage(format!("Failed to {} {}: {}", what, staged.display(), e))
    };

    let file = File::create(staged).map_err(|e| storage_err("create", &e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, table).map_err(|e| storage_err("serialize", &e))?;
    writer.flush().map_err(|e| storage_err("flush", &e))?;
    writer.get_ref().sync_all().map_err(|e| storage_err("sync", &e))
}

/// Write an empty table unless the file is already there
///
/// Returns `true` when the table was created. Existing rows are never touched.
pub fn create_table_if_absent<T, P>(path: P, empty: &T) -> Result<bool, LedgerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.exists() {
        return Ok(false);
    }
    write_table(path, empty)?;
    Ok(true)
}
