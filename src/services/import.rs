//! CSV member import
//!
//! Reads a `name,phone` file with a header row and registers each row as a
//! member. Rows with an empty name are skipped; nothing else is checked.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{LedgerError, LedgerResult};
use crate::services::MemberService;
use crate::storage::Storage;

/// Result of a completed member import
#[derive(Debug, Clone, Default)]
pub struct ImportSummary {
    /// Number of members created
    pub imported: usize,
    /// Number of rows skipped
    pub skipped: usize,
    /// Reason for each skipped row, keyed by 1-based data row number
    pub messages: Vec<(usize, String)>,
}

/// Column positions resolved from the header row
struct MemberColumns {
    name: usize,
    phone: Option<usize>,
}

impl MemberColumns {
    fn from_headers(headers: &StringRecord) -> LedgerResult<Self> {
        let position = |wanted: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(wanted))
        };

        let name = position("name").ok_or_else(|| {
            LedgerError::Import("CSV header must contain a 'name' column".into())
        })?;

        Ok(Self {
            name,
            phone: position("phone"),
        })
    }
}

/// Service for CSV import
pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Import members from CSV data
    ///
    /// Rows are appended in file order with a single write. A malformed
    /// record is skipped and reported; a storage failure aborts the import
    /// with no rows persisted.
    pub fn import_members_csv<R: Read>(&self, reader: R) -> LedgerResult<ImportSummary> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let columns = MemberColumns::from_headers(reader.headers()?)?;
        let members = MemberService::new(self.storage);
        let mut summary = ImportSummary::default();
        let mut rows = Vec::new();

        for (idx, result) in reader.records().enumerate() {
            let row = idx + 1;
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!(row, error = %e, "skipping unreadable CSV row");
                    summary.skipped += 1;
                    summary.messages.push((row, format!("Unreadable row: {}", e)));
                    continue;
                }
            };

            let name = record.get(columns.name).unwrap_or("");
            if name.is_empty() {
                tracing::warn!(row, "skipping CSV row without a name");
                summary.skipped += 1;
                summary.messages.push((row, "Missing name".to_string()));
                continue;
            }

            let phone = columns
                .phone
                .and_then(|i| record.get(i))
                .unwrap_or("");

            rows.push((name.to_string(), phone.to_string()));
        }

        summary.imported = members.create_many(rows)?.len();

        tracing::info!(
            imported = summary.imported,
            skipped = summary.skipped,
            "member import finished"
        );
        Ok(summary)
    }
}
