//! Member repository for JSON storage
//!
//! Manages loading and appending members in members.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::LedgerError;
use crate::models::{Member, MemberId};

use super::file_io::{read_table, write_table};
use super::lock_error;

/// Serializable member table
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub(crate) struct MemberData {
    pub(crate) members: Vec<Member>,
}

#[derive(Default)]
struct MemberTable {
    rows: Vec<Member>,
    /// Index: member_id -> position in `rows`
    by_id: HashMap<MemberId, usize>,
}

/// Repository for member persistence, in insertion order
pub struct MemberRepository {
    path: PathBuf,
    table: RwLock<MemberTable>,
}

impl MemberRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            table: RwLock::new(MemberTable::default()),
        }
    }

    /// Load members from disk and rebuild the index
    pub fn load(&self) -> Result<(), LedgerError> {
        let file_data: MemberData = read_table(&self.path)?;

        let mut table = self.table.write().map_err(lock_error)?;
        table.rows.clear();
        table.by_id.clear();

        for member in file_data.members {
            if table.by_id.contains_key(&member.id) {
                return Err(LedgerError::Storage(format!(
                    "Duplicate member id {} in {}",
                    member.id,
                    self.path.display()
                )));
            }
            let position = table.rows.len();
            table.by_id.insert(member.id, position);
            table.rows.push(member);
        }

        tracing::debug!(count = table.rows.len(), "loaded members");
        Ok(())
    }

    /// Append a member and persist the table
    ///
    /// If the write fails the member is dropped from memory as well.
    pub fn insert(&self, member: Member) -> Result<(), LedgerError> {
        let mut table = self.table.write().map_err(lock_error)?;

        if table.by_id.contains_key(&member.id) {
            return Err(LedgerError::Storage(format!(
                "Member id {} already exists",
                member.id
            )));
        }

        let position = table.rows.len();
        table.by_id.insert(member.id, position);
        table.rows.push(member);

        let file_data = MemberData {
            members: table.rows.clone(),
        };
        if let Err(e) = write_table(&self.path, &file_data) {
            if let Some(failed) = table.rows.pop() {
                table.by_id.remove(&failed.id);
            }
            return Err(e);
        }

        Ok(())
    }

    /// Append several members with a single write
    ///
    /// Either every member is stored or none is: a duplicate id or a failed
    /// write leaves the table as it was.
    pub fn insert_many(&self, members: Vec<Member>) -> Result<usize, LedgerError> {
        if members.is_empty() {
            return Ok(0);
        }

        let mut table = self.table.write().map_err(lock_error)?;
        let start = table.rows.len();

        for member in members {
            if table.by_id.contains_key(&member.id) {
                let id = member.id;
                truncate_table(&mut table, start);
                return Err(LedgerError::Storage(format!(
                    "Member id {} already exists",
                    id
                )));
            }
            let position = table.rows.len();
            table.by_id.insert(member.id, position);
            table.rows.push(member);
        }

        let file_data = MemberData {
            members: table.rows.clone(),
        };
        if let Err(e) = write_table(&self.path, &file_data) {
            truncate_table(&mut table, start);
            return Err(e);
        }

        Ok(table.rows.len() - start)
    }

    pub fn get(&self, id: MemberId) -> Result<Option<Member>, LedgerError> {
        let table = self.table.read().map_err(lock_error)?;
        Ok(table.by_id.get(&id).map(|&i| table.rows[i].clone()))
    }

    pub fn exists(&self, id: MemberId) -> Result<bool, LedgerError> {
        let table = self.table.read().map_err(lock_error)?;
        Ok(table.by_id.contains_key(&id))
    }

    /// All members in insertion order
    pub fn get_all(&self) -> Result<Vec<Member>, LedgerError> {
        let table = self.table.read().map_err(lock_error)?;
        Ok(table.rows.clone())
    }

    /// Members whose name matches (case-insensitive), in insertion order
    pub fn find_by_name(&self, name: &str) -> Result<Vec<Member>, LedgerError> {
        let table = self.table.read().map_err(lock_error)?;
        Ok(table
            .rows
            .iter()
            .filter(|m| m.name_matches(name))
            .cloned()
            .collect())
    }

    pub fn count(&self) -> Result<usize, LedgerError> {
        let table = self.table.read().map_err(lock_error)?;
        Ok(table.rows.len())
    }
}

/// Drop rows appended after `len` along with their index entries
fn truncate_table(table: &mut MemberTable, len: usize) {
    for removed in table.rows.drain(len..) {
        table.by_id.remove(&removed.id);
    }
}
