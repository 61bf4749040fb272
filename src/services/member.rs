//! Member service
//!
//! Registers members and resolves the identifiers users type on the command
//! line (a member ID or a name) to stored members.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Member, MemberId};
use crate::storage::Storage;

/// Service for member management
pub struct MemberService<'a> {
    storage: &'a Storage,
}

impl<'a> MemberService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new member
    ///
    /// Name and phone are stored exactly as given, including empty strings.
    pub fn create(&self, name: &str, phone: &str) -> LedgerResult<Member> {
        let member = Member::new(name, phone);
        self.storage.members.insert(member.clone())?;

        tracing::info!(member_id = %member.id, name = %member.name, "member added");
        Ok(member)
    }

    /// Register several members with one write to the members table
    pub fn create_many(&self, rows: Vec<(String, String)>) -> LedgerResult<Vec<Member>> {
        let members: Vec<Member> = rows
            .into_iter()
            .map(|(name, phone)| Member::new(name, phone))
            .collect();
        self.storage.members.insert_many(members.clone())?;

        tracing::info!(count = members.len(), "members added");
        Ok(members)
    }

    pub fn get(&self, id: MemberId) -> LedgerResult<Option<Member>> {
        self.storage.members.get(id)
    }

    /// Find a member by ID (full or short form) or by name
    ///
    /// A name shared by several members is rejected as ambiguous.
    pub fn find(&self, identifier: &str) -> LedgerResult<Option<Member>> {
        let members = self.storage.members.get_all()?;

        if let Some(member) = members.iter().find(|m| m.id.matches(identifier)) {
            return Ok(Some(member.clone()));
        }

        let mut by_name = members.into_iter().filter(|m| m.name_matches(identifier));
        match (by_name.next(), by_name.next()) {
            (Some(member), None) => Ok(Some(member)),
            (Some(first), Some(second)) => Err(LedgerError::Validation(format!(
                "Several members are named '{}' ({}, {}, ...); use the member ID",
                identifier.trim(),
                first.id,
                second.id
            ))),
            (None, _) => Ok(None),
        }
    }

    /// Like [`find`](Self::find), but a missing member is a reference error
    pub fn resolve(&self, identifier: &str) -> LedgerResult<Member> {
        self.find(identifier)?
            .ok_or_else(|| LedgerError::member_not_found(identifier.trim()))
    }

    /// All members in insertion order
    pub fn list(&self) -> LedgerResult<Vec<Member>> {
        self.storage.members.get_all()
    }

    pub fn count(&self) -> LedgerResult<usize> {
        self.storage.members.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_create_and_list_in_order() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MemberService::new(&storage);

        service.create("Aye", "09-111").unwrap();
        service.create("Mya", "").unwrap();
        service.create("", "").unwrap();

        let names: Vec<_> = service.list().unwrap().into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["Aye", "Mya", ""]);
    }

    #[test]
    fn test_create_many() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MemberService::new(&storage);
        service.create("Zaw", "").unwrap();

        let created = service
            .create_many(vec![
                ("Aye".to_string(), "09-111".to_string()),
                ("Mya".to_string(), String::new()),
            ])
            .unwrap();
        assert_eq!(created.len(), 2);

        let names: Vec<_> = service.list().unwrap().into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["Zaw", "Aye", "Mya"]);
        assert_eq!(service.find("Aye").unwrap().unwrap().phone, "09-111");
    }

    #[test]
    fn test_find_by_id_and_name() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MemberService::new(&storage);

        let aye = service.create("Aye", "").unwrap();

        assert_eq!(service.find(&aye.id.to_string()).unwrap().unwrap().id, aye.id);
        assert_eq!(service.find("aye").unwrap().unwrap().id, aye.id);
        assert!(service.find("Hla").unwrap().is_none());
    }

    #[test]
    fn test_ambiguous_name() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MemberService::new(&storage);

        service.create("Aye", "").unwrap();
        service.create("Aye", "").unwrap();

        assert!(service.find("Aye").unwrap_err().is_validation());
    }

    #[test]
    fn test_resolve_missing_is_reference_error() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MemberService::new(&storage);

        let err = service.resolve("nobody").unwrap_err();
        assert!(err.is_reference());
    }
}
