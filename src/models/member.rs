//! Member model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::MemberId;

/// A member of the association
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,

    pub name: String,

    #[serde(default)]
    pub phone: String,

    /// When the member was recorded
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Create a new member
    ///
    /// Name and phone are taken as given; empty strings are allowed.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: MemberId::new(),
            name: name.into(),
            phone: phone.into(),
            created_at: Utc::now(),
        }
    }

    /// Case-insensitive name comparison used for lookups
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(name.trim())
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_member_accepts_empty_fields() {
        let member = Member::new("", "");
        assert!(member.name.is_empty());
        assert!(member.phone.is_empty());
    }

    #[test]
    fn test_name_matches() {
        let member = Member::new("Aye Aye", "09-123456");
        assert!(member.name_matches("aye aye"));
        assert!(member.name_matches("  Aye Aye "));
        assert!(!member.name_matches("Aye"));
    }

    #[test]
    fn test_display() {
        let member = Member::new("Aye", "");
        assert_eq!(member.to_string(), format!("Aye ({})", member.id));
    }
}
