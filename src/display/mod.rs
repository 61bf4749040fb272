//! Display formatting for terminal output
//!
//! Plain-text tables and detail views for members, transactions and loans.

pub mod loan;
pub mod member;
pub mod transaction;

pub use loan::format_loan_list;
pub use member::{format_member_details, format_member_list};
pub use transaction::{format_category_list, format_transaction_details, format_transaction_register};

/// Truncate a string to at most `max_len` characters, marking the cut with "..."
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Aye", 10), "Aye");
        assert_eq!(truncate("Daw Aye Aye Myint", 10), "Daw Aye...");
        assert_eq!(truncate("abcdef", 2), "..");
    }

    #[test]
    fn test_truncate_counts_characters() {
        let name = "မောင်မောင်";
        assert_eq!(truncate(name, 40), name);
        assert!(truncate(name, 5).ends_with("..."));
    }
}
