//! Member display formatting

use crate::models::{Loan, Member, Money};

/// Format a list of members as a table
pub fn format_member_list(members: &[Member]) -> String {
    if members.is_empty() {
        return "No members found.".to_string();
    }

    let name_width = members
        .iter()
        .map(|m| m.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<13}  {:<name_width$}  {:<15}  {}\n",
        "ID",
        "Name",
        "Phone",
        "Joined",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<13}  {:-<name_width$}  {:-<15}  {:-<10}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for member in members {
        output.push_str(&format!(
            "{:<13}  {:<name_width$}  {:<15}  {}\n",
            member.id.to_string(),
            member.name,
            member.phone,
            member.created_at.format("%Y-%m-%d"),
            name_width = name_width,
        ));
    }

    output.push_str(&format!("\n{} member(s)\n", members.len()));
    output
}

/// Format member details, with any loans on file
pub fn format_member_details(member: &Member, loans: &[Loan]) -> String {
    let mut output = String::new();

    output.push_str(&format!("Member: {}\n", member.name));
    output.push_str(&format!("  ID:     {}\n", member.id.as_uuid()));
    if !member.phone.is_empty() {
        output.push_str(&format!("  Phone:  {}\n", member.phone));
    }
    output.push_str(&format!(
        "  Joined: {}\n",
        member.created_at.format("%Y-%m-%d")
    ));

    if !loans.is_empty() {
        let total: Money = loans.iter().map(|l| l.principal).sum();
        output.push_str(&format!("  Loans:  {} ({} total)\n", loans.len(), total));
    }

    output
}
