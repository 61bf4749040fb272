//! Transaction categories and their income/expense classification
//!
//! The category set is fixed. A transaction's type is never chosen by the
//! caller; it is always derived from the category through
//! [`Category::transaction_type`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a transaction adds to or draws from the association's funds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Parse from user input (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Some(Self::Income),
            "expense" | "out" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        })
    }
}

/// Fixed set of transaction categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Monthly membership dues
    Dues,
    Donation,
    /// Welfare support for members' health costs
    Health,
    /// Welfare support for members' education costs
    Education,
    /// Funeral and bereavement support
    Bereavement,
    GeneralExpense,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 6] = [
        Category::Dues,
        Category::Donation,
        Category::Health,
        Category::Education,
        Category::Bereavement,
        Category::GeneralExpense,
    ];

    /// The transaction type implied by this category
    pub const fn transaction_type(self) -> TransactionType {
        match self {
            Category::Dues | Category::Donation => TransactionType::Income,
            Category::Health
            | Category::Education
            | Category::Bereavement
            | Category::GeneralExpense => TransactionType::Expense,
        }
    }

    pub const fn is_income(self) -> bool {
        matches!(self.transaction_type(), TransactionType::Income)
    }

    /// The stable machine name, as stored on disk
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Dues => "dues",
            Category::Donation => "donation",
            Category::Health => "health",
            Category::Education => "education",
            Category::Bereavement => "bereavement",
            Category::GeneralExpense => "general-expense",
        }
    }

    /// Human-readable label
    pub const fn label(self) -> &'static str {
        match self {
            Category::Dues => "Monthly Dues",
            Category::Donation => "Donation",
            Category::Health => "Welfare - Health",
            Category::Education => "Welfare - Education",
            Category::Bereavement => "Welfare - Bereavement",
            Category::GeneralExpense => "General Expense",
        }
    }

    /// Parse from user input
    ///
    /// Accepts the machine name in any case, with `_` or ` ` in place of `-`.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        Self::ALL.into_iter().find(|c| c.as_str() == normalized)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            let valid: Vec<_> = Self::ALL.iter().map(|c| c.as_str()).collect();
            format!("Unknown category '{}'. Valid categories: {}", s, valid.join(", "))
        })
    }
}
