//! Ledger record model
//!
//! A [`Record`] is one income or expense entry. Text fields are kept exactly
//! as they were entered or loaded so that a ledger file round-trips without
//! loss, including amounts that do not parse.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// Whether a record adds to income or to expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Wire/display text for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// Decode a kind read from a ledger file.
    ///
    /// Only the exact texts `Income` and `Expense` match. Anything else
    /// returns `None`, and callers treat it as an expense.
    pub fn from_stored(s: &str) -> Option<Self> {
        match s {
            "Income" => Some(Self::Income),
            "Expense" => Some(Self::Expense),
            _ => None,
        }
    }

    /// Match user input, ignoring case and surrounding whitespace
    pub fn recognize(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("income") {
            Some(Self::Income)
        } else if s.eq_ignore_ascii_case("expense") {
            Some(Self::Expense)
        } else {
            None
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::recognize(s)
            .ok_or_else(|| format!("Unknown transaction type '{}'. Use income or expense", s))
    }
}

/// One ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Calendar date as `YYYY-MM-DD`
    pub date: String,

    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Free-form category label
    pub category: String,

    /// Amount text as stored; see [`Record::amount_value`]
    pub amount: String,

    #[serde(default)]
    pub description: String,
}

impl Record {
    /// Create a record from its parts
    pub fn new(
        date: impl Into<String>,
        kind: TransactionKind,
        category: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            kind,
            category: category.into(),
            amount: amount.into(),
            description: description.into(),
        }
    }

    /// Parse the stored amount text, `None` if it is not a number
    pub fn amount_value(&self) -> Option<Money> {
        Money::parse(&self.amount).ok()
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date, self.kind, self.category, self.amount
        )?;
        if !self.description.is_empty() {
            write!(f, " ({})", self.description)?;
        }
        Ok(())
    }
}
