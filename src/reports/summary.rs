//! Ledger summary
//!
//! Totals income and expense over a slice of records. Amounts that do not
//! parse count as zero; they are tallied in [`Summary::unparsed`] but never
//! raise an error.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::models::{Money, Record, TransactionKind};

/// Three-way classification of a balance, used to pick a visual treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceSign {
    Negative,
    Neutral,
    Positive,
}

impl BalanceSign {
    pub fn of(amount: Money) -> Self {
        if amount.is_negative() {
            Self::Negative
        } else if amount.is_zero() {
            Self::Neutral
        } else {
            Self::Positive
        }
    }
}

impl fmt::Display for BalanceSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative => write!(f, "negative"),
            Self::Neutral => write!(f, "neutral"),
            Self::Positive => write!(f, "positive"),
        }
    }
}

/// Derived totals over a ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub total_income: Money,
    pub total_expense: Money,
    /// `total_income - total_expense`
    pub balance: Money,
    /// Records whose amount text did not parse and so contributed zero
    pub unparsed: usize,
}

impl Summary {
    pub fn sign(&self) -> BalanceSign {
        BalanceSign::of(self.balance)
    }
}

/// Compute income, expense and balance for `records`
pub fn summarize(records: &[Record]) -> Summary {
    let mut summary = Summary::default();

    for record in records {
        let amount = match record.amount_value() {
            Some(amount) => amount,
            None => {
                summary.unparsed += 1;
                Money::zero()
            }
        };

        if record.is_income() {
            summary.total_income += amount;
        } else {
            summary.total_expense += amount;
        }
    }

    summary.balance = summary.total_income - summary.total_expense;
    summary
}

/// Total for one category and kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub kind: TransactionKind,
    pub total: Money,
    pub count: usize,
}

/// Per-category totals, ordered by category name then kind (income first)
pub fn category_breakdown(records: &[Record]) -> Vec<CategoryTotal> {
    let mut totals: BTreeMap<(String, TransactionKind), (Money, usize)> = BTreeMap::new();

    for record in records {
        let entry = totals
            .entry((record.category.clone(), record.kind))
            .or_insert((Money::zero(), 0));
        entry.0 += record.amount_value().unwrap_or_default();
        entry.1 += 1;
    }

    totals
        .into_iter()
        .map(|((category, kind), (total, count))| CategoryTotal {
            category,
            kind,
            total,
            count,
        })
        .collect()
}
