//! Entry-time validation
//!
//! User input is checked here once, before the ledger is touched. The store
//! itself never re-validates, so records loaded from a file (or appended
//! directly) may hold text that would be rejected here.

use chrono::NaiveDate;

use crate::error::{PisoError, PisoResult};
use crate::models::{match_category, Money, Record, TransactionKind};

/// Date format of the `date` field
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw user input for a new record
#[derive(Debug, Clone)]
pub struct RecordInput {
    /// `YYYY-MM-DD`; `None` means today
    pub date: Option<String>,
    pub kind: TransactionKind,
    pub category: String,
    pub amount: String,
    pub description: Option<String>,
}

impl RecordInput {
    /// Validate the input and build a record.
    ///
    /// When `allowed_categories` is non-empty the category must be one of
    /// them (case-insensitive); the configured spelling is stored.
    pub fn validate(self, allowed_categories: &[String]) -> PisoResult<Record> {
        let amount = validate_amount(&self.amount)?;

        let date = match self.date.as_deref() {
            Some(text) => validate_date(text)?,
            None => chrono::Local::now().date_naive(),
        };

        let category = validate_category(&self.category, allowed_categories)?;

        Ok(Record {
            date: date.format(DATE_FORMAT).to_string(),
            kind: self.kind,
            category,
            amount: amount.to_plain_string(),
            description: self
                .description
                .map(|d| d.trim().to_string())
                .unwrap_or_default(),
        })
    }
}

/// Changes to an existing record; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    pub date: Option<String>,
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    pub amount: Option<String>,
    pub description: Option<String>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.kind.is_none()
            && self.category.is_none()
            && self.amount.is_none()
            && self.description.is_none()
    }

    /// Merge onto `current`, producing input that must pass validation again
    pub fn apply(self, current: &Record) -> RecordInput {
        RecordInput {
            date: Some(self.date.unwrap_or_else(|| current.date.clone())),
            kind: self.kind.unwrap_or(current.kind),
            category: self.category.unwrap_or_else(|| current.category.clone()),
            amount: self.amount.unwrap_or_else(|| current.amount.clone()),
            description: Some(
                self.description
                    .unwrap_or_else(|| current.description.clone()),
            ),
        }
    }
}

/// Amounts must be positive numbers with at most two decimal places
pub fn validate_amount(text: &str) -> PisoResult<Money> {
    let amount = Money::parse_exact(text).map_err(|e| {
        PisoError::Validation(format!(
            "Invalid amount '{}': {}. Use a positive number like '500' or '1250.75'",
            text.trim(),
            e
        ))
    })?;

    if !amount.is_positive() {
        return Err(PisoError::Validation(format!(
            "Amount must be greater than zero, got '{}'",
            text.trim()
        )));
    }

    Ok(amount)
}

pub fn validate_date(text: &str) -> PisoResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).map_err(|_| {
        PisoError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", text.trim()))
    })
}

pub fn validate_category(name: &str, allowed: &[String]) -> PisoResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PisoError::Validation("Category cannot be empty".into()));
    }

    if allowed.is_empty() {
        return Ok(name.to_string());
    }

    match_category(name, allowed)
        .map(str::to_string)
        .ok_or_else(|| {
            PisoError::Validation(format!(
                "Unknown category '{}'. Choose one of: {}",
                name,
                allowed.join(", ")
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_categories;

    fn input(amount: &str) -> RecordInput {
        RecordInput {
            date: Some("2024-01-02".into()),
            kind: TransactionKind::Expense,
            category: "food".into(),
            amount: amount.into(),
            description: Some("  Groceries ".into()),
        }
    }

    #[test]
    fn test_valid_input() {
        let record = input("500").validate(&default_categories()).unwrap();
        assert_eq!(
            record,
            Record::new("2024-01-02", TransactionKind::Expense, "Food", "500.00", "Groceries")
        );
    }

    #[test]
    fn test_rejects_bad_amounts() {
        for bad in ["", "  ", "abc", "0", "0.00", "-5", "12..5", "1,000", "₱10"] {
            let err = input(bad).validate(&default_categories()).unwrap_err();
            assert!(err.is_validation(), "{:?} should be rejected", bad);
        }
    }

    #[test]
    fn test_rejects_third_decimal_place() {
        let err = validate_amount("10.999").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("decimal places"));

        assert_eq!(validate_amount("10.99").unwrap().cents(), 1099);
    }

    #[test]
    fn test_rejects_bad_date() {
        let mut bad = input("10");
        bad.date = Some("02/01/2024".into());
        assert!(bad.validate(&[]).unwrap_err().is_validation());

        let mut impossible = input("10");
        impossible.date = Some("2024-02-30".into());
        assert!(impossible.validate(&[]).is_err());
    }

    #[test]
    fn test_missing_date_is_today() {
        let mut today = input("10");
        today.date = None;
        let record = today.validate(&[]).unwrap();
        assert_eq!(
            record.date,
            chrono::Local::now().date_naive().format(DATE_FORMAT).to_string()
        );
    }

    #[test]
    fn test_category_rules() {
        let mut unknown = input("10");
        unknown.category = "Rent".into();
        assert!(unknown.clone().validate(&default_categories()).is_err());
        assert_eq!(unknown.validate(&[]).unwrap().category, "Rent");

        let mut empty = input("10");
        empty.category = "   ".into();
        assert!(empty.validate(&[]).is_err());
    }

    #[test]
    fn test_patch_keeps_unset_fields() {
        let current =
            Record::new("2024-01-02", TransactionKind::Expense, "Food", "500.00", "Groceries");
        let patch = RecordPatch {
            amount: Some("450".into()),
            ..RecordPatch::default()
        };
        assert!(!patch.is_empty());

        let updated = patch.apply(&current).validate(&default_categories()).unwrap();
        assert_eq!(updated.amount, "450.00");
        assert_eq!(updated.date, current.date);
        assert_eq!(updated.description, current.description);
    }

    #[test]
    fn test_patch_revalidates_stored_text() {
        let current = Record::new("2024-01-02", TransactionKind::Expense, "Food", "abc", "");
        let patch = RecordPatch {
            description: Some("fixed later".into()),
            ..RecordPatch::default()
        };
        assert!(patch.apply(&current).validate(&[]).is_err());
    }
}
