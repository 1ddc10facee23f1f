//! Core data models for PisoPiso
//!
//! Ledger records, their kind, the fixed category set offered for entry,
//! and the integer-cents money type used for arithmetic.

pub mod category;
pub mod money;
pub mod record;

pub use category::{default_categories, match_category, DEFAULT_CATEGORIES};
pub use money::{Money, MoneyParseError, DEFAULT_CURRENCY_SYMBOL};
pub use record::{Record, TransactionKind};
