//! Reports module for PisoPiso
//!
//! Derived views over the ledger: the income/expense/balance summary and a
//! per-category breakdown.

pub mod summary;

pub use summary::{category_breakdown, summarize, BalanceSign, CategoryTotal, Summary};
