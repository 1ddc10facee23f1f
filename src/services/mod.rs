//! Business logic layer
//!
//! Entry validation and the ledger service that front ends call into.

pub mod entry;
pub mod ledger;

pub use entry::{
    validate_amount, validate_category, validate_date, RecordInput, RecordPatch, DATE_FORMAT,
};
pub use ledger::LedgerService;
