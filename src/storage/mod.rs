//! Storage layer for PisoPiso
//!
//! A single delimited-text ledger file per store, rewritten atomically on
//! every mutation.

pub mod file_io;
pub mod ledger;

pub use file_io::{read_records, write_records, LEDGER_HEADER};
pub use ledger::LedgerStore;
