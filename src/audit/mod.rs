//! Audit logging for ledger mutations
//!
//! Every append, update, removal and clear that goes through
//! [`LedgerService`](crate::services::LedgerService) is recorded as one JSON
//! line in an append-only log, with before/after records and a field diff
//! for updates.

mod diff;
mod entry;
mod logger;

pub use diff::record_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
