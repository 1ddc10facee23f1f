//! Ledger service
//!
//! Ties the pieces a front end needs together: validate input, mutate the
//! store, record the change in the audit log. The front end owns the
//! [`LedgerStore`] and lends it to the service.

use std::path::Path;

use log::{info, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{PisoError, PisoResult};
use crate::export::{export_to, ExportFormat};
use crate::models::Record;
use crate::reports::{summarize, Summary};
use crate::storage::LedgerStore;

use super::entry::{RecordInput, RecordPatch};

/// Service for ledger management
pub struct LedgerService<'a> {
    store: &'a mut LedgerStore,
    categories: &'a [String],
    audit: Option<&'a AuditLogger>,
}

impl<'a> LedgerService<'a> {
    /// Create a service over `store`, accepting `categories` for new entries
    pub fn new(store: &'a mut LedgerStore, categories: &'a [String]) -> Self {
        Self {
            store,
            categories,
            audit: None,
        }
    }

    /// Record every successful mutation in `audit`
    pub fn with_audit(mut self, audit: &'a AuditLogger) -> Self {
        self.audit = Some(audit);
        self
    }

    pub fn records(&self) -> &[Record] {
        self.store.records()
    }

    pub fn summary(&self) -> Summary {
        summarize(self.store.records())
    }

    /// Validate `input` and append it. Returns the stored record.
    pub fn add(&mut self, input: RecordInput) -> PisoResult<Record> {
        let record = input.validate(self.categories)?;

        self.store.append(record.clone())?;
        let index = self.store.len() - 1;
        info!("Appended record #{}: {}", index + 1, record);

        self.audit(AuditEntry::append(index, &record));
        Ok(record)
    }

    /// Apply `patch` to the record at `index`. Returns the updated record.
    pub fn edit(&mut self, index: usize, patch: RecordPatch) -> PisoResult<Record> {
        let current = self
            .store
            .get(index)
            .ok_or_else(|| PisoError::index_out_of_range(index, self.store.len()))?;

        let updated = patch.apply(current).validate(self.categories)?;

        let before = self.store.update_at(index, updated.clone())?;
        info!("Updated record #{}: {}", index + 1, updated);

        self.audit(AuditEntry::update(index, &before, &updated));
        Ok(updated)
    }

    /// Remove the record at `index`. Returns the removed record.
    pub fn remove(&mut self, index: usize) -> PisoResult<Record> {
        let removed = self.store.remove_at(index)?;
        info!("Removed record #{}: {}", index + 1, removed);

        self.audit(AuditEntry::remove(index, &removed));
        Ok(removed)
    }

    /// Remove every record. Returns how many were dropped.
    pub fn clear(&mut self) -> PisoResult<usize> {
        let dropped = self.store.clear()?;
        info!("Cleared {} record(s)", dropped);

        self.audit(AuditEntry::clear(dropped));
        Ok(dropped)
    }

    /// Copy the current records to `path`
    pub fn export(&self, path: impl AsRef<Path>) -> PisoResult<ExportFormat> {
        export_to(path, self.store.records())
    }

    fn audit(&self, entry: AuditEntry) {
        if let Some(logger) = self.audit {
            if let Err(e) = logger.log(&entry) {
                warn!("Could not write audit entry: {}", e);
            }
        }
    }
}
