//! File-backed ledger store
//!
//! [`LedgerStore`] owns the ordered list of records and keeps its backing
//! file identical to that list: every successful mutation rewrites the whole
//! file. A failed rewrite is reported as [`PisoError::Persistence`] but the
//! in-memory change stays applied, so memory and disk differ until the next
//! successful write.
//!
//! The store assumes it is the only writer of its file.

use std::path::{Path, PathBuf};

use log::info;

use crate::error::{PisoError, PisoResult};
use crate::models::Record;

use super::file_io::{read_ledger_file, write_ledger_atomic};

/// Ordered, file-backed collection of records
#[derive(Debug)]
pub struct LedgerStore {
    path: PathBuf,
    records: Vec<Record>,
}

impl LedgerStore {
    /// Read the records stored at `path`, in file order.
    ///
    /// A missing file is an empty ledger, not an error.
    pub fn load(path: impl AsRef<Path>) -> PisoResult<Vec<Record>> {
        let path = path.as_ref();
        read_ledger_file(path).map_err(|e| {
            PisoError::Storage(format!("Failed to read {}: {}", path.display(), e))
        })
    }

    /// Open the ledger backed by `path`, loading whatever it currently holds
    pub fn open(path: impl Into<PathBuf>) -> PisoResult<Self> {
        let path = path.into();
        let records = Self::load(&path)?;
        info!("Loaded {} record(s) from {}", records.len(), path.display());
        Ok(Self { path, records })
    }

    /// Replace the in-memory records with the backing file's contents
    pub fn reload(&mut self) -> PisoResult<()> {
        self.records = Self::load(&self.path)?;
        Ok(())
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records in ledger order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add a record at the end and persist
    pub fn append(&mut self, record: Record) -> PisoResult<()> {
        self.records.push(record);
        self.persist()
    }

    /// Replace the record at `index` in place and persist.
    ///
    /// Returns the record that was replaced.
    pub fn update_at(&mut self, index: usize, record: Record) -> PisoResult<Record> {
        self.check_index(index)?;
        let old = std::mem::replace(&mut self.records[index], record);
        self.persist()?;
        Ok(old)
    }

    /// Delete the record at `index` and persist.
    ///
    /// Returns the removed record.
    pub fn remove_at(&mut self, index: usize) -> PisoResult<Record> {
        self.check_index(index)?;
        let removed = self.records.remove(index);
        self.persist()?;
        Ok(removed)
    }

    /// Drop every record and persist a header-only file.
    ///
    /// Returns how many records were dropped.
    pub fn clear(&mut self) -> PisoResult<usize> {
        let dropped = self.records.len();
        self.records.clear();
        self.persist()?;
        Ok(dropped)
    }

    /// Rewrite the backing file from the in-memory records
    pub fn persist(&self) -> PisoResult<()> {
        write_ledger_atomic(&self.path, &self.records).map_err(|source| {
            PisoError::Persistence {
                path: self.path.clone(),
                source,
            }
        })
    }

    fn check_index(&self, index: usize) -> PisoResult<()> {
        if index < self.records.len() {
            Ok(())
        } else {
            Err(PisoError::index_out_of_range(index, self.records.len()))
        }
    }
}
