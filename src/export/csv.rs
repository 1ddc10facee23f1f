//! CSV export
//!
//! Uses the same encoding as the ledger's backing file, so an export can be
//! opened directly as a ledger.

use std::io::Write;

use crate::error::{PisoError, PisoResult};
use crate::models::Record;
use crate::storage::write_records;

/// Write `records` as ledger CSV
pub fn export_records_csv<W: Write>(writer: &mut W, records: &[Record]) -> PisoResult<()> {
    write_records(writer, records).map_err(|e| PisoError::Export(e.to_string()))
}
