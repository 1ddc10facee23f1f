//! Export module for PisoPiso
//!
//! Copies the current records to an arbitrary path. Exporting never touches
//! the live ledger or its backing file.
//!
//! - CSV: the backing-file encoding (default)
//! - JSON / YAML: a document with metadata and the summary

pub mod csv;
pub mod document;

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::{PisoError, PisoResult};
use crate::models::Record;

pub use self::csv::export_records_csv;
pub use document::{export_records_json, export_records_yaml, LedgerExport, EXPORT_SCHEMA_VERSION};

/// Output format of an export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// Pick a format from the file extension; unknown extensions get CSV
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("json") => Self::Json,
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Csv,
        }
    }

    /// Write `records` in this format
    pub fn write<W: Write>(&self, writer: &mut W, records: &[Record]) -> PisoResult<()> {
        match self {
            Self::Csv => export_records_csv(writer, records),
            Self::Json => export_records_json(writer, records),
            Self::Yaml => export_records_yaml(writer, records),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "CSV"),
            Self::Json => write!(f, "JSON"),
            Self::Yaml => write!(f, "YAML"),
        }
    }
}

/// Write `records` to `path`, choosing the format from its extension
pub fn export_to(path: impl AsRef<Path>, records: &[Record]) -> PisoResult<ExportFormat> {
    let path = path.as_ref();
    let format = ExportFormat::from_path(path);

    let file = File::create(path).map_err(|e| {
        PisoError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    format.write(&mut writer, records)?;
    writer
        .flush()
        .map_err(|e| PisoError::Export(format!("Failed to flush {}: {}", path.display(), e)))?;

    info!(
        "Exported {} record(s) as {} to {}",
        records.len(),
        format,
        path.display()
    );
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use crate::storage::LedgerStore;
    use tempfile::TempDir;

    fn records() -> Vec<Record> {
        vec![Record::new("2024-01-02", TransactionKind::Expense, "Food", "500.00", "Groceries")]
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ExportFormat::from_path(Path::new("a.json")), ExportFormat::Json);
        assert_eq!(ExportFormat::from_path(Path::new("a.YML")), ExportFormat::Yaml);
        assert_eq!(ExportFormat::from_path(Path::new("a.csv")), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path(Path::new("backup")), ExportFormat::Csv);
    }

    #[test]
    fn test_export_csv_loads_as_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("copy.csv");

        assert_eq!(export_to(&path, &records()).unwrap(), ExportFormat::Csv);
        assert_eq!(LedgerStore::load(&path).unwrap(), records());
    }

    #[test]
    fn test_export_does_not_touch_live_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = LedgerStore::open(temp_dir.path().join("live.csv")).unwrap();
        store.append(records()[0].clone()).unwrap();
        let before = std::fs::read(store.path()).unwrap();

        export_to(temp_dir.path().join("copy.json"), store.records()).unwrap();

        assert_eq!(std::fs::read(store.path()).unwrap(), before);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("copy.csv");

        assert!(matches!(export_to(&path, &records()), Err(PisoError::Export(_))));
    }
}
