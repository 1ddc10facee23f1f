//! JSON and YAML export
//!
//! Both formats share one document shape: metadata, the summary at export
//! time, and the records in ledger order.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PisoError, PisoResult};
use crate::models::Record;
use crate::reports::summarize;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Totals as they stood when the export was taken
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSummary {
    pub total_income: String,
    pub total_expense: String,
    pub balance: String,
    pub sign: String,
    pub unparsed_amounts: usize,
}

/// Full ledger export document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    /// Version of the application that wrote the export
    pub app_version: String,
    pub record_count: usize,
    pub summary: ExportSummary,
    pub records: Vec<Record>,
}

impl LedgerExport {
    pub fn from_records(records: &[Record]) -> Self {
        let summary = summarize(records);
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            record_count: records.len(),
            summary: ExportSummary {
                total_income: summary.total_income.to_plain_string(),
                total_expense: summary.total_expense.to_plain_string(),
                balance: summary.balance.to_plain_string(),
                sign: summary.sign().to_string(),
                unparsed_amounts: summary.unparsed,
            },
            records: records.to_vec(),
        }
    }
}

/// Write `records` as a pretty-printed JSON document
pub fn export_records_json<W: Write>(writer: &mut W, records: &[Record]) -> PisoResult<()> {
    let export = LedgerExport::from_records(records);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| PisoError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| PisoError::Export(e.to_string()))
}

/// Write `records` as a YAML document
pub fn export_records_yaml<W: Write>(writer: &mut W, records: &[Record]) -> PisoResult<()> {
    let export = LedgerExport::from_records(records);

    writeln!(writer, "# PisoPiso ledger export")
        .map_err(|e| PisoError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| PisoError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| PisoError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;

    fn records() -> Vec<Record> {
        vec![
            Record::new("2024-01-01", TransactionKind::Income, "Salary", "50000.00", "Jan pay"),
            Record::new("2024-01-02", TransactionKind::Expense, "Food", "500.00", "Groceries"),
        ]
    }

    #[test]
    fn test_document_summary() {
        let export = LedgerExport::from_records(&records());
        assert_eq!(export.record_count, 2);
        assert_eq!(export.summary.balance, "49500.00");
        assert_eq!(export.summary.sign, "positive");
    }

    #[test]
    fn test_json_export_parses_back() {
        let mut out = Vec::new();
        export_records_json(&mut out, &records()).unwrap();

        let parsed: LedgerExport = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.records, records());
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
    }

    #[test]
    fn test_yaml_export_parses_back() {
        let mut out = Vec::new();
        export_records_yaml(&mut out, &records()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("# PisoPiso ledger export"));

        let parsed: LedgerExport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.records, records());
        assert_eq!(parsed.summary.total_expense, "500.00");
    }
}
