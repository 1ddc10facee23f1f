//! File I/O for the ledger's delimited text format
//!
//! The backing file is UTF-8 CSV with a fixed header row. Writes go to a
//! sibling temp file that is synced and then renamed over the target, so a
//! crash mid-write leaves the previous file intact.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::models::{Record, TransactionKind};

/// Header row of every ledger file, in column order
pub const LEDGER_HEADER: [&str; 5] = ["date", "type", "category", "amount", "description"];

/// Encode records as ledger CSV (header row first) into `writer`
pub fn write_records<W: Write>(writer: W, records: &[Record]) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(LEDGER_HEADER)?;
    for record in records {
        wtr.write_record([
            record.date.as_str(),
            record.kind.as_str(),
            record.category.as_str(),
            record.amount.as_str(),
            record.description.as_str(),
        ])?;
    }

    wtr.flush()
}

/// Decode ledger CSV from `reader`.
///
/// Columns are matched by header name, so their order does not matter.
/// Rows are not validated: missing columns and short rows decode as empty
/// text, extra columns are dropped, and any type other than exactly `Income`
/// or `Expense` decodes as [`TransactionKind::Expense`]. Each irregularity is logged. `source` only
/// labels those log lines.
pub fn read_records<R: Read>(reader: R, source: &str) -> io::Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }

    let columns: Vec<Option<usize>> = LEDGER_HEADER
        .iter()
        .map(|name| {
            let position = headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == *name);
            if position.is_none() {
                warn!("{}: missing '{}' column, reading it as empty", source, name);
            }
            position
        })
        .collect();

    let mut records = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let fields = result?;
        // header is line 1
        let line = fields.position().map_or(row as u64 + 2, |p| p.line());

        if fields.len() != headers.len() {
            warn!(
                "{}:{}: expected {} fields, found {}",
                source,
                line,
                headers.len(),
                fields.len()
            );
        }

        let field = |i: usize| -> String {
            columns[i]
                .and_then(|pos| fields.get(pos))
                .unwrap_or("")
                .to_string()
        };

        let kind_text = field(1);
        let kind = TransactionKind::from_stored(&kind_text).unwrap_or_else(|| {
            warn!(
                "{}:{}: type '{}' is neither Income nor Expense, counting it as Expense",
                source, line, kind_text
            );
            TransactionKind::Expense
        });

        records.push(Record {
            date: field(0),
            kind,
            category: field(2),
            amount: field(3),
            description: field(4),
        });
    }

    Ok(records)
}

/// Read a ledger file; a missing file is an empty ledger
pub fn read_ledger_file(path: &Path) -> io::Result<Vec<Record>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("{} does not exist, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    read_records(BufReader::new(file), &path.display().to_string())
}

/// Rewrite a ledger file from scratch (write to temp, then rename)
pub fn write_ledger_atomic(path: &Path, records: &[Record]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = temp_path_for(path)?;

    let result = write_then_sync(&temp_path, records)
        .and_then(|()| fs::rename(&temp_path, path));

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    } else {
        debug!("Wrote {} record(s) to {}", records.len(), path.display());
    }

    result
}

fn write_then_sync(temp_path: &Path, records: &[Record]) -> io::Result<()> {
    let file = File::create(temp_path)?;
    let mut writer = BufWriter::new(file);
    write_records(&mut writer, records)?;
    writer.flush()?;
    writer.get_ref().sync_all()
}

/// Temp file next to `path` (same directory keeps the rename atomic)
fn temp_path_for(path: &Path) -> io::Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} does not name a file", path.display()),
        )
    })?;

    let mut temp_name = OsString::from(name);
    temp_name.push(".tmp");
    Ok(path.with_file_name(temp_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vec<Record> {
        vec![
            Record::new("2024-01-01", TransactionKind::Income, "Salary", "50000.00", "Jan pay"),
            Record::new(
                "2024-01-02",
                TransactionKind::Expense,
                "Food",
                "500.00",
                "Groceries, \"fresh\" produce",
            ),
        ]
    }

    #[test]
    fn test_write_records_quotes_fields() {
        let mut out = Vec::new();
        write_records(&mut out, &sample()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "date,type,category,amount,description\n\
             2024-01-01,Income,Salary,50000.00,Jan pay\n\
             2024-01-02,Expense,Food,500.00,\"Groceries, \"\"fresh\"\" produce\"\n"
        );
    }

    #[test]
    fn test_write_empty_is_header_only() {
        let mut out = Vec::new();
        write_records(&mut out, &[]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "date,type,category,amount,description\n"
        );
    }

    #[test]
    fn test_read_back_what_was_written() {
        let mut out = Vec::new();
        write_records(&mut out, &sample()).unwrap();

        let records = read_records(out.as_slice(), "test").unwrap();
        assert_eq!(records, sample());
    }

    #[test]
    fn test_read_maps_columns_by_header() {
        let text = "amount,description,date,category,type\n12.00,Bus,2024-02-03,Transport,Expense\n";
        let records = read_records(text.as_bytes(), "test").unwrap();

        assert_eq!(
            records,
            vec![Record::new("2024-02-03", TransactionKind::Expense, "Transport", "12.00", "Bus")]
        );
    }

    #[test]
    fn test_read_passes_malformed_rows_through() {
        let text = "date,type,category,amount,description\n\
                    not-a-date,Refund,,abc\n\
                    2024-03-01,income,Salary,100,x,extra\n";
        let records = read_records(text.as_bytes(), "test").unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, "not-a-date");
        assert_eq!(records[0].kind, TransactionKind::Expense);
        assert_eq!(records[0].category, "");
        assert_eq!(records[0].amount, "abc");
        assert_eq!(records[0].description, "");
        assert_eq!(records[1].kind, TransactionKind::Expense);
        assert_eq!(records[1].description, "x");
    }

    #[test]
    fn test_read_type_is_case_sensitive() {
        let text = "date,type,category,amount,description\n\
                    2024-01-01,income,Salary,100,\n\
                    2024-01-02,INCOME,Salary,5,\n\
                    2024-01-03,Income,Salary,7,\n";
        let records = read_records(text.as_bytes(), "test").unwrap();

        let kinds: Vec<_> = records.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TransactionKind::Expense,
                TransactionKind::Expense,
                TransactionKind::Income
            ]
        );

        let mut out = Vec::new();
        write_records(&mut out, &records).unwrap();
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("2024-01-01,Expense,Salary,100,\n"));
    }

    #[test]
    fn test_read_missing_column() {
        let text = "date,type,amount\n2024-01-01,Income,10\n";
        let records = read_records(text.as_bytes(), "test").unwrap();
        assert_eq!(records[0].category, "");
        assert_eq!(records[0].description, "");
        assert_eq!(records[0].amount, "10");
    }

    #[test]
    fn test_read_empty_input() {
        assert!(read_records("".as_bytes(), "test").unwrap().is_empty());
    }

    #[test]
    fn test_read_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.csv");
        assert!(read_ledger_file(&path).unwrap().is_empty());
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");

        write_ledger_atomic(&path, &sample()).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("ledger.csv.tmp").exists());
        assert_eq!(read_ledger_file(&path).unwrap(), sample());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("ledger.csv");

        write_ledger_atomic(&path, &[]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_fails_when_parent_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let result = write_ledger_atomic(&blocker.join("ledger.csv"), &sample());
        assert!(result.is_err());
    }
}
