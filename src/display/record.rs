//! Record display formatting

use std::fmt::Write;

use chrono::NaiveDate;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Record;
use crate::services::DATE_FORMAT;

/// Render a stored date with `date_format`.
///
/// Dates that are not `YYYY-MM-DD`, or formats chrono cannot render, fall
/// back to the stored text.
pub fn format_date(stored: &str, date_format: &str) -> String {
    let Ok(date) = NaiveDate::parse_from_str(stored, DATE_FORMAT) else {
        return stored.to_string();
    };

    let mut out = String::new();
    match write!(out, "{}", date.format(date_format)) {
        Ok(()) => out,
        Err(_) => stored.to_string(),
    }
}

#[derive(Tabled)]
struct RecordRow<'a> {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: &'a str,
    #[tabled(rename = "Category")]
    category: &'a str,
    #[tabled(rename = "Amount")]
    amount: &'a str,
    #[tabled(rename = "Description")]
    description: &'a str,
}

/// Format the ledger as a table; rows are numbered from 1
pub fn format_record_table(records: &[Record], date_format: &str) -> String {
    if records.is_empty() {
        return "No transactions recorded.".to_string();
    }

    let rows = records.iter().enumerate().map(|(i, r)| RecordRow {
        number: i + 1,
        date: format_date(&r.date, date_format),
        kind: r.kind.as_str(),
        category: &r.category,
        amount: &r.amount,
        description: &r.description,
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(4)).with(Alignment::right()));
    table.to_string()
}

/// Format one record as labelled lines
pub fn format_record_details(number: usize, record: &Record, date_format: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Record:      #{}\n", number));
    output.push_str(&format!(
        "Date:        {}\n",
        format_date(&record.date, date_format)
    ));
    output.push_str(&format!("Type:        {}\n", record.kind));
    output.push_str(&format!("Category:    {}\n", record.category));
    output.push_str(&format!("Amount:      {}\n", record.amount));
    if !record.description.is_empty() {
        output.push_str(&format!("Description: {}\n", record.description));
    }
    output
}
