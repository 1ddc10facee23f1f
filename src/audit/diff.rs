//! Field-level diffs between two versions of a record

use crate::models::Record;

/// Describe which fields changed between `before` and `after`.
///
/// Returns `None` when the records are identical.
pub fn record_diff(before: &Record, after: &Record) -> Option<String> {
    let fields: [(&str, &str, &str); 5] = [
        ("date", before.date.as_str(), after.date.as_str()),
        ("type", before.kind.as_str(), after.kind.as_str()),
        ("category", before.category.as_str(), after.category.as_str()),
        ("amount", before.amount.as_str(), after.amount.as_str()),
        ("description", before.description.as_str(), after.description.as_str()),
    ];

    let changes: Vec<String> = fields
        .iter()
        .filter(|(_, old, new)| old != new)
        .map(|(name, old, new)| format!("{}: {} -> {}", name, quote(old), quote(new)))
        .collect();

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

/// Quote a value for display, truncating long text
fn quote(s: &str) -> String {
    if s.chars().count() > 50 {
        let head: String = s.chars().take(47).collect();
        format!("\"{}...\"", head)
    } else {
        format!("\"{}\"", s)
    }
}
