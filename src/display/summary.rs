//! Summary display formatting

use crate::reports::{BalanceSign, CategoryTotal, Summary};

const RED: &str = "\x1b[31;1m";
const GRAY: &str = "\x1b[90;1m";
const GREEN: &str = "\x1b[32;1m";
const RESET: &str = "\x1b[0m";

/// Terminal color for a balance of the given sign
pub fn sign_color(sign: BalanceSign) -> &'static str {
    match sign {
        BalanceSign::Negative => RED,
        BalanceSign::Neutral => GRAY,
        BalanceSign::Positive => GREEN,
    }
}

/// One-line summary: income, expense and balance.
///
/// With `colored` the balance is wrapped in ANSI color for its sign.
pub fn format_summary_line(summary: &Summary, symbol: &str, colored: bool) -> String {
    let balance = format!("Balance: {}", summary.balance.format_with_symbol(symbol));
    let balance = if colored {
        format!("{}{}{}", sign_color(summary.sign()), balance, RESET)
    } else {
        balance
    };

    let mut line = format!(
        "Total Income: {}   Total Expense: {}   {}",
        summary.total_income.format_with_symbol(symbol),
        summary.total_expense.format_with_symbol(symbol),
        balance
    );

    if summary.unparsed > 0 {
        line.push_str(&format!(
            "\n({} record(s) with unreadable amounts counted as zero)",
            summary.unparsed
        ));
    }

    line
}

/// Per-category totals, one line each
pub fn format_category_breakdown(totals: &[CategoryTotal], symbol: &str) -> String {
    if totals.is_empty() {
        return "No transactions recorded.".to_string();
    }

    let width = totals
        .iter()
        .map(|t| t.category.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:<7}  {:>5}  {:>16}\n",
        "Category",
        "Type",
        "Count",
        "Total",
        width = width
    ));
    output.push_str(&format!("{}\n", "-".repeat(width + 34)));

    for total in totals {
        output.push_str(&format!(
            "{:<width$}  {:<7}  {:>5}  {:>16}\n",
            total.category,
            total.kind.as_str(),
            total.count,
            total.total.format_with_symbol(symbol),
            width = width
        ));
    }

    output
}
