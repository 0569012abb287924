//! CSV export
//!
//! Builds a single flat table so the file imports cleanly into Excel:
//! `Type,Date,Category/Source,Amount,Description`, UTF-8 BOM, CRLF line
//! endings, RFC 4180 quoting, rows sorted newest first.

use chrono::NaiveDate;

use finpal_types::{Expense, Income};

const HEADER: [&str; 5] = ["Type", "Date", "Category/Source", "Amount", "Description"];

/// Monthly income rows aggregate every source, so they are labelled as a
/// total rather than implying a single origin.
const INCOME_SOURCE_LABEL: &str = "All Sources (Monthly Total)";

/// Render expenses and monthly incomes as one CSV document.
pub fn build_export_csv(expenses: &[Expense], incomes: &[Income]) -> String {
    let mut records: Vec<(NaiveDate, [String; 5])> = Vec::with_capacity(expenses.len() + incomes.len());

    for e in expenses {
        records.push((
            e.date,
            [
                "Expense".to_string(),
                e.date.to_string(),
                e.category.as_str().to_string(),
                format!("{:.2}", e.amount),
                e.description.clone().unwrap_or_default(),
            ],
        ));
    }

    for i in incomes {
        records.push((
            i.month,
            [
                "Income".to_string(),
                i.month.to_string(),
                INCOME_SOURCE_LABEL.to_string(),
                format!("{:.2}", i.amount),
                String::new(),
            ],
        ));
    }

    records.sort_by(|a, b| b.0.cmp(&a.0));

    let mut out = String::from('\u{feff}');
    out.push_str(&HEADER.join(","));
    out.push_str("\r\n");
    for (_, row) in &records {
        let line: Vec<String> = row.iter().map(|f| csv_escape(f)).collect();
        out.push_str(&line.join(","));
        out.push_str("\r\n");
    }
    out
}

/// RFC 4180 field escaping: quote when the value contains a quote, comma,
/// or line break, doubling embedded quotes.
fn csv_escape(value: &str) -> String {
    if value.contains(['"', ',', '\r', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
