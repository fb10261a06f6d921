//! CSV Export functionality
//!
//! Writes the monthly, weekly and category reports in a spreadsheet-friendly
//! layout. Amounts are plain decimals without a currency symbol.

use serde::Serialize;
use std::io::Write;

use crate::analytics::{CategoryTotal, MonthlyTotal, WeeklyTotal};
use crate::error::ExpenseResult;

#[derive(Serialize)]
struct MonthlyRecord<'a> {
    #[serde(rename = "Month")]
    month: String,
    #[serde(rename = "Label")]
    label: &'a str,
    #[serde(rename = "Total")]
    total: String,
    #[serde(rename = "Expenses")]
    expense_count: usize,
}

#[derive(Serialize)]
struct WeeklyRecord<'a> {
    #[serde(rename = "Week")]
    label: &'a str,
    #[serde(rename = "Start")]
    start: String,
    #[serde(rename = "End")]
    end: String,
    #[serde(rename = "Total")]
    total: String,
    #[serde(rename = "Expenses")]
    expense_count: usize,
}

#[derive(Serialize)]
struct CategoryRecord<'a> {
    #[serde(rename = "Category ID")]
    category_id: &'a str,
    #[serde(rename = "Category")]
    name: &'a str,
    #[serde(rename = "Color")]
    color: &'a str,
    #[serde(rename = "Total")]
    total: String,
    #[serde(rename = "Expenses")]
    expense_count: usize,
}

fn write_records<W: Write, T: Serialize>(writer: W, records: Vec<T>) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Export monthly totals to CSV
pub fn export_monthly_csv<W: Write>(totals: &[MonthlyTotal], writer: W) -> ExpenseResult<()> {
    let records: Vec<MonthlyRecord> = totals
        .iter()
        .map(|t| MonthlyRecord {
            month: t.month.to_string(),
            label: &t.label,
            total: format!("{:.2}", t.total.to_decimal()),
            expense_count: t.expense_count,
        })
        .collect();
    write_records(writer, records)
}

/// Export weekly totals to CSV
pub fn export_weekly_csv<W: Write>(totals: &[WeeklyTotal], writer: W) -> ExpenseResult<()> {
    let records: Vec<WeeklyRecord> = totals
        .iter()
        .map(|t| WeeklyRecord {
            label: &t.label,
            start: t.start.to_string(),
            end: t.end.to_string(),
            total: format!("{:.2}", t.total.to_decimal()),
            expense_count: t.expense_count,
        })
        .collect();
    write_records(writer, records)
}

/// Export category totals to CSV
///
/// The uncategorized bucket gets an empty ID column.
pub fn export_categories_csv<W: Write>(totals: &[CategoryTotal], writer: W) -> ExpenseResult<()> {
    let records: Vec<CategoryRecord> = totals
        .iter()
        .map(|t| CategoryRecord {
            category_id: t.category_id.as_ref().map(|id| id.as_str()).unwrap_or(""),
            name: &t.name,
            color: &t.color,
            total: format!("{:.2}", t.total.to_decimal()),
            expense_count: t.expense_count,
        })
        .collect();
    write_records(writer, records)
}
