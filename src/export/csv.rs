//! CSV Export functionality
//!
//! Exports one row per stored month with every category as its own column.

use crate::error::{SpendError, SpendResult};
use crate::models::ExpenseCategory;
use crate::reports::HistoryReport;
use crate::storage::SessionStore;
use std::io::Write;

/// Export all months to CSV, chronologically
pub fn export_months_csv<W: Write>(store: &SessionStore, writer: &mut W) -> SpendResult<()> {
    let history = HistoryReport::generate(store);
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec!["Month".to_string(), "Income".to_string()];
    header.extend(ExpenseCategory::ALL.iter().map(|c| c.name().to_string()));
    header.extend(
        ["Total Expenses", "Savings", "Savings Rate"]
            .iter()
            .map(|s| s.to_string()),
    );
    csv_writer
        .write_record(&header)
        .map_err(|e| SpendError::Export(e.to_string()))?;

    for row in &history.rows {
        let Some(record) = store.get(&row.month) else {
            continue;
        };

        let mut fields = vec![row.month.to_string(), format!("{:.2}", row.income.as_f64())];
        fields.extend(
            record
                .expenses
                .iter()
                .map(|(_, amount)| format!("{:.2}", amount.as_f64())),
        );
        fields.push(format!("{:.2}", row.total_expenses.as_f64()));
        fields.push(format!("{:.2}", row.savings.as_f64()));
        fields.push(format!("{:.2}", row.savings_rate));

        csv_writer
            .write_record(&fields)
            .map_err(|e| SpendError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| SpendError::Export(e.to_string()))?;
    Ok(())
}
