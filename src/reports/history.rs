//! History Report
//!
//! Derives the per-month summary table from the session store: totals,
//! savings and savings rate for every stored month in chronological order.

use crate::error::{SpendError, SpendResult};
use crate::models::{Money, MonthId, MonthlyRecord};
use crate::storage::SessionStore;
use std::io::Write;

/// Derived totals for a single month
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthSummary {
    /// Month the summary describes
    pub month: MonthId,
    /// Income entered for the month
    pub income: Money,
    /// Sum of all seven expense categories
    pub total_expenses: Money,
    /// Income minus total expenses (may be negative)
    pub savings: Money,
    /// Savings as a percentage of income, rounded to 2 decimals; 0 when income is 0
    pub savings_rate: f64,
}

impl MonthSummary {
    /// Summarize a single record
    pub fn summarize(month: MonthId, record: &MonthlyRecord) -> Self {
        let total_expenses = record.total_expenses();
        let savings = record.income - total_expenses;

        Self {
            month,
            income: record.income,
            total_expenses,
            savings,
            savings_rate: savings_rate(record.income, savings),
        }
    }
}

/// `savings / income * 100`, rounded to 2 decimals, or 0 without income
pub fn savings_rate(income: Money, savings: Money) -> f64 {
    if income.is_zero() {
        return 0.0;
    }
    let rate = savings.cents() as f64 / income.cents() as f64 * 100.0;
    (rate * 100.0).round() / 100.0
}

/// History Report
#[derive(Debug, Clone, Default)]
pub struct HistoryReport {
    /// One row per stored month, ascending
    pub rows: Vec<MonthSummary>,
}

impl HistoryReport {
    /// Generate the history table for every month in the store
    pub fn generate(store: &SessionStore) -> Self {
        let rows = store
            .iter()
            .map(|(month, record)| MonthSummary::summarize(*month, record))
            .collect();

        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Total expenses per month in dollars, chronological
    pub fn expense_series(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.total_expenses.as_f64()).collect()
    }

    /// Income per month in dollars, chronological
    pub fn income_series(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.income.as_f64()).collect()
    }

    /// Savings per month in dollars, chronological
    pub fn savings_series(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.savings.as_f64()).collect()
    }

    /// Arithmetic mean of all incomes, or 0 for an empty history
    pub fn average_income(&self) -> f64 {
        if self.rows.is_empty() {
            return 0.0;
        }
        self.income_series().iter().sum::<f64>() / self.rows.len() as f64
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Monthly History\n");
        output.push_str(&"=".repeat(64));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No data yet. Add a month and save some values.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<10} {:>14} {:>14} {:>14} {:>9}\n",
            "Month", "Income", "Expenses", "Savings", "Rate"
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<10} {:>14} {:>14} {:>14} {:>8.2}%\n",
                row.month, row.income, row.total_expenses, row.savings, row.savings_rate
            ));
        }

        let total_income: Money = self.rows.iter().map(|r| r.income).sum();
        let total_expenses: Money = self.rows.iter().map(|r| r.total_expenses).sum();
        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<10} {:>14} {:>14} {:>14}\n",
            "TOTAL",
            total_income,
            total_expenses,
            total_income - total_expenses
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SpendResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .write_record(["Month", "Income", "Total Expenses", "Savings", "Savings Rate"])
            .map_err(|e| SpendError::Export(e.to_string()))?;

        for row in &self.rows {
            csv_writer
                .write_record([
                    row.month.to_string(),
                    format!("{:.2}", row.income.as_f64()),
                    format!("{:.2}", row.total_expenses.as_f64()),
                    format!("{:.2}", row.savings.as_f64()),
                    format!("{:.2}", row.savings_rate),
                ])
                .map_err(|e| SpendError::Export(e.to_string()))?;
        }

        csv_writer
            .flush()
            .map_err(|e| SpendError::Export(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryAmounts, ExpenseCategory};

    fn month(s: &str) -> MonthId {
        MonthId::parse(s).unwrap()
    }

    fn record(income: i64, pairs: &[(ExpenseCategory, i64)]) -> MonthlyRecord {
        MonthlyRecord::new(
            Money::from_dollars(income),
            CategoryAmounts::from_pairs(pairs.iter().map(|(c, a)| (*c, Money::from_dollars(*a)))),
        )
    }

    #[test]
    fn test_summarize_totals_and_rate() {
        let r = record(
            3000,
            &[
                (ExpenseCategory::Food, 500),
                (ExpenseCategory::Rent, 1200),
                (ExpenseCategory::Utilities, 300),
            ],
        );
        let summary = MonthSummary::summarize(month("2025-01"), &r);

        assert_eq!(summary.total_expenses, Money::from_dollars(2000));
        assert_eq!(summary.savings, Money::from_dollars(1000));
        assert_eq!(summary.savings_rate, 33.33);
    }

    #[test]
    fn test_summarize_zero_income() {
        let r = record(0, &[(ExpenseCategory::Food, 100)]);
        let summary = MonthSummary::summarize(month("2025-01"), &r);

        assert_eq!(summary.savings, Money::from_dollars(-100));
        assert_eq!(summary.savings_rate, 0.0);
    }

    #[test]
    fn test_negative_savings_rate() {
        let r = record(1000, &[(ExpenseCategory::Rent, 1500)]);
        let summary = MonthSummary::summarize(month("2025-01"), &r);
        assert_eq!(summary.savings_rate, -50.0);
    }

    #[test]
    fn test_history_sorted_one_row_per_month() {
        let mut store = SessionStore::new();
        store.replace(month("2025-03"), record(100, &[])).unwrap();
        store.replace(month("2025-01"), record(200, &[])).unwrap();
        store.replace(month("2025-02"), record(300, &[])).unwrap();
        store.replace(month("2025-01"), record(250, &[])).unwrap();

        let report = HistoryReport::generate(&store);
        let months: Vec<String> = report.rows.iter().map(|r| r.month.to_string()).collect();

        assert_eq!(months, vec!["2025-01", "2025-02", "2025-03"]);
        assert_eq!(report.income_series(), vec![250.0, 300.0, 100.0]);
    }

    #[test]
    fn test_empty_history() {
        let report = HistoryReport::generate(&SessionStore::new());
        assert!(report.is_empty());
        assert_eq!(report.average_income(), 0.0);
        assert!(report.format_terminal().contains("No data yet"));
    }

    #[test]
    fn test_format_terminal() {
        let mut store = SessionStore::new();
        store
            .replace(month("2025-01"), record(3000, &[(ExpenseCategory::Rent, 1200)]))
            .unwrap();

        let output = HistoryReport::generate(&store).format_terminal();
        assert!(output.contains("2025-01"));
        assert!(output.contains("$3,000.00"));
        assert!(output.contains("60.00%"));
    }

    #[test]
    fn test_export_csv() {
        let mut store = SessionStore::new();
        store
            .replace(month("2025-01"), record(3000, &[(ExpenseCategory::Rent, 1200)]))
            .unwrap();

        let mut buf = Vec::new();
        HistoryReport::generate(&store).export_csv(&mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();

        assert!(csv.starts_with("Month,Income,Total Expenses,Savings,Savings Rate\n"));
        assert!(csv.contains("2025-01,3000.00,1200.00,1800.00,60.00"));
    }
}
