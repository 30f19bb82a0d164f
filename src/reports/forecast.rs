//! Forecast Report
//!
//! Extrapolates next month's total expenses from the history table and ranks
//! the largest expense categories of the most recently added month.
//!
//! The two outputs have independent data requirements: a forecast needs at
//! least two months, the cut-back list needs one.

use crate::config::settings::MIN_FORECAST_MONTHS;
use crate::error::{SpendError, SpendResult};
use crate::models::{ExpenseCategory, Money, MonthId};
use crate::storage::SessionStore;

use super::history::HistoryReport;
use super::trend::LinearTrend;

/// Default number of categories suggested for cutting back
pub const DEFAULT_CUT_BACK_COUNT: usize = 3;

/// Default reduction guidance
pub const DEFAULT_REDUCTION_RANGE: &str = "10\u{2013}15%";

/// Next-month expense forecast
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastReport {
    /// Months of history the line was fitted through
    pub months: usize,
    /// Month-over-month change in total expenses
    pub slope: f64,
    /// Expenses extrapolated to the month after the last stored one
    pub predicted_expenses: f64,
    /// Mean income across all stored months
    pub avg_income: f64,
    /// Average income minus predicted expenses (may be negative)
    pub suggested_savings: f64,
}

impl ForecastReport {
    /// Generate a forecast from the store, requiring two months of history
    pub fn generate(store: &SessionStore) -> SpendResult<Self> {
        Self::generate_with_minimum(store, MIN_FORECAST_MONTHS)
    }

    /// Generate a forecast requiring at least `min_months` of history
    ///
    /// The minimum never drops below two, the fewest points a line fits.
    pub fn generate_with_minimum(store: &SessionStore, min_months: usize) -> SpendResult<Self> {
        Self::from_history(&HistoryReport::generate(store), min_months)
    }

    /// Forecast from an already generated history table
    pub fn from_history(history: &HistoryReport, min_months: usize) -> SpendResult<Self> {
        let needed = min_months.max(MIN_FORECAST_MONTHS);
        let expenses = history.expense_series();
        let n = expenses.len();

        let trend = match LinearTrend::fit(&expenses) {
            Some(trend) if n >= needed => trend,
            _ => {
                return Err(SpendError::InsufficientData {
                    needed,
                    available: n,
                })
            }
        };

        let predicted_expenses = trend.predict(n as f64);
        let avg_income = history.average_income();
        tracing::debug!(
            months = n,
            slope = trend.slope,
            predicted_expenses,
            "fitted expense trend"
        );

        Ok(Self {
            months: n,
            slope: trend.slope,
            predicted_expenses,
            avg_income,
            suggested_savings: avg_income - predicted_expenses,
        })
    }

    /// Predicted expenses rounded to the cent
    pub fn predicted_expenses_money(&self) -> Money {
        Money::from_f64(self.predicted_expenses)
    }

    /// Suggested savings rounded to the cent
    pub fn suggested_savings_money(&self) -> Money {
        Money::from_f64(self.suggested_savings)
    }

    /// Slope rounded to the cent
    pub fn trend_money(&self) -> Money {
        Money::from_f64(self.slope)
    }

    /// Short description of the trend direction
    pub fn trend_label(&self) -> &'static str {
        if self.slope.abs() < 0.005 {
            "flat"
        } else if self.slope > 0.0 {
            "rising"
        } else {
            "falling"
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Next Month Forecast\n");
        output.push_str(&"=".repeat(48));
        output.push('\n');
        output.push_str(&format!("{:<28} {:>14}\n", "Months of history:", self.months));
        output.push_str(&format!(
            "{:<28} {:>14}\n",
            "Predicted expenses:",
            self.predicted_expenses_money()
        ));
        output.push_str(&format!(
            "{:<28} {:>14}\n",
            "Average income:",
            Money::from_f64(self.avg_income)
        ));
        output.push_str(&format!(
            "{:<28} {:>14}\n",
            "Expected savings:",
            self.suggested_savings_money()
        ));
        output.push_str(&format!(
            "{:<28} {:>14}\n",
            format!("Trend ({}):", self.trend_label()),
            format!("{}/mo", self.trend_money())
        ));

        output
    }
}

/// Which record the cut-back ranking reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankingBasis {
    /// The month most recently added to the store
    #[default]
    InsertionOrder,
    /// The chronologically latest month
    Chronological,
}

/// An expense category suggested for cutting back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CutBackArea {
    pub month: MonthId,
    pub category: ExpenseCategory,
    pub amount: Money,
}

impl CutBackArea {
    /// Guidance line with the default 10–15% reduction
    pub fn guidance(&self) -> String {
        self.guidance_with_range(DEFAULT_REDUCTION_RANGE)
    }

    /// Guidance line with a custom reduction range, e.g. "5–10%"
    pub fn guidance_with_range(&self, range: &str) -> String {
        format!("You spent {}. Try reducing by {}.", self.amount, range)
    }
}

/// Largest expense categories of the most recently added month
pub fn cut_back_areas(store: &SessionStore, limit: usize) -> Vec<CutBackArea> {
    cut_back_areas_by(store, limit, RankingBasis::InsertionOrder)
}

/// Largest expense categories of the month selected by `basis`
///
/// Categories are ranked by amount descending; equal amounts keep category
/// order. Empty when the store is empty.
pub fn cut_back_areas_by(
    store: &SessionStore,
    limit: usize,
    basis: RankingBasis,
) -> Vec<CutBackArea> {
    let selected = match basis {
        RankingBasis::InsertionOrder => store.last_inserted(),
        RankingBasis::Chronological => store.latest(),
    };
    let Some((month, record)) = selected else {
        return Vec::new();
    };

    let mut ranked: Vec<(ExpenseCategory, Money)> = record.expenses.iter().collect();
    // Stable sort keeps declaration order for ties
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(limit)
        .map(|(category, amount)| CutBackArea {
            month,
            category,
            amount,
        })
        .collect()
}

/// Format a cut-back list for terminal display
pub fn format_cut_back(areas: &[CutBackArea], range: &str) -> String {
    let mut output = String::new();

    match areas.first() {
        Some(first) => output.push_str(&format!("Areas to Cut Back ({})\n", first.month)),
        None => output.push_str("Areas to Cut Back\n"),
    }
    output.push_str(&"=".repeat(48));
    output.push('\n');

    if areas.is_empty() {
        output.push_str("No months recorded yet.\n");
        return output;
    }

    for (i, area) in areas.iter().enumerate() {
        output.push_str(&format!(
            "{}. {:<14} {}\n",
            i + 1,
            area.category,
            area.guidance_with_range(range)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryAmounts, MonthlyRecord};

    fn month(s: &str) -> MonthId {
        MonthId::parse(s).unwrap()
    }

    fn record(income: i64, pairs: &[(ExpenseCategory, i64)]) -> MonthlyRecord {
        MonthlyRecord::new(
            Money::from_dollars(income),
            CategoryAmounts::from_pairs(pairs.iter().map(|(c, a)| (*c, Money::from_dollars(*a)))),
        )
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-6, "{} != {}", a, b);
    }

    #[test]
    fn test_insufficient_data() {
        let mut store = SessionStore::new();
        let err = ForecastReport::generate(&store).unwrap_err();
        assert!(matches!(
            err,
            SpendError::InsufficientData {
                needed: 2,
                available: 0
            }
        ));

        store.replace(month("2025-01"), record(3000, &[])).unwrap();
        let err = ForecastReport::generate(&store).unwrap_err();
        assert!(matches!(
            err,
            SpendError::InsufficientData {
                needed: 2,
                available: 1
            }
        ));
    }

    #[test]
    fn test_custom_minimum() {
        let mut store = SessionStore::new();
        store.replace(month("2025-01"), record(100, &[])).unwrap();
        store.replace(month("2025-02"), record(100, &[])).unwrap();

        assert!(ForecastReport::generate_with_minimum(&store, 3)
            .unwrap_err()
            .is_insufficient_data());
        // Never below two
        assert!(ForecastReport::generate_with_minimum(&store, 0).is_ok());
    }

    #[test]
    fn test_two_month_exact_fit() {
        let mut store = SessionStore::new();
        store
            .replace(month("2025-01"), record(2000, &[(ExpenseCategory::Rent, 1000)]))
            .unwrap();
        store
            .replace(month("2025-02"), record(2000, &[(ExpenseCategory::Rent, 1200)]))
            .unwrap();

        let forecast = ForecastReport::generate(&store).unwrap();
        assert_close(forecast.slope, 200.0);
        assert_close(forecast.predicted_expenses, 1400.0);
        assert_close(forecast.suggested_savings, 600.0);
        assert_eq!(forecast.trend_label(), "rising");
    }

    #[test]
    fn test_forecast_ignores_calendar_gaps() {
        let mut store = SessionStore::new();
        store
            .replace(month("2024-01"), record(0, &[(ExpenseCategory::Food, 100)]))
            .unwrap();
        store
            .replace(month("2025-06"), record(0, &[(ExpenseCategory::Food, 200)]))
            .unwrap();

        let forecast = ForecastReport::generate(&store).unwrap();
        assert_close(forecast.predicted_expenses, 300.0);
    }

    #[test]
    fn test_cut_back_top_three() {
        let mut store = SessionStore::new();
        store
            .replace(
                month("2025-01"),
                record(
                    3000,
                    &[
                        (ExpenseCategory::Food, 500),
                        (ExpenseCategory::Rent, 1200),
                        (ExpenseCategory::Utilities, 300),
                        (ExpenseCategory::Transport, 100),
                        (ExpenseCategory::Entertainment, 400),
                        (ExpenseCategory::Shopping, 200),
                        (ExpenseCategory::Other, 0),
                    ],
                ),
            )
            .unwrap();

        let areas = cut_back_areas(&store, DEFAULT_CUT_BACK_COUNT);
        let ranked: Vec<(ExpenseCategory, Money)> =
            areas.iter().map(|a| (a.category, a.amount)).collect();

        assert_eq!(
            ranked,
            vec![
                (ExpenseCategory::Rent, Money::from_dollars(1200)),
                (ExpenseCategory::Food, Money::from_dollars(500)),
                (ExpenseCategory::Entertainment, Money::from_dollars(400)),
            ]
        );
        assert_eq!(
            areas[0].guidance(),
            "You spent $1,200.00. Try reducing by 10\u{2013}15%."
        );
    }

    #[test]
    fn test_cut_back_ties_keep_category_order() {
        let mut store = SessionStore::new();
        store
            .replace(
                month("2025-01"),
                record(
                    0,
                    &[
                        (ExpenseCategory::Shopping, 50),
                        (ExpenseCategory::Utilities, 50),
                        (ExpenseCategory::Food, 50),
                    ],
                ),
            )
            .unwrap();

        let categories: Vec<ExpenseCategory> = cut_back_areas(&store, 3)
            .iter()
            .map(|a| a.category)
            .collect();
        assert_eq!(
            categories,
            vec![
                ExpenseCategory::Food,
                ExpenseCategory::Utilities,
                ExpenseCategory::Shopping
            ]
        );
    }

    #[test]
    fn test_cut_back_uses_insertion_order() {
        let mut store = SessionStore::new();
        store
            .replace(month("2025-06"), record(0, &[(ExpenseCategory::Rent, 900)]))
            .unwrap();
        store
            .replace(month("2025-01"), record(0, &[(ExpenseCategory::Food, 300)]))
            .unwrap();

        let areas = cut_back_areas(&store, 1);
        assert_eq!(areas[0].month, month("2025-01"));
        assert_eq!(areas[0].category, ExpenseCategory::Food);

        let areas = cut_back_areas_by(&store, 1, RankingBasis::Chronological);
        assert_eq!(areas[0].month, month("2025-06"));
        assert_eq!(areas[0].category, ExpenseCategory::Rent);
    }

    #[test]
    fn test_cut_back_needs_only_one_month() {
        let mut store = SessionStore::new();
        assert!(cut_back_areas(&store, 3).is_empty());

        store
            .replace(month("2025-01"), record(0, &[(ExpenseCategory::Food, 10)]))
            .unwrap();
        assert!(ForecastReport::generate(&store).is_err());
        assert_eq!(cut_back_areas(&store, 3).len(), 3);
    }

    #[test]
    fn test_format_cut_back() {
        let mut store = SessionStore::new();
        store
            .replace(month("2025-01"), record(0, &[(ExpenseCategory::Rent, 1200)]))
            .unwrap();

        let output = format_cut_back(&cut_back_areas(&store, 1), "5\u{2013}10%");
        assert!(output.contains("Areas to Cut Back (2025-01)"));
        assert!(output.contains("1. Rent"));
        assert!(output.contains("Try reducing by 5\u{2013}10%."));

        assert!(format_cut_back(&[], "10%").contains("No months recorded yet."));
    }
}
