//! JSON Export functionality
//!
//! Exports a snapshot of the session: every stored month with its categories
//! and derived totals, the forecast when one is available, and the cut-back
//! ranking.

use crate::config::settings::{Settings, MIN_FORECAST_MONTHS};
use crate::error::{SpendError, SpendResult};
use crate::models::{ExpenseCategory, Money, MonthId};
use crate::reports::{
    cut_back_areas, CutBackArea, ForecastReport, HistoryReport, DEFAULT_CUT_BACK_COUNT,
};
use crate::storage::SessionStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// What a snapshot includes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotOptions {
    /// Categories listed in the cut-back ranking
    pub cut_back_count: usize,
    /// Months of history required before a forecast is included
    pub min_forecast_months: usize,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            cut_back_count: DEFAULT_CUT_BACK_COUNT,
            min_forecast_months: MIN_FORECAST_MONTHS,
        }
    }
}

impl SnapshotOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            cut_back_count: settings.cut_back_count,
            min_forecast_months: settings.forecast_min_months(),
        }
    }
}

/// Session snapshot export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Stored months, chronological
    pub months: Vec<ExportedMonth>,

    /// Next-month forecast, absent without enough history
    pub forecast: Option<ExportedForecast>,

    /// Largest categories of the most recently added month
    pub cut_back: Vec<ExportedCutBack>,
}

/// One month of the snapshot, amounts in dollars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedMonth {
    pub month: MonthId,
    pub income: f64,
    pub expenses: BTreeMap<ExpenseCategory, f64>,
    pub total_expenses: f64,
    pub savings: f64,
    pub savings_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedForecast {
    pub months_used: usize,
    pub predicted_expenses: f64,
    pub avg_income: f64,
    pub suggested_savings: f64,
    pub monthly_trend: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedCutBack {
    pub month: MonthId,
    pub category: ExpenseCategory,
    pub amount: f64,
}

fn dollars(amount: Money) -> f64 {
    amount.as_f64()
}

fn round_cents(value: f64) -> f64 {
    Money::from_f64(value).as_f64()
}

impl From<&ForecastReport> for ExportedForecast {
    fn from(forecast: &ForecastReport) -> Self {
        Self {
            months_used: forecast.months,
            predicted_expenses: round_cents(forecast.predicted_expenses),
            avg_income: round_cents(forecast.avg_income),
            suggested_savings: round_cents(forecast.suggested_savings),
            monthly_trend: round_cents(forecast.slope),
        }
    }
}

impl From<&CutBackArea> for ExportedCutBack {
    fn from(area: &CutBackArea) -> Self {
        Self {
            month: area.month,
            category: area.category,
            amount: dollars(area.amount),
        }
    }
}

impl SnapshotExport {
    /// Create a snapshot of the store
    pub fn from_store(store: &SessionStore) -> Self {
        Self::from_store_with(store, SnapshotOptions::default())
    }

    /// Create a snapshot using the given forecast minimum and cut-back count
    pub fn from_store_with(store: &SessionStore, options: SnapshotOptions) -> Self {
        let history = HistoryReport::generate(store);

        let months = history
            .rows
            .iter()
            .filter_map(|row| {
                let record = store.get(&row.month)?;
                Some(ExportedMonth {
                    month: row.month,
                    income: dollars(row.income),
                    expenses: record
                        .expenses
                        .iter()
                        .map(|(category, amount)| (category, dollars(amount)))
                        .collect(),
                    total_expenses: dollars(row.total_expenses),
                    savings: dollars(row.savings),
                    savings_rate: row.savings_rate,
                })
            })
            .collect();

        let forecast = ForecastReport::generate_with_minimum(store, options.min_forecast_months)
            .ok()
            .map(|f| ExportedForecast::from(&f));

        let cut_back = cut_back_areas(store, options.cut_back_count)
            .iter()
            .map(ExportedCutBack::from)
            .collect();

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            months,
            forecast,
            cut_back,
        }
    }
}

/// Export the session snapshot to JSON format
pub fn export_snapshot_json<W: Write>(
    store: &SessionStore,
    options: SnapshotOptions,
    writer: &mut W,
    pretty: bool,
) -> SpendResult<()> {
    let export = SnapshotExport::from_store_with(store, options);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
            .map_err(|e| SpendError::Export(e.to_string()))?;
    } else {
        serde_json::to_writer(&mut *writer, &export)
            .map_err(|e| SpendError::Export(e.to_string()))?;
    }
    writeln!(writer).map_err(|e| SpendError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryAmounts, MonthlyRecord};

    fn month(s: &str) -> MonthId {
        MonthId::parse(s).unwrap()
    }

    fn store_with_two_months() -> SessionStore {
        let mut store = SessionStore::new();
        store
            .replace(
                month("2025-01"),
                MonthlyRecord::new(
                    Money::from_dollars(3000),
                    CategoryAmounts::from_pairs([
                        (ExpenseCategory::Food, Money::from_dollars(500)),
                        (ExpenseCategory::Rent, Money::from_dollars(1500)),
                    ]),
                ),
            )
            .unwrap();
        store
            .replace(
                month("2025-02"),
                MonthlyRecord::new(
                    Money::from_dollars(3100),
                    CategoryAmounts::from_pairs([
                        (ExpenseCategory::Food, Money::from_dollars(600)),
                        (ExpenseCategory::Rent, Money::from_dollars(1600)),
                    ]),
                ),
            )
            .unwrap();
        store
    }

    #[test]
    fn test_snapshot_contents() {
        let export = SnapshotExport::from_store(&store_with_two_months());

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.months.len(), 2);
        assert_eq!(export.months[0].expenses.len(), 7);
        assert_eq!(export.months[1].savings, 900.0);

        let forecast = export.forecast.unwrap();
        assert_eq!(forecast.predicted_expenses, 2400.0);
        assert_eq!(forecast.suggested_savings, 650.0);

        assert_eq!(export.cut_back[0].category, ExpenseCategory::Rent);
        assert_eq!(export.cut_back[0].month, month("2025-02"));
    }

    #[test]
    fn test_snapshot_without_forecast() {
        let export = SnapshotExport::from_store(&SessionStore::new());
        assert!(export.months.is_empty());
        assert!(export.forecast.is_none());
        assert!(export.cut_back.is_empty());
    }

    #[test]
    fn test_export_json_parses_back() {
        let mut buf = Vec::new();
        export_snapshot_json(&store_with_two_months(), SnapshotOptions::default(), &mut buf, true).unwrap();

        let parsed: SnapshotExport = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed.months[0].month, month("2025-01"));
        assert_eq!(parsed.months[0].expenses[&ExpenseCategory::Rent], 1500.0);
        assert_eq!(parsed.cut_back.len(), 3);
    }

    #[test]
    fn test_snapshot_respects_forecast_minimum() {
        let options = SnapshotOptions {
            cut_back_count: 1,
            min_forecast_months: 3,
        };
        let export = SnapshotExport::from_store_with(&store_with_two_months(), options);

        assert!(export.forecast.is_none());
        assert_eq!(export.cut_back.len(), 1);
        assert_eq!(export.months.len(), 2);
    }

    #[test]
    fn test_options_from_settings() {
        let settings = Settings {
            cut_back_count: 5,
            min_forecast_months: 0,
            ..Settings::default()
        };
        let options = SnapshotOptions::from_settings(&settings);
        assert_eq!(options.cut_back_count, 5);
        assert_eq!(options.min_forecast_months, MIN_FORECAST_MONTHS);
    }
}
