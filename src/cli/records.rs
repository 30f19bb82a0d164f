//! Record arguments for one-shot reports
//!
//! Records are given on the command line as
//! `YYYY-MM:INCOME[:category=amount,...]` and replayed into a fresh session
//! store in the order given.

use clap::Args;

use crate::audit::AuditLogger;
use crate::config::{settings::Settings, SpendPaths};
use crate::error::{SpendError, SpendResult};
use crate::models::{CategoryAmounts, ExpenseCategory, Money, MonthId};
use crate::services::{MonthService, RecordService};
use crate::storage::SessionStore;

/// Records supplied on the command line
#[derive(Args, Debug, Clone, Default)]
pub struct RecordArgs {
    /// Month record, e.g. "2025-01:3000:food=500,rent=1200" (repeatable)
    #[arg(short, long = "record", value_name = "MONTH:INCOME[:CATEGORY=AMOUNT,...]")]
    pub records: Vec<String>,
}

/// A parsed `--record` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSpec {
    pub month: MonthId,
    pub income: Money,
    pub expenses: CategoryAmounts,
}

impl RecordSpec {
    /// Parse `YYYY-MM:INCOME[:category=amount,...]`
    pub fn parse(input: &str) -> SpendResult<Self> {
        let mut parts = input.trim().splitn(3, ':');

        let month_str = parts.next().unwrap_or_default();
        let month = MonthId::parse(month_str).map_err(|_| SpendError::format(month_str.trim()))?;

        let income_str = parts.next().ok_or_else(|| {
            SpendError::Validation(format!(
                "Record '{}' is missing an income. Use MONTH:INCOME[:CATEGORY=AMOUNT,...]",
                input
            ))
        })?;
        let income = parse_amount(income_str, "income")?;

        let mut expenses = CategoryAmounts::zero();
        if let Some(list) = parts.next() {
            for pair in list.split(',').map(str::trim).filter(|p| !p.is_empty()) {
                let (name, amount) = pair.split_once('=').ok_or_else(|| {
                    SpendError::Validation(format!(
                        "Invalid expense '{}'. Use CATEGORY=AMOUNT",
                        pair
                    ))
                })?;
                let category: ExpenseCategory = name
                    .parse()
                    .map_err(|e: crate::models::CategoryParseError| {
                        SpendError::Validation(e.to_string())
                    })?;
                expenses.set(category, parse_amount(amount, category.name())?);
            }
        }

        Ok(Self {
            month,
            income,
            expenses,
        })
    }
}

fn parse_amount(input: &str, field: &str) -> SpendResult<Money> {
    Money::parse(input)
        .map_err(|e| SpendError::Validation(format!("Invalid {} amount: {}", field, e)))
}

impl RecordArgs {
    /// Parse every `--record` value
    pub fn parse_all(&self) -> SpendResult<Vec<RecordSpec>> {
        self.records.iter().map(|r| RecordSpec::parse(r)).collect()
    }

    /// Build a session store by registering and saving each record in order
    pub fn build_store(&self, paths: &SpendPaths, settings: &Settings) -> SpendResult<SessionStore> {
        let specs = self.parse_all()?;

        let mut store = if settings.audit_enabled {
            paths.ensure_directories()?;
            SessionStore::with_audit_logger(AuditLogger::new(paths.audit_log()))
        } else {
            SessionStore::new()
        };

        for spec in specs {
            MonthService::new(&mut store).register_month(&spec.month.to_string())?;
            RecordService::new(&mut store).save_record(spec.month, spec.income, spec.expenses)?;
        }
        tracing::debug!(months = store.len(), "built session from arguments");

        Ok(store)
    }
}
