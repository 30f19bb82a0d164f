//! Record editor service
//!
//! Reads and wholesale-replaces the record of a single month.

use crate::error::{SpendError, SpendResult};
use crate::models::{CategoryAmounts, Money, MonthId, MonthlyRecord};
use crate::storage::SessionStore;

/// Service for loading and saving monthly records
pub struct RecordService<'a> {
    store: &'a mut SessionStore,
}

impl<'a> RecordService<'a> {
    /// Create a new record service
    pub fn new(store: &'a mut SessionStore) -> Self {
        Self { store }
    }

    /// The stored record, or a zero record if the month is unknown
    ///
    /// Never inserts.
    pub fn load_record(&self, month: &MonthId) -> MonthlyRecord {
        self.store.get(month).copied().unwrap_or_default()
    }

    /// Replace the record for `month` with the given values
    ///
    /// Negative income or expenses are rejected and nothing is stored.
    pub fn save_record(
        &mut self,
        month: MonthId,
        income: Money,
        expenses: CategoryAmounts,
    ) -> SpendResult<MonthlyRecord> {
        let record = MonthlyRecord::new(income, expenses);
        record
            .validate()
            .map_err(|e| SpendError::Validation(e.to_string()))?;

        self.store.replace(month, record)?;
        tracing::info!(
            %month,
            income = %record.income,
            expenses = %record.total_expenses(),
            "saved record"
        );

        Ok(record)
    }
}
