//! Month registry service
//!
//! Maintains the set of known months: every month with a record plus the
//! current real-world month, and registration of new months from user input.

use crate::error::{SpendError, SpendResult};
use crate::models::MonthId;
use crate::storage::SessionStore;

/// Service for listing and registering months
pub struct MonthService<'a> {
    store: &'a mut SessionStore,
}

impl<'a> MonthService<'a> {
    /// Create a new month service
    pub fn new(store: &'a mut SessionStore) -> Self {
        Self { store }
    }

    /// Known months, ascending: all stored months plus the current month
    pub fn list_known_months(&self) -> Vec<MonthId> {
        self.list_known_months_at(MonthId::current())
    }

    /// Known months, ascending, treating `today` as the current month
    pub fn list_known_months_at(&self, today: MonthId) -> Vec<MonthId> {
        known_months(self.store, today)
    }

    /// Register a month typed by the user
    ///
    /// On success the month exists in the store (a zero record is inserted
    /// only if it was absent) and is returned as the new selection. Input that
    /// is not `YYYY-MM` leaves the store untouched.
    pub fn register_month(&mut self, input: &str) -> SpendResult<MonthId> {
        let month = MonthId::parse(input).map_err(|e| {
            tracing::debug!(input, error = %e, "rejected month");
            SpendError::format(input.trim())
        })?;

        if self.store.insert_if_absent(month)? {
            tracing::info!(%month, "registered month");
        }

        Ok(month)
    }
}

/// Stored months plus `today`, ascending and without duplicates
pub fn known_months(store: &SessionStore, today: MonthId) -> Vec<MonthId> {
    let mut months: Vec<MonthId> = store.months().copied().collect();
    if !store.contains(&today) {
        months.push(today);
        months.sort();
    }
    months
}
