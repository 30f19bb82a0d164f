//! Session storage for SpendTracker
//!
//! The session store is the single source of truth for one interactive
//! session: an in-memory mapping from month to record that also remembers the
//! order in which months were first added. It is created empty by the caller,
//! passed explicitly to every service, and dropped when the session ends.

use std::collections::BTreeMap;

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::SpendResult;
use crate::models::{MonthId, MonthlyRecord};

/// In-memory store of monthly records for one session
///
/// Every change is audited before it is applied, so a failed audit write
/// leaves the store untouched.
#[derive(Debug, Default)]
pub struct SessionStore {
    records: BTreeMap<MonthId, MonthlyRecord>,
    insertion_order: Vec<MonthId>,
    audit_trail: Vec<AuditEntry>,
    audit_logger: Option<AuditLogger>,
}

impl SessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that also appends audit entries to a file
    pub fn with_audit_logger(logger: AuditLogger) -> Self {
        Self {
            audit_logger: Some(logger),
            ..Self::default()
        }
    }

    /// Number of months in the store
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, month: &MonthId) -> bool {
        self.records.contains_key(month)
    }

    pub fn get(&self, month: &MonthId) -> Option<&MonthlyRecord> {
        self.records.get(month)
    }

    /// Records in chronological order
    pub fn iter(&self) -> impl Iterator<Item = (&MonthId, &MonthlyRecord)> {
        self.records.iter()
    }

    /// Months in chronological order
    pub fn months(&self) -> impl Iterator<Item = &MonthId> {
        self.records.keys()
    }

    /// Months in the order they were first added
    pub fn insertion_order(&self) -> &[MonthId] {
        &self.insertion_order
    }

    /// The most recently added month and its record
    pub fn last_inserted(&self) -> Option<(MonthId, &MonthlyRecord)> {
        let month = self.insertion_order.last()?;
        self.records.get(month).map(|record| (*month, record))
    }

    /// The chronologically latest month and its record
    pub fn latest(&self) -> Option<(MonthId, &MonthlyRecord)> {
        self.records
            .iter()
            .next_back()
            .map(|(month, record)| (*month, record))
    }

    /// Insert a zero-valued record unless the month already exists
    ///
    /// Returns `true` if a record was created.
    pub fn insert_if_absent(&mut self, month: MonthId) -> SpendResult<bool> {
        if self.records.contains_key(&month) {
            return Ok(false);
        }

        let record = MonthlyRecord::zero();
        self.audit(AuditEntry::create(month, &record))?;

        self.records.insert(month, record);
        self.insertion_order.push(month);
        tracing::debug!(%month, "created empty record");
        Ok(true)
    }

    /// Replace the record for a month entirely, inserting it if new
    ///
    /// Returns the previous record, if any. Existing months keep their
    /// position in insertion order.
    pub fn replace(
        &mut self,
        month: MonthId,
        record: MonthlyRecord,
    ) -> SpendResult<Option<MonthlyRecord>> {
        let entry = match self.records.get(&month) {
            Some(before) => AuditEntry::update(month, before, &record),
            None => AuditEntry::create(month, &record),
        };
        self.audit(entry)?;

        let previous = self.records.insert(month, record);
        if previous.is_none() {
            self.insertion_order.push(month);
        }
        tracing::debug!(%month, created = previous.is_none(), "replaced record");
        Ok(previous)
    }

    /// Audit entries recorded during this session, oldest first
    pub fn audit_trail(&self) -> &[AuditEntry] {
        &self.audit_trail
    }

    fn audit(&mut self, entry: AuditEntry) -> SpendResult<()> {
        if let Some(logger) = &self.audit_logger {
            logger.log(&entry)?;
        }
        self.audit_trail.push(entry);
        Ok(())
    }
}
