//! Audit trail for SpendTracker
//!
//! Records every creation and replacement of a monthly record with the
//! before/after values. Entries are kept in memory for the session and, when
//! enabled in settings, appended to a JSON-lines file.

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
