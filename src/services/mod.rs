//! Service layer for SpendTracker
//!
//! The service layer provides the editing operations on top of the session
//! store, handling validation and selection of months.

pub mod month;
pub mod record;

pub use month::{known_months, MonthService};
pub use record::RecordService;
