//! Core data models for SpendTracker
//!
//! This module contains the data structures of the tracking domain: money
//! amounts, month identifiers, expense categories and monthly records.

pub mod category;
pub mod money;
pub mod month;
pub mod record;

pub use category::{CategoryAmounts, CategoryParseError, ExpenseCategory};
pub use money::{Money, MoneyParseError};
pub use month::{MonthId, MonthParseError};
pub use record::{MonthlyRecord, RecordValidationError};
