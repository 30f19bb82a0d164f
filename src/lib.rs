//! SpendTracker - Terminal-based monthly spending tracker
//!
//! This library provides the core functionality for SpendTracker: recording
//! monthly income and categorized expenses for a session, summarizing the
//! history, and forecasting next month's expenses with a linear trend.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths, settings and diagnostic logging
//! - `error`: Custom error types
//! - `models`: Core data models (money, months, categories, records)
//! - `storage`: In-memory session store
//! - `services`: Month registration and record editing
//! - `reports`: History table, trend fit, forecast and cut-back ranking
//! - `audit`: Audit trail of record changes
//! - `export`: CSV/JSON/YAML snapshots
//! - `cli`: One-shot report commands
//! - `tui`: Interactive dashboard
//!
//! # Example
//!
//! ```rust
//! use spendtracker::models::{CategoryAmounts, ExpenseCategory, Money};
//! use spendtracker::reports::ForecastReport;
//! use spendtracker::services::{MonthService, RecordService};
//! use spendtracker::storage::SessionStore;
//!
//! let mut store = SessionStore::new();
//! for (month, income, rent) in [("2025-01", 3000, 1000), ("2025-02", 3100, 1200)] {
//!     let month = MonthService::new(&mut store).register_month(month)?;
//!     let expenses = CategoryAmounts::from_pairs([(ExpenseCategory::Rent, Money::from_dollars(rent))]);
//!     RecordService::new(&mut store).save_record(month, Money::from_dollars(income), expenses)?;
//! }
//!
//! let forecast = ForecastReport::generate(&store)?;
//! assert_eq!(forecast.predicted_expenses_money(), Money::from_dollars(1400));
//! # Ok::<(), spendtracker::error::SpendError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{SpendError, SpendResult};
