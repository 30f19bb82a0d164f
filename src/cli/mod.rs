//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the report layer.

pub mod export;
pub mod records;
pub mod report;

pub use export::ExportFormat;
pub use records::{RecordArgs, RecordSpec};
pub use report::{handle_report_command, ReportCommands};
