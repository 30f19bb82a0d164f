//! Export module for SpendTracker
//!
//! Writes the session's derived data in multiple formats:
//! - CSV: one row per month (spreadsheet-compatible)
//! - JSON: machine-readable snapshot with forecast and cut-back ranking
//! - YAML: human-readable snapshot

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_months_csv;
pub use json::{export_snapshot_json, SnapshotExport, SnapshotOptions, EXPORT_SCHEMA_VERSION};
pub use yaml::export_snapshot_yaml;
