//! Export output for the report command
//!
//! Writes the session snapshot in the chosen format to a file or stdout.

use crate::error::{SpendError, SpendResult};
use crate::export::{csv, json, yaml, SnapshotOptions};
use crate::storage::SessionStore;
use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one row per month)
    Csv,
    /// JSON format (months, forecast and cut-back list)
    Json,
    /// YAML format (same content as JSON, human-readable)
    Yaml,
}

/// Write the export to `output`, or stdout when no path is given
pub fn write_export(
    store: &SessionStore,
    format: ExportFormat,
    output: Option<&Path>,
    pretty: bool,
    options: SnapshotOptions,
) -> SpendResult<()> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                SpendError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_format(store, format, &mut writer, pretty, options)?;
            writer
                .flush()
                .map_err(|e| SpendError::Export(e.to_string()))?;

            tracing::info!(path = %path.display(), ?format, "exported session");
            println!("Exported {} months to: {}", store.len(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_format(store, format, &mut writer, pretty, options)?;
        }
    }

    Ok(())
}

fn write_format<W: Write>(
    store: &SessionStore,
    format: ExportFormat,
    writer: &mut W,
    pretty: bool,
    options: SnapshotOptions,
) -> SpendResult<()> {
    match format {
        ExportFormat::Csv => csv::export_months_csv(store, writer),
        ExportFormat::Json => json::export_snapshot_json(store, options, writer, pretty),
        ExportFormat::Yaml => yaml::export_snapshot_yaml(store, options, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MonthId, MonthlyRecord};
    use tempfile::TempDir;

    #[test]
    fn test_write_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.csv");

        let mut store = SessionStore::new();
        store
            .replace(MonthId::parse("2025-01").unwrap(), MonthlyRecord::zero())
            .unwrap();

        write_export(&store, ExportFormat::Csv, Some(&path), false, SnapshotOptions::default()).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("2025-01,0.00"));
    }

    #[test]
    fn test_write_export_bad_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("out.json");

        let err = write_export(
            &SessionStore::new(),
            ExportFormat::Json,
            Some(&path),
            true,
            SnapshotOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SpendError::Export(_)));
    }
}
