//! YAML Export functionality
//!
//! Exports the session snapshot to YAML for human-readable review.

use crate::error::{SpendError, SpendResult};
use crate::export::json::{SnapshotExport, SnapshotOptions};
use crate::storage::SessionStore;
use std::io::Write;

/// Export the session snapshot to YAML format
pub fn export_snapshot_yaml<W: Write>(
    store: &SessionStore,
    options: SnapshotOptions,
    writer: &mut W,
) -> SpendResult<()> {
    let export = SnapshotExport::from_store_with(store, options);

    writeln!(writer, "# SpendTracker Session Export")
        .map_err(|e| SpendError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| SpendError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| SpendError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| SpendError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| SpendError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryAmounts, Money, MonthId, MonthlyRecord};

    #[test]
    fn test_export_yaml() {
        let mut store = SessionStore::new();
        store
            .replace(
                MonthId::parse("2025-01").unwrap(),
                MonthlyRecord::new(Money::from_dollars(3000), CategoryAmounts::zero()),
            )
            .unwrap();

        let mut buf = Vec::new();
        export_snapshot_yaml(&store, SnapshotOptions::default(), &mut buf).unwrap();
        let yaml = String::from_utf8(buf).unwrap();

        assert!(yaml.starts_with("# SpendTracker Session Export"));
        assert!(yaml.contains("2025-01"));
        assert!(yaml.contains("forecast: null"));

        let parsed: SnapshotExport = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.months.len(), 1);
    }
}
