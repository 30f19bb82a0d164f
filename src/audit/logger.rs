//! Audit logger for the append-only audit trail
//!
//! Each entry is written as a single JSON line and flushed immediately. The
//! file is never read back to rebuild session state.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::{SpendError, SpendResult};

use super::entry::AuditEntry;

/// Handles writing audit entries to the audit log file
#[derive(Debug)]
pub struct AuditLogger {
    /// Path to the audit log file
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a new AuditLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an audit entry as a JSON line
    pub fn log(&self, entry: &AuditEntry) -> SpendResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| SpendError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| SpendError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| SpendError::Io(format!("Failed to write audit entry: {}", e)))?;

        file.flush()
            .map_err(|e| SpendError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// Read all audit entries from the log file, oldest first
    #[cfg(test)]
    pub(crate) fn read_all(&self) -> SpendResult<Vec<AuditEntry>> {
        use std::fs::File;
        use std::io::{BufRead, BufReader};

        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| SpendError::Io(format!("Failed to open audit log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                SpendError::Io(format!("Failed to read audit log line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: AuditEntry = serde_json::from_str(&line).map_err(|e| {
                SpendError::Json(format!(
                    "Failed to parse audit entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::Operation;
    use crate::models::{Money, MonthId, MonthlyRecord};
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("audit.log");
        let logger = AuditLogger::new(log_path);
        (logger, temp_dir)
    }

    fn month(m: u32) -> MonthId {
        MonthId::new(2025, m).unwrap()
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        let entry = AuditEntry::create(month(1), &MonthlyRecord::zero());

        logger.log(&entry).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].month, month(1));
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = create_test_logger();

        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_update_entry_logged() {
        let (logger, _temp) = create_test_logger();

        let before = MonthlyRecord::zero();
        let mut after = before;
        after.income = Money::from_dollars(3100);

        logger
            .log(&AuditEntry::update(month(2), &before, &after))
            .unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Update);
        assert_eq!(entries[0].before, Some(before));
        assert_eq!(entries[0].after.income, Money::from_dollars(3100));
    }
}
