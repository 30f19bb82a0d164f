//! Path management for SpendTracker
//!
//! Provides XDG-compliant path resolution for configuration and log files.
//! Monthly records are never written here; they live only in the session.
//!
//! ## Path Resolution Order
//!
//! 1. `SPENDTRACKER_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/spendtracker` or `~/.config/spendtracker`
//! 3. Windows: `%APPDATA%\spendtracker`

use std::path::{Path, PathBuf};

use crate::error::SpendError;

/// Environment variable overriding the base directory
pub const DIR_ENV_VAR: &str = "SPENDTRACKER_DIR";

/// Manages all paths used by SpendTracker
#[derive(Debug, Clone)]
pub struct SpendPaths {
    /// Base directory for all SpendTracker files
    base_dir: PathBuf,
}

impl SpendPaths {
    /// Create a new SpendPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, SpendError> {
        let base_dir = match std::env::var(DIR_ENV_VAR) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create SpendPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/spendtracker/ or equivalent)
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the diagnostic log written while the TUI runs
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("spendtracker.log")
    }

    /// Get the path to the audit trail
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), SpendError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SpendError::Io(format!("Failed to create base directory: {}", e)))
    }
}

/// Resolve the default base directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SpendError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                SpendError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("spendtracker"))
}

/// Resolve the default base directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SpendError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SpendError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("spendtracker"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.log_file(), temp_dir.path().join("spendtracker.log"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("spendtracker");
        let paths = SpendPaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();

        assert!(base.exists());
        assert!(!paths.settings_file().exists());
    }
}
