//! User settings for SpendTracker
//!
//! Manages display and forecasting preferences. Settings are the only state
//! that outlives a session.

use serde::{Deserialize, Serialize};

use super::paths::SpendPaths;
use crate::error::SpendError;

/// Fewest months a line can be fitted through
pub const MIN_FORECAST_MONTHS: usize = 2;

/// User settings for SpendTracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in displays
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// How many categories to list as areas to cut back
    #[serde(default = "default_cut_back_count")]
    pub cut_back_count: usize,

    /// Lower bound of the suggested reduction, in percent
    #[serde(default = "default_reduction_min")]
    pub reduction_min_percent: u8,

    /// Upper bound of the suggested reduction, in percent
    #[serde(default = "default_reduction_max")]
    pub reduction_max_percent: u8,

    /// Months of history required before a forecast is shown
    #[serde(default = "default_min_forecast_months")]
    pub min_forecast_months: usize,

    /// Append record changes to the audit log file
    #[serde(default)]
    pub audit_enabled: bool,

    /// TUI tick rate in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// How long notifications stay on screen, in seconds
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_cut_back_count() -> usize {
    3
}

fn default_reduction_min() -> u8 {
    10
}

fn default_reduction_max() -> u8 {
    15
}

fn default_min_forecast_months() -> usize {
    MIN_FORECAST_MONTHS
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_notification_secs() -> u64 {
    3
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            cut_back_count: default_cut_back_count(),
            reduction_min_percent: default_reduction_min(),
            reduction_max_percent: default_reduction_max(),
            min_forecast_months: default_min_forecast_months(),
            audit_enabled: false,
            tick_rate_ms: default_tick_rate_ms(),
            notification_secs: default_notification_secs(),
        }
    }
}

impl Settings {
    /// Months required for a forecast; a line needs at least two points
    pub fn forecast_min_months(&self) -> usize {
        self.min_forecast_months.max(MIN_FORECAST_MONTHS)
    }

    /// Guidance range shown next to cut-back categories, e.g. "10–15%"
    pub fn reduction_range(&self) -> String {
        let (lo, hi) = if self.reduction_min_percent <= self.reduction_max_percent {
            (self.reduction_min_percent, self.reduction_max_percent)
        } else {
            (self.reduction_max_percent, self.reduction_min_percent)
        };
        format!("{}\u{2013}{}%", lo, hi)
    }

    /// Load settings from disk, or use default settings if the file doesn't exist
    pub fn load_or_create(paths: &SpendPaths) -> Result<Self, SpendError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                SpendError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SpendError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendPaths) -> Result<(), SpendError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SpendError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            SpendError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
