//! Custom error types for SpendTracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for SpendTracker operations
#[derive(Error, Debug)]
pub enum SpendError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models (e.g. negative amounts)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Month identifier did not parse as YYYY-MM
    #[error("Invalid format '{input}'. Use YYYY-MM (e.g., 2025-10).")]
    Format { input: String },

    /// Not enough months of history to fit a trend
    #[error("Insufficient data: need at least {needed} months of history, have {available}")]
    InsufficientData { needed: usize, available: usize },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl SpendError {
    /// Create a format error for a rejected month identifier
    pub fn format(input: impl Into<String>) -> Self {
        Self::Format {
            input: input.into(),
        }
    }

    /// Check if this is a month format error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    /// Check if this is an insufficient data error
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::InsufficientData { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for SpendError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpendError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for SpendTracker operations
pub type SpendResult<T> = Result<T, SpendError>;
