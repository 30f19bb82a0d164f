//! Terminal User Interface module
//!
//! This module provides the interactive SpendTracker interface using
//! ratatui: a month sidebar, three pages (Enter Data, View History,
//! Prediction) and the dialogs used for data entry.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
