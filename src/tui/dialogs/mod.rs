//! Dialog modules for the TUI
//!
//! Contains modal dialogs for adding months and showing help

pub mod add_month;
pub mod help;
