//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! It borrows the session store mutably for the whole session; every edit
//! goes through the services.

use crate::config::settings::Settings;
use crate::error::SpendError;
use crate::models::MonthId;
use crate::services::{known_months, MonthService, RecordService};
use crate::storage::SessionStore;

use super::dialogs::add_month::AddMonthState;
use super::views::entry::RecordFormState;
use super::widgets::{Notification, NotificationQueue};

/// Which page is currently shown in the main panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    EnterData,
    History,
    Prediction,
}

impl ActiveView {
    /// All pages in switcher order
    pub const ALL: [ActiveView; 3] = [Self::EnterData, Self::History, Self::Prediction];

    pub fn title(&self) -> &'static str {
        match self {
            Self::EnterData => "Enter Data",
            Self::History => "View History",
            Self::Prediction => "Prediction",
        }
    }

    /// Key that switches to this page
    pub fn key(&self) -> char {
        match self {
            Self::EnterData => '1',
            Self::History => '2',
            Self::Prediction => '3',
        }
    }
}

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Sidebar,
    Main,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddMonth,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// The session store
    pub store: &'a mut SessionStore,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active page
    pub active_view: ActiveView,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// The real-world month when the session started
    pub today: MonthId,

    /// Month whose record the form edits
    pub selected_month: MonthId,

    /// Selected row in the history table
    pub history_index: usize,

    /// Enter Data form state
    pub record_form: RecordFormState,

    /// Add month dialog state
    pub add_month_form: AddMonthState,

    /// Pending toast notifications
    pub notifications: NotificationQueue,
}

impl<'a> App<'a> {
    /// Create a new App instance with the current month selected
    pub fn new(store: &'a mut SessionStore, settings: &'a Settings) -> Self {
        Self::with_today(store, settings, MonthId::current())
    }

    /// Create a new App instance treating `today` as the current month
    pub fn with_today(store: &'a mut SessionStore, settings: &'a Settings, today: MonthId) -> Self {
        let mut app = Self {
            store,
            settings,
            should_quit: false,
            active_view: ActiveView::default(),
            focused_panel: FocusedPanel::default(),
            active_dialog: ActiveDialog::default(),
            today,
            selected_month: today,
            history_index: 0,
            record_form: RecordFormState::new(),
            add_month_form: AddMonthState::new(),
            notifications: NotificationQueue::new(),
        };
        app.select_month(today);
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Known months for the sidebar, ascending
    pub fn known_months(&self) -> Vec<MonthId> {
        known_months(&*self.store, self.today)
    }

    /// Position of the selected month in the known months list
    pub fn selected_month_index(&self) -> usize {
        self.known_months()
            .iter()
            .position(|m| *m == self.selected_month)
            .unwrap_or(0)
    }

    /// Select a month and reload the form from the store
    pub fn select_month(&mut self, month: MonthId) {
        self.selected_month = month;
        let record = RecordService::new(&mut *self.store).load_record(&month);
        self.record_form.load(month, &record);
    }

    /// Switch to a different page
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        self.history_index = 0;
    }

    /// Toggle focus between sidebar and main panel
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Sidebar => FocusedPanel::Main,
            FocusedPanel::Main => FocusedPanel::Sidebar,
        };
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        if dialog == ActiveDialog::AddMonth {
            self.add_month_form.reset();
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Whether keystrokes go to the Enter Data form
    pub fn is_editing_form(&self) -> bool {
        !self.has_dialog()
            && self.focused_panel == FocusedPanel::Main
            && self.active_view == ActiveView::EnterData
    }

    /// Move the sidebar selection up and load that month
    pub fn select_prev_month(&mut self) {
        let index = self.selected_month_index();
        if index > 0 {
            if let Some(month) = self.known_months().get(index - 1).copied() {
                self.select_month(month);
            }
        }
    }

    /// Move the sidebar selection down and load that month
    pub fn select_next_month(&mut self) {
        let index = self.selected_month_index();
        if let Some(month) = self.known_months().get(index + 1).copied() {
            self.select_month(month);
        }
    }

    /// Register the month typed into the add month dialog
    ///
    /// On success the new month is selected and the dialog closes; on a
    /// format error the message stays in the dialog.
    pub fn submit_add_month(&mut self) {
        let input = self.add_month_form.input.clone();
        match MonthService::new(&mut *self.store).register_month(&input) {
            Ok(month) => {
                self.select_month(month);
                self.close_dialog();
                self.notify(Notification::success(format!("Added {}", month)));
            }
            Err(e) => {
                tracing::debug!(error = %e, "add month failed");
                self.add_month_form.set_error(e.to_string());
            }
        }
    }

    /// Save the Enter Data form into the store
    pub fn save_form(&mut self) {
        let month = self.selected_month;
        let values = match self.record_form.parse_values() {
            Ok(values) => values,
            Err(msg) => {
                self.record_form.set_error(msg.clone());
                self.notify(Notification::error(msg));
                return;
            }
        };

        let (income, expenses) = values;
        match RecordService::new(&mut *self.store).save_record(month, income, expenses) {
            Ok(record) => {
                self.record_form.load(month, &record);
                self.notify(Notification::success(format!("Saved data for {}!", month)));
            }
            Err(e) => {
                let msg = match &e {
                    SpendError::Validation(detail) => detail.clone(),
                    other => other.to_string(),
                };
                tracing::warn!(%month, error = %e, "save failed");
                self.record_form.set_error(msg.clone());
                self.notify(Notification::error(msg));
            }
        }
    }

    /// Queue a notification with the configured lifetime
    pub fn notify(&mut self, notification: Notification) {
        self.notifications
            .push(notification.with_duration(self.settings.notification_secs));
    }

    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: crate::models::Money) -> String {
        amount.format_with_symbol(&self.settings.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, Money};

    fn month(s: &str) -> MonthId {
        MonthId::parse(s).unwrap()
    }

    #[test]
    fn test_new_app_selects_today_without_inserting() {
        let mut store = SessionStore::new();
        let settings = Settings::default();
        let app = App::with_today(&mut store, &settings, month("2025-10"));

        assert_eq!(app.selected_month, month("2025-10"));
        assert_eq!(app.known_months(), vec![month("2025-10")]);
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_add_month_selects_it() {
        let mut store = SessionStore::new();
        let settings = Settings::default();
        let mut app = App::with_today(&mut store, &settings, month("2025-10"));

        app.open_dialog(ActiveDialog::AddMonth);
        app.add_month_form.input = "2025-01".to_string();
        app.submit_add_month();

        assert_eq!(app.selected_month, month("2025-01"));
        assert!(!app.has_dialog());
        assert_eq!(app.known_months(), vec![month("2025-01"), month("2025-10")]);
    }

    #[test]
    fn test_add_invalid_month_keeps_dialog_open() {
        let mut store = SessionStore::new();
        let settings = Settings::default();
        let mut app = App::with_today(&mut store, &settings, month("2025-10"));

        app.open_dialog(ActiveDialog::AddMonth);
        app.add_month_form.input = "2025-13".to_string();
        app.submit_add_month();

        assert_eq!(app.active_dialog, ActiveDialog::AddMonth);
        assert!(app
            .add_month_form
            .error_message
            .as_deref()
            .unwrap()
            .contains("Use YYYY-MM"));
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_save_form_stores_record() {
        let mut store = SessionStore::new();
        let settings = Settings::default();
        {
            let mut app = App::with_today(&mut store, &settings, month("2025-10"));
            app.record_form.set_value(0, "3000");
            app.record_form
                .set_value(1 + ExpenseCategory::Rent.index(), "1200.50");
            app.save_form();
            assert_eq!(app.notifications.len(), 1);
        }

        let record = store.get(&month("2025-10")).unwrap();
        assert_eq!(record.income, Money::from_dollars(3000));
        assert_eq!(record.expenses.get(ExpenseCategory::Rent), Money::from_cents(120050));
    }

    #[test]
    fn test_month_navigation_reloads_form() {
        let mut store = SessionStore::new();
        MonthService::new(&mut store).register_month("2025-01").unwrap();
        RecordService::new(&mut store)
            .save_record(
                month("2025-01"),
                Money::from_dollars(500),
                crate::models::CategoryAmounts::zero(),
            )
            .unwrap();

        let settings = Settings::default();
        let mut app = App::with_today(&mut store, &settings, month("2025-10"));
        assert_eq!(app.record_form.value(0), "");

        app.select_prev_month();
        assert_eq!(app.selected_month, month("2025-01"));
        assert_eq!(app.record_form.value(0), "500.00");

        app.select_prev_month();
        assert_eq!(app.selected_month, month("2025-01"));

        app.select_next_month();
        assert_eq!(app.selected_month, month("2025-10"));
    }
}
