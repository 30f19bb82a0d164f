//! TUI Views module
//!
//! Contains the three pages (Enter Data, History, Prediction) as well as the
//! sidebar and status bar.

pub mod entry;
pub mod forecast;
pub mod history;
pub mod sidebar;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::{notification_rect, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, layout.sidebar);

    match app.active_view {
        ActiveView::EnterData => entry::render(frame, app, layout.main),
        ActiveView::History => history::render(frame, app, layout.main),
        ActiveView::Prediction => forecast::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }

    if let Some(notification) = app.notifications.current() {
        let area = notification_rect(40, 4, layout.main);
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog {
        ActiveDialog::AddMonth => dialogs::add_month::render(frame, app),
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }
}
