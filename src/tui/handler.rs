//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state: dialogs first, then the Enter Data form, then global
//! keys, then the focused panel.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::app::{ActiveDialog, ActiveView, App, FocusedPanel};
use super::dialogs;
use super::event::Event;
use super::views::entry;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(_) | Event::Resize(_, _) => Ok(()),
        Event::Tick => {
            app.notifications.remove_expired();
            Ok(())
        }
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows reports releases as well
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    if app.is_editing_form() && entry::handle_key(app, key) {
        return Ok(());
    }

    if handle_global_key(app, key) {
        return Ok(());
    }

    match app.focused_panel {
        FocusedPanel::Sidebar => handle_sidebar_key(app, key),
        FocusedPanel::Main => handle_main_panel_key(app, key),
    }
    Ok(())
}

/// Keys that work on every page; returns whether the key was consumed
fn handle_global_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Tab => app.toggle_panel_focus(),
        KeyCode::Esc => app.focused_panel = FocusedPanel::Sidebar,
        KeyCode::Char('a') | KeyCode::Char('n') => app.open_dialog(ActiveDialog::AddMonth),
        KeyCode::Char(c) => match ActiveView::ALL.iter().find(|v| v.key() == c) {
            Some(view) => app.switch_view(*view),
            None => return false,
        },
        _ => return false,
    }
    true
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::AddMonth => {
            dialogs::add_month::handle_key(app, key);
        }
        // Any key closes help
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::None => {}
    }
}

fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.select_next_month(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev_month(),
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
            app.switch_view(ActiveView::EnterData);
            app.focused_panel = FocusedPanel::Main;
        }
        _ => {}
    }
}

fn handle_main_panel_key(app: &mut App, key: KeyEvent) {
    if app.active_view != ActiveView::History {
        return;
    }

    let rows = app.store.len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.history_index + 1 < rows {
                app.history_index += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.history_index = app.history_index.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => app.history_index = 0,
        KeyCode::Char('G') | KeyCode::End => app.history_index = rows.saturating_sub(1),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::{CategoryAmounts, Money, MonthId};
    use crate::services::{MonthService, RecordService};
    use crate::storage::SessionStore;
    use crossterm::event::KeyModifiers;

    fn month(s: &str) -> MonthId {
        MonthId::parse(s).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_page_switching_from_sidebar() {
        let mut store = SessionStore::new();
        let settings = Settings::default();
        let mut app = App::with_today(&mut store, &settings, month("2025-10"));

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.active_view, ActiveView::History);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.active_view, ActiveView::Prediction);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.active_view, ActiveView::EnterData);
    }

    #[test]
    fn test_digits_go_to_form_when_editing() {
        let mut store = SessionStore::new();
        let settings = Settings::default();
        {
            let mut app = App::with_today(&mut store, &settings, month("2025-10"));
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.focused_panel, FocusedPanel::Main);

            type_str(&mut app, "2500");
            assert_eq!(app.active_view, ActiveView::EnterData);
            assert_eq!(app.record_form.value(0), "2500");

            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Esc);
            assert_eq!(app.focused_panel, FocusedPanel::Sidebar);
        }
        assert_eq!(
            store.get(&month("2025-10")).unwrap().income,
            Money::from_dollars(2500)
        );
    }

    #[test]
    fn test_add_month_dialog_flow() {
        let mut store = SessionStore::new();
        let settings = Settings::default();
        let mut app = App::with_today(&mut store, &settings, month("2025-10"));

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.active_dialog, ActiveDialog::AddMonth);

        // 'q' is not a month character and must not quit while the dialog is open
        type_str(&mut app, "2025-0q3");
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        assert_eq!(app.selected_month, month("2025-03"));
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let mut store = SessionStore::new();
        let settings = Settings::default();
        let mut app = App::with_today(&mut store, &settings, month("2025-10"));

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.has_dialog());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_history_selection_is_bounded() {
        let mut store = SessionStore::new();
        for m in ["2025-01", "2025-02"] {
            MonthService::new(&mut store).register_month(m).unwrap();
            RecordService::new(&mut store)
                .save_record(month(m), Money::from_dollars(100), CategoryAmounts::zero())
                .unwrap();
        }
        let settings = Settings::default();
        let mut app = App::with_today(&mut store, &settings, month("2025-10"));

        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Tab);
        for _ in 0..5 {
            press(&mut app, KeyCode::Char('j'));
        }
        assert_eq!(app.history_index, 1);
        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.history_index, 0);
    }

    #[test]
    fn test_quit() {
        let mut store = SessionStore::new();
        let settings = Settings::default();
        let mut app = App::with_today(&mut store, &settings, month("2025-10"));

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
