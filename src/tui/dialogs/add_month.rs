//! Add month dialog
//!
//! Prompts for a month in `YYYY-MM` form. Invalid input keeps the dialog open
//! with the error shown inline; a valid month is registered and selected.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input_line;

/// Longest input accepted ("YYYY-MM" plus slack for typos)
const MAX_INPUT_LEN: usize = 10;

/// State for the add month dialog
#[derive(Debug, Clone, Default)]
pub struct AddMonthState {
    /// Month input
    pub input: String,
    /// Cursor position
    pub cursor: usize,
    /// Error message
    pub error_message: Option<String>,
}

impl AddMonthState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Insert a character at the cursor (digits and `-` only)
    pub fn insert_char(&mut self, c: char) {
        if (c.is_ascii_digit() || c == '-') && self.input.len() < MAX_INPUT_LEN {
            self.input.insert(self.cursor, c);
            self.cursor += 1;
            self.error_message = None;
        }
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.input.remove(self.cursor);
            self.error_message = None;
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.input.len() {
            self.cursor += 1;
        }
    }

    /// Set error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the add month dialog
pub fn render(frame: &mut Frame, app: &App) {
    let state = &app.add_month_form;

    let area = centered_rect_fixed(56, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add New Month ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Label
            Constraint::Length(1), // Input
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Error
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Month (YYYY-MM):",
            Style::default().fg(Color::Yellow),
        )),
        chunks[0],
    );

    let input = if state.input.is_empty() {
        Line::from(vec![
            Span::styled(" ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::styled(
                format!(" e.g. {}", app.today),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    } else {
        input_line("", &state.input, state.cursor, true)
    };
    frame.render_widget(Paragraph::new(input), chunks[1]);

    if let Some(ref error) = state.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red)))
                .wrap(ratatui::widgets::Wrap { trim: true }),
            chunks[3],
        );
    }

    let instructions = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Add  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[4]);
}

/// Handle key events for the add month dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.add_month_form.reset();
            app.close_dialog();
            true
        }
        KeyCode::Enter => {
            app.submit_add_month();
            true
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.add_month_form.reset();
            true
        }
        KeyCode::Char(c) => {
            app.add_month_form.insert_char(c);
            true
        }
        KeyCode::Backspace => {
            app.add_month_form.backspace();
            true
        }
        KeyCode::Left => {
            app.add_month_form.move_left();
            true
        }
        KeyCode::Right => {
            app.add_month_form.move_right();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_filters_characters() {
        let mut state = AddMonthState::new();
        for c in "20a25-1x0".chars() {
            state.insert_char(c);
        }
        assert_eq!(state.input, "2025-10");
        assert_eq!(state.cursor, 7);
    }

    #[test]
    fn test_input_length_capped() {
        let mut state = AddMonthState::new();
        for _ in 0..20 {
            state.insert_char('1');
        }
        assert_eq!(state.input.len(), MAX_INPUT_LEN);
    }

    #[test]
    fn test_editing_clears_error() {
        let mut state = AddMonthState::new();
        state.insert_char('2');
        state.set_error("bad");
        state.backspace();
        assert!(state.error_message.is_none());
        assert!(state.input.is_empty());
    }
}
