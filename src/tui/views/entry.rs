//! Enter Data view
//!
//! Income and per-category expense inputs for the selected month, with a
//! metrics panel computed live from the form values.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{CategoryAmounts, ExpenseCategory, Money, MonthId, MonthlyRecord};
use crate::reports::MonthSummary;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::widgets::input_line;

/// Longest amount a field accepts, e.g. "1000000000000.00"
const MAX_FIELD_LEN: usize = 16;

/// A field of the record form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Income,
    Expense(ExpenseCategory),
}

impl FormField {
    /// Income plus one field per category
    pub const COUNT: usize = 1 + ExpenseCategory::COUNT;

    pub fn index(self) -> usize {
        match self {
            Self::Income => 0,
            Self::Expense(category) => 1 + category.index(),
        }
    }

    pub fn from_index(index: usize) -> Self {
        match index.checked_sub(1) {
            Some(i) => ExpenseCategory::ALL
                .get(i)
                .map(|c| Self::Expense(*c))
                .unwrap_or(Self::Income),
            None => Self::Income,
        }
    }

    pub fn label(self) -> String {
        match self {
            Self::Income => "Total Income".to_string(),
            Self::Expense(category) => category.name().to_string(),
        }
    }
}

/// State for the Enter Data form
#[derive(Debug, Clone, Default)]
pub struct RecordFormState {
    /// Month the values were loaded from
    pub month: Option<MonthId>,
    /// Which field is focused
    pub focused_field: FormField,
    /// Raw input per field, indexed by `FormField::index`
    inputs: [String; FormField::COUNT],
    /// Cursor position in the focused field
    pub cursor: usize,
    /// Error message
    pub error_message: Option<String>,
}

impl RecordFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the form from a stored (or zero) record
    pub fn load(&mut self, month: MonthId, record: &MonthlyRecord) {
        self.month = Some(month);
        self.inputs[FormField::Income.index()] = record.income.to_input_string();
        for (category, amount) in record.expenses.iter() {
            self.inputs[FormField::Expense(category).index()] = amount.to_input_string();
        }
        self.cursor = self.current().len();
        self.error_message = None;
    }

    /// Raw input of the field at `index`
    pub fn value(&self, index: usize) -> &str {
        self.inputs.get(index).map(String::as_str).unwrap_or_default()
    }

    /// Replace the raw input of the field at `index`
    pub fn set_value(&mut self, index: usize, value: &str) {
        if let Some(input) = self.inputs.get_mut(index) {
            *input = value.to_string();
        }
        if index == self.focused_field.index() {
            self.cursor = value.len();
        }
    }

    fn current(&self) -> &str {
        &self.inputs[self.focused_field.index()]
    }

    fn current_mut(&mut self) -> &mut String {
        &mut self.inputs[self.focused_field.index()]
    }

    /// Move to next field
    pub fn next_field(&mut self) {
        let next = (self.focused_field.index() + 1) % FormField::COUNT;
        self.focused_field = FormField::from_index(next);
        self.cursor = self.current().len();
    }

    /// Move to previous field
    pub fn prev_field(&mut self) {
        let prev = (self.focused_field.index() + FormField::COUNT - 1) % FormField::COUNT;
        self.focused_field = FormField::from_index(prev);
        self.cursor = self.current().len();
    }

    /// Insert character into the focused field (digits and one `.` only)
    pub fn insert_char(&mut self, c: char) {
        let allowed = self.current().len() < MAX_FIELD_LEN
            && (c.is_ascii_digit() || (c == '.' && !self.current().contains('.')));
        if allowed {
            let cursor = self.cursor;
            self.current_mut().insert(cursor, c);
            self.cursor += 1;
            self.error_message = None;
        }
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let cursor = self.cursor;
            self.current_mut().remove(cursor);
            self.error_message = None;
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.current().len() {
            self.cursor += 1;
        }
    }

    /// Clear the focused field
    pub fn clear_field(&mut self) {
        self.current_mut().clear();
        self.cursor = 0;
        self.error_message = None;
    }

    /// Parse one field; empty means zero
    fn parse_field(&self, field: FormField) -> Result<Money, String> {
        let input = self.inputs[field.index()].trim();
        if input.is_empty() {
            return Ok(Money::zero());
        }
        Money::parse(input).map_err(|e| format!("Invalid amount for {} ({})", field.label(), e))
    }

    /// Parse every field into income and expenses
    pub fn parse_values(&self) -> Result<(Money, CategoryAmounts), String> {
        let income = self.parse_field(FormField::Income)?;
        let mut expenses = CategoryAmounts::zero();
        for category in ExpenseCategory::ALL {
            expenses.set(category, self.parse_field(FormField::Expense(category))?);
        }
        Ok((income, expenses))
    }

    /// Summary of the values currently typed, unparseable fields counted as zero
    pub fn preview(&self, month: MonthId) -> MonthSummary {
        let value = |field| self.parse_field(field).unwrap_or_default();
        let expenses = CategoryAmounts::from_pairs(
            ExpenseCategory::ALL
                .iter()
                .map(|c| (*c, value(FormField::Expense(*c)))),
        );
        MonthSummary::summarize(
            month,
            &MonthlyRecord::new(value(FormField::Income), expenses),
        )
    }

    /// Set error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the Enter Data page
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(36), Constraint::Length(34)])
        .split(area);

    render_form(frame, app, chunks[0]);
    render_metrics(frame, app, chunks[1]);
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(format!(" Enter Data: {} ", app.selected_month))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let state = &app.record_form;
    let symbol = app.settings.currency_symbol.as_str();
    let mut lines = Vec::with_capacity(FormField::COUNT + 6);

    for index in 0..FormField::COUNT {
        let field = FormField::from_index(index);
        let focused = is_focused && state.focused_field == field;

        if index == 1 {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Expenses",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        let label_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let mut spans = vec![Span::styled(format!("{:<15}", field.label()), label_style)];
        spans.extend(input_line(symbol, state.value(index), state.cursor, focused).spans);
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    if let Some(ref error) = state.error_message {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    } else {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[j/k]", Style::default().fg(Color::Cyan)),
        Span::raw(" Fields  "),
        Span::styled("[Ctrl+U]", Style::default().fg(Color::Yellow)),
        Span::raw(" Clear"),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_metrics(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let summary = app.record_form.preview(app.selected_month);
    let savings_color = if summary.savings.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let metric = |label: &str, value: String, color: Color| {
        vec![
            Line::from(Span::styled(
                label.to_string(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ]
    };

    let mut lines = Vec::new();
    lines.extend(metric(
        "Total Expenses",
        app.format_money(summary.total_expenses),
        Color::White,
    ));
    lines.extend(metric("Savings", app.format_money(summary.savings), savings_color));
    lines.extend(metric(
        "Savings Rate",
        format!("{:.2}%", summary.savings_rate),
        savings_color,
    ));

    if !app.store.contains(&app.selected_month) {
        lines.push(Line::from(Span::styled(
            "Not saved yet",
            Style::default().fg(Color::Yellow),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Handle key events for the form; returns whether the key was consumed
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => {
            app.save_form();
            true
        }
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.save_form();
            true
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.record_form.clear_field();
            true
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.record_form.next_field();
            true
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
            app.record_form.prev_field();
            true
        }
        KeyCode::Backspace => {
            app.record_form.backspace();
            true
        }
        KeyCode::Left => {
            app.record_form.move_left();
            true
        }
        KeyCode::Right => {
            app.record_form.move_right();
            true
        }
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
            app.record_form.insert_char(c);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(s: &str) -> MonthId {
        MonthId::parse(s).unwrap()
    }

    #[test]
    fn test_field_indexing() {
        assert_eq!(FormField::COUNT, 8);
        for index in 0..FormField::COUNT {
            assert_eq!(FormField::from_index(index).index(), index);
        }
        assert_eq!(FormField::from_index(2), FormField::Expense(ExpenseCategory::Rent));
    }

    #[test]
    fn test_insert_only_digits_and_one_dot() {
        let mut form = RecordFormState::new();
        for c in "1a2.3.-4".chars() {
            form.insert_char(c);
        }
        assert_eq!(form.value(0), "12.34");
    }

    #[test]
    fn test_field_navigation_wraps() {
        let mut form = RecordFormState::new();
        form.prev_field();
        assert_eq!(form.focused_field, FormField::Expense(ExpenseCategory::Other));
        form.next_field();
        assert_eq!(form.focused_field, FormField::Income);
    }

    #[test]
    fn test_load_and_parse_values() {
        let record = MonthlyRecord::new(
            Money::from_dollars(3000),
            CategoryAmounts::from_pairs([(ExpenseCategory::Food, Money::from_cents(50025))]),
        );
        let mut form = RecordFormState::new();
        form.load(month("2025-01"), &record);

        assert_eq!(form.value(0), "3000.00");
        assert_eq!(form.value(1), "500.25");
        assert_eq!(form.value(2), "");

        let (income, expenses) = form.parse_values().unwrap();
        assert_eq!(MonthlyRecord::new(income, expenses), record);
    }

    #[test]
    fn test_parse_rejects_bad_amount() {
        let mut form = RecordFormState::new();
        form.set_value(3, "1.2.3");
        let err = form.parse_values().unwrap_err();
        assert!(err.contains("Utilities"));
    }

    #[test]
    fn test_preview_metrics() {
        let mut form = RecordFormState::new();
        form.set_value(0, "3000");
        form.set_value(1, "500");
        form.set_value(2, "1200");
        form.set_value(3, "300");

        let summary = form.preview(month("2025-01"));
        assert_eq!(summary.total_expenses, Money::from_dollars(2000));
        assert_eq!(summary.savings, Money::from_dollars(1000));
        assert_eq!(summary.savings_rate, 33.33);
    }

    #[test]
    fn test_field_length_capped() {
        let mut form = RecordFormState::new();
        for _ in 0..40 {
            form.insert_char('9');
        }
        assert_eq!(form.value(0).len(), MAX_FIELD_LEN);
        assert!(form.parse_values().is_err());
    }

    #[test]
    fn test_oversized_amounts_do_not_overflow() {
        let mut form = RecordFormState::new();
        form.set_value(0, "1");
        form.set_value(1, "90000000000000000");
        form.set_value(2, "90000000000000000");

        let summary = form.preview(month("2025-01"));
        assert!(summary.total_expenses.is_zero());

        let err = form.parse_values().unwrap_err();
        assert!(err.contains("Food"));
        assert!(err.contains("too large"));

        form.set_value(1, "1000000000000");
        form.set_value(2, "1000000000000");
        let summary = form.preview(month("2025-01"));
        assert_eq!(summary.total_expenses.cents(), 2 * Money::MAX_CENTS);
        assert!(summary.savings.is_negative());
    }

    #[test]
    fn test_backspace_and_clear() {
        let mut form = RecordFormState::new();
        form.set_value(0, "123");
        form.backspace();
        assert_eq!(form.value(0), "12");
        form.clear_field();
        assert_eq!(form.value(0), "");
        assert_eq!(form.cursor, 0);
    }
}
