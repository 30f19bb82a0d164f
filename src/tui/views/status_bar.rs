//! Status bar view
//!
//! Shows the selected month, how many months are stored, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![
        Span::styled(" Month: ", Style::default().fg(Color::White)),
        Span::styled(
            app.selected_month.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(
            format!("{} months stored", app.store.len()),
            Style::default().fg(Color::White),
        ),
        Span::raw(" │ "),
        Span::styled(app.active_view.title(), Style::default().fg(Color::Yellow)),
    ];

    let hints = if app.is_editing_form() {
        " Enter:Save  j/k:Field  Tab:Sidebar  ?:Help "
    } else {
        " q:Quit  ?:Help  a:Add month  1-3:Pages "
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
