//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.active_view))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Help lines for the current page
fn help_lines(view: ActiveView) -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Global Keys"),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("Tab", "Switch panel focus"),
        key_line("Esc", "Back to sidebar"),
        key_line("a", "Add a new month"),
        key_line("1/2/3", "Enter Data / View History / Prediction"),
        Line::from(""),
        section("Sidebar"),
        Line::from(""),
        key_line("j/k", "Select next/previous month"),
        key_line("Enter", "Edit the selected month"),
        Line::from(""),
    ];

    match view {
        ActiveView::EnterData => {
            lines.push(section("Enter Data"));
            lines.push(Line::from(""));
            lines.push(key_line("0-9 .", "Type an amount"));
            lines.push(key_line("j/k", "Next/previous field"));
            lines.push(key_line("Enter", "Save data for the month"));
            lines.push(key_line("Ctrl+s", "Save data for the month"));
            lines.push(key_line("Ctrl+u", "Clear the field"));
        }
        ActiveView::History => {
            lines.push(section("View History"));
            lines.push(Line::from(""));
            lines.push(key_line("j/k", "Move selection down/up"));
        }
        ActiveView::Prediction => {
            lines.push(section("Prediction"));
            lines.push(Line::from(""));
            lines.push(Line::from("Forecast and cut-back areas update as you save."));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_help_is_contextual() {
        let entry = text(&help_lines(ActiveView::EnterData));
        assert!(entry.contains("Save data for the month"));
        assert!(!entry.contains("Move selection down/up"));

        let history = text(&help_lines(ActiveView::History));
        assert!(history.contains("Move selection down/up"));
        assert!(history.contains("Add a new month"));
    }
}
