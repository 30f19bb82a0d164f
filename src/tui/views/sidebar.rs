//! Sidebar view
//!
//! Shows the known months and the page switcher

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::tui::app::{ActiveView, App, FocusedPanel};
use crate::tui::layout::SidebarLayout;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = SidebarLayout::new(area);

    render_header(frame, layout.header);
    render_months(frame, app, layout.months);
    render_view_switcher(frame, app, layout.view_switcher);
}

/// Render sidebar header
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" SpendTracker ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let version = Paragraph::new(concat!("v", env!("CARGO_PKG_VERSION")))
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(version, area);
}

/// Render the known months list
fn render_months(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Sidebar;

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Months ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let months = app.known_months();
    let items: Vec<ListItem> = months
        .iter()
        .map(|month| {
            let line = match app.store.get(month) {
                Some(record) => {
                    let savings = record.income - record.total_expenses();
                    let color = if savings.is_negative() {
                        Color::Red
                    } else {
                        Color::Green
                    };
                    Line::from(vec![
                        Span::styled(format!("{:<9}", month), Style::default().fg(Color::White)),
                        Span::styled(
                            format!("{:>13}", app.format_money(savings)),
                            Style::default().fg(color),
                        ),
                    ])
                }
                None => Line::from(vec![
                    Span::styled(format!("{:<9}", month), Style::default().fg(Color::White)),
                    Span::styled(format!("{:>13}", "(new)"), Style::default().fg(Color::DarkGray)),
                ]),
            };

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.selected_month_index()));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render view switcher
fn render_view_switcher(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Pages ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let items: Vec<ListItem> = ActiveView::ALL
        .iter()
        .map(|view| {
            let active = app.active_view == *view;
            let style = if active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let indicator = if active { "▶" } else { " " };

            let line = Line::from(vec![
                Span::styled(format!("{} ", indicator), style),
                Span::styled(format!("[{}] ", view.key()), Style::default().fg(Color::Yellow)),
                Span::styled(view.title(), style),
            ]);

            ListItem::new(line)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
