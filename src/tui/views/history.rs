//! History view
//!
//! Table of every stored month and a line chart of income, expenses and
//! savings across months.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::reports::HistoryReport;
use crate::tui::app::{App, FocusedPanel};

/// Render the History page
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let report = HistoryReport::generate(&*app.store);

    if report.is_empty() {
        let block = Block::default()
            .title(" Monthly History ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let text = Paragraph::new("No data yet. Add a month and save some values on the Enter Data page.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    app.history_index = app.history_index.min(report.len() - 1);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((report.len() as u16).saturating_add(3).min(14)),
            Constraint::Min(8),
        ])
        .split(area);

    render_table(frame, app, &report, chunks[0]);
    render_chart(frame, &report, chunks[1]);
}

fn render_table(frame: &mut Frame, app: &App, report: &HistoryReport, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Monthly History ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let header = Row::new(vec![
        Cell::from("Month"),
        Cell::from("Income"),
        Cell::from("Expenses"),
        Cell::from("Savings"),
        Cell::from("Rate"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = report
        .rows
        .iter()
        .map(|row| {
            let savings_color = if row.savings.is_negative() {
                Color::Red
            } else {
                Color::Green
            };

            Row::new(vec![
                Cell::from(row.month.to_string()),
                Cell::from(format!("{:>12}", app.format_money(row.income))),
                Cell::from(format!("{:>12}", app.format_money(row.total_expenses))),
                Cell::from(Span::styled(
                    format!("{:>12}", app.format_money(row.savings)),
                    Style::default().fg(savings_color),
                )),
                Cell::from(Span::styled(
                    format!("{:>8.2}%", row.savings_rate),
                    Style::default().fg(savings_color),
                )),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(9),
        Constraint::Length(13),
        Constraint::Length(13),
        Constraint::Length(13),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = TableState::default();
    if is_focused {
        state.select(Some(app.history_index));
    }

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_chart(frame: &mut Frame, report: &HistoryReport, area: Rect) {
    let points = |series: Vec<f64>| -> Vec<(f64, f64)> {
        series
            .into_iter()
            .enumerate()
            .map(|(i, y)| (i as f64, y))
            .collect()
    };

    let income = points(report.income_series());
    let expenses = points(report.expense_series());
    let savings = points(report.savings_series());

    let (y_min, y_max) = income
        .iter()
        .chain(&expenses)
        .chain(&savings)
        .fold((0.0_f64, 0.0_f64), |(lo, hi), (_, y)| (lo.min(*y), hi.max(*y)));
    let y_max = if y_max <= y_min { y_min + 1.0 } else { y_max };
    let x_max = (report.len().saturating_sub(1)).max(1) as f64;

    let datasets = vec![
        Dataset::default()
            .name("Income")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&income),
        Dataset::default()
            .name("Expenses")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&expenses),
        Dataset::default()
            .name("Savings")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&savings),
    ];

    let first = report.rows.first().map(|r| r.month.short_label()).unwrap_or_default();
    let last = report.rows.last().map(|r| r.month.short_label()).unwrap_or_default();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Financial Trends ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_max])
                .labels(vec![Span::raw(first), Span::raw(last)]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::raw(format!("{:.0}", y_min)),
                    Span::raw(format!("{:.0}", y_max)),
                ]),
        );

    frame.render_widget(chart, area);
}
