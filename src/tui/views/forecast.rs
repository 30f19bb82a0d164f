//! Prediction view
//!
//! Next-month expense forecast and the categories to cut back. Each panel
//! has its own data requirement, so one can show while the other shows a
//! notice.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::error::SpendError;
use crate::models::Money;
use crate::reports::{cut_back_areas, ForecastReport};
use crate::tui::app::App;

/// Render the Prediction page
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(6)])
        .split(area);

    render_forecast(frame, app, chunks[0]);
    render_cut_back(frame, app, chunks[1]);
}

fn render_forecast(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Next Month Prediction ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = match ForecastReport::generate_with_minimum(
        &*app.store,
        app.settings.forecast_min_months(),
    ) {
        Ok(forecast) => forecast_lines(app, &forecast),
        Err(SpendError::InsufficientData { needed, available }) => vec![
            Line::from(Span::styled(
                "Not enough data to predict.",
                Style::default().fg(Color::Yellow),
            )),
            Line::from(""),
            Line::from(format!(
                "Add at least {} months of history ({} so far).",
                needed, available
            )),
        ],
        Err(e) => vec![Line::from(Span::styled(
            e.to_string(),
            Style::default().fg(Color::Red),
        ))],
    };

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn forecast_lines(app: &App, forecast: &ForecastReport) -> Vec<Line<'static>> {
    let label = |text: &str| Span::styled(format!("{:<24}", text), Style::default().fg(Color::White));
    let savings_color = if forecast.suggested_savings < 0.0 {
        Color::Red
    } else {
        Color::Green
    };
    let trend_color = if forecast.slope > 0.0 {
        Color::Red
    } else {
        Color::Green
    };

    vec![
        Line::from(vec![
            label("Predicted Expenses"),
            Span::styled(
                app.format_money(forecast.predicted_expenses_money()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            label("Expected Savings"),
            Span::styled(
                app.format_money(forecast.suggested_savings_money()),
                Style::default()
                    .fg(savings_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            label("Average Income"),
            Span::raw(app.format_money(Money::from_f64(forecast.avg_income))),
        ]),
        Line::from(vec![
            label("Monthly Trend"),
            Span::styled(
                format!(
                    "{}/mo ({})",
                    app.format_money(forecast.trend_money()),
                    forecast.trend_label()
                ),
                Style::default().fg(trend_color),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("Based on {} months of history.", forecast.months),
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn render_cut_back(frame: &mut Frame, app: &App, area: Rect) {
    let areas = cut_back_areas(&*app.store, app.settings.cut_back_count);

    let title = match areas.first() {
        Some(first) => format!(" Areas to Cut Back ({}) ", first.month),
        None => " Areas to Cut Back ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if areas.is_empty() {
        let text = Paragraph::new("No months recorded yet.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let range = app.settings.reduction_range();
    let lines: Vec<Line> = areas
        .iter()
        .enumerate()
        .map(|(i, cut)| {
            Line::from(vec![
                Span::styled(format!("{}. ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!("{:<14}", cut.category.name()),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(cut.guidance_with_range(&range)),
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
