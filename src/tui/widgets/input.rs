//! Single-line text input rendering
//!
//! Draws a value with a block cursor when focused.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Render `value` as a line, highlighting the character under `cursor`
pub fn input_line(prefix: &str, value: &str, cursor: usize, focused: bool) -> Line<'static> {
    let mut spans = vec![];

    if !prefix.is_empty() {
        spans.push(Span::styled(
            prefix.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    if !focused {
        spans.push(Span::styled(
            value.to_string(),
            Style::default().fg(Color::White),
        ));
        return Line::from(spans);
    }

    // Inputs only hold ASCII, so byte positions are char positions
    let cursor_pos = cursor.min(value.len());
    let (before, after) = value.split_at(cursor_pos);

    spans.push(Span::styled(
        before.to_string(),
        Style::default().fg(Color::White),
    ));

    let cursor_char = after.chars().next().unwrap_or(' ');
    spans.push(Span::styled(
        cursor_char.to_string(),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    ));

    if after.len() > 1 {
        spans.push(Span::styled(
            after[1..].to_string(),
            Style::default().fg(Color::White),
        ));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_unfocused_input() {
        let line = input_line("$", "12.50", 2, false);
        assert_eq!(text(&line), "$12.50");
    }

    #[test]
    fn test_cursor_at_end_adds_block() {
        let line = input_line("", "12", 2, true);
        assert_eq!(text(&line), "12 ");
    }

    #[test]
    fn test_cursor_in_middle() {
        let line = input_line("", "123", 1, true);
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[1].content, "2");
    }
}
