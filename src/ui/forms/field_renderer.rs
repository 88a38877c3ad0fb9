//! Field rendering utilities for forms

use crate::state::FormField;
use crate::ui::{ACCENT, ERROR};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows used by an input: bordered box plus one line for the error message
pub const INPUT_HEIGHT: u16 = 4;

/// Draw a single-line input with its inline error message
pub fn draw_input(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let border_style = if field.has_error() {
        Style::default().fg(ERROR)
    } else if is_active {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(
        Paragraph::new(input_line(field, is_active, chunks[0].width.saturating_sub(2)))
            .block(block),
        chunks[0],
    );

    if let Some(message) = field.error() {
        let error = Paragraph::new(Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(ERROR),
        )));
        frame.render_widget(error, chunks[1]);
    }
}

/// Icon, value (or placeholder) and cursor, fitted to `width` columns.
/// Long values scroll so the end being typed stays visible.
fn input_line(field: &FormField, is_active: bool, width: u16) -> Line<'static> {
    let icon_style = if field.has_error() {
        Style::default().fg(ERROR)
    } else if is_active || !field.is_empty() {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let icon = Span::styled(format!(" {} ", field.icon), icon_style);
    let cursor_width = usize::from(is_active);
    let available = (width as usize).saturating_sub(icon.width() + cursor_width);
    let mut spans = vec![icon];

    if field.is_empty() {
        spans.push(Span::styled(
            field.placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::raw(visible_tail(&field.display_value(), available)));
    }

    if is_active {
        spans.push(Span::styled("▌", Style::default().fg(ACCENT)));
    }

    Line::from(spans)
}

/// The last `width` characters of `value`, with a leading ellipsis when cut
fn visible_tail(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len <= width {
        return value.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let tail: String = value.chars().skip(len - (width - 1)).collect();
    format!("…{tail}")
}
