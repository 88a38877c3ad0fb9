//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    spans.push(Span::styled(
        get_view_hints(&app.state.current_view),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    if let Some(session) = &app.state.session {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            session.email.as_str(),
            Style::default().fg(Color::Blue),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: area.height.min(1),
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> &'static str {
    match view {
        View::SignIn => "Tab:next  Enter:confirm  ^S:entrar",
        View::SignUp => "Esc:voltar",
        View::Dashboard => "^L:sair da conta  q:quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::{app, render};

    #[test]
    fn test_layout_reserves_last_row() {
        let (main, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(main.height, 23);
        assert_eq!(status.y, 23);
        assert_eq!(status.height, 1);
    }

    #[test]
    fn test_hints_differ_per_view() {
        assert!(get_view_hints(&View::SignIn).contains("Tab"));
        assert!(get_view_hints(&View::SignUp).contains("Esc"));
        assert!(get_view_hints(&View::Dashboard).contains("^L"));
    }

    #[test]
    fn test_status_bar_shows_message() {
        let mut app = app();
        app.status_message = Some("Sessão encerrada.".to_string());
        let screen = render(&app, 80, 24);
        let last_row = screen.lines().last().unwrap();
        assert!(last_row.contains("Sessão encerrada."));
        assert!(last_row.contains("^C:quit"));
    }
}
