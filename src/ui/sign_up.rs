//! Account creation screen

use super::logo;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the sign-up screen
pub fn draw(frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(logo::LOGO_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    logo::draw(frame, rows[1]);

    let text = vec![
        Line::from(Span::styled(
            "Crie sua conta",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Cadastro ainda não disponível.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "Esc: voltar para logon",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), rows[3]);
}
