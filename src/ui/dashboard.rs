//! Landing screen after a successful sign in

use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the dashboard
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from("")];

    match &app.state.session {
        Some(session) => {
            let signed_in_at = session.signed_in_at.with_timezone(&chrono::Local);
            lines.push(Line::from(vec![
                Span::raw("Bem-vindo, "),
                Span::styled(
                    session.email.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("Conectado às {}", signed_in_at.format("%H:%M")),
                Style::default().fg(Color::DarkGray),
            )));
        }
        None => lines.push(Line::from(Span::styled(
            "Nenhuma sessão ativa.",
            Style::default().fg(Color::DarkGray),
        ))),
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Painel ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(super::ACCENT)),
    );
    frame.render_widget(paragraph, area);
}
