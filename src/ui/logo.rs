//! Text-art logo shown above the sign-in and sign-up forms

use super::ACCENT;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const LOGO: [&str; 3] = [
    "╔═╗╔═╗  ╔╗ ╔═╗╦═╗╔╗ ╔═╗╦═╗",
    "║ ╦║ ║  ╠╩╗╠═╣╠╦╝╠╩╗║╣ ╠╦╝",
    "╚═╝╚═╝  ╚═╝╩ ╩╩╚═╚═╝╚═╝╩╚═",
];

/// Rows the logo occupies
pub const LOGO_HEIGHT: u16 = LOGO.len() as u16;

/// Draw the logo centered in the given area
pub fn draw(frame: &mut Frame, area: Rect) {
    let style = Style::default().fg(ACCENT);
    let lines: Vec<Line> = LOGO
        .iter()
        .map(|row| Line::from(Span::styled(*row, style)))
        .collect();

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
