//! Blocking alert dialog

use super::base::{render_dialog, DialogConfig};
use crate::state::Alert;
use crate::ui::{ACCENT, ERROR};
use ratatui::{
    style::{Modifier, Style},
    text::Span,
    Frame,
};

/// Render an alert overlay centered on the screen
pub fn render_alert_dialog(frame: &mut Frame, alert: &Alert) {
    let key_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::styled("Enter", key_style),
        Span::raw(" / "),
        Span::styled("Esc", key_style),
        Span::raw(": OK"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: &alert.title,
            accent: ERROR,
            message: &alert.message,
            hint: Some(hint),
            ..Default::default()
        },
    );
}
