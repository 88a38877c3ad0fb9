//! Sign-in screen

use super::components::{render_button, render_link, BUTTON_HEIGHT};
use super::forms::{draw_input, INPUT_HEIGHT};
use super::{logo, ACCENT};
use crate::app::App;
use crate::state::SignInFocus;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const TITLE: &str = "Faça seu Logon";
pub const SUBMIT_LABEL: &str = "Entrar";
pub const FORGOT_PASSWORD_LABEL: &str = "Esqueci minha senha";
pub const CREATE_ACCOUNT_LABEL: &str = "Criar uma conta.";

/// Alert shown when authentication fails for any reason
pub const AUTH_ERROR_TITLE: &str = "Erro na autenticação.";
pub const AUTH_ERROR_MESSAGE: &str = "Ocorreu um erro ao fazer login, cheque as credenciais.";

/// Width of the form column
const FORM_WIDTH: u16 = 44;
/// Height of the bottom "create account" bar
const FOOTER_HEIGHT: u16 = 2;

/// Draw the sign-in screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.sign_in_form;
    let focus = form.focus();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)])
        .split(area);

    let column = centered_column(outer[0], FORM_WIDTH);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                    // Top padding (flex)
            Constraint::Length(logo::LOGO_HEIGHT), // Logo
            Constraint::Length(1),                 // Spacer
            Constraint::Length(1),                 // Title
            Constraint::Length(1),                 // Spacer
            Constraint::Length(INPUT_HEIGHT),      // Email
            Constraint::Length(INPUT_HEIGHT),      // Password
            Constraint::Length(BUTTON_HEIGHT),     // Submit
            Constraint::Length(1),                 // Spacer
            Constraint::Length(1),                 // Forgot password
            Constraint::Min(0),                    // Bottom padding (flex)
        ])
        .split(column);

    logo::draw(frame, rows[1]);

    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, rows[3]);

    draw_input(frame, rows[5], &form.email, focus == SignInFocus::Email);
    draw_input(frame, rows[6], &form.password, focus == SignInFocus::Password);

    render_button(
        frame,
        rows[7],
        SUBMIT_LABEL,
        focus == SignInFocus::SubmitButton,
        true,
    );
    render_link(
        frame,
        rows[9],
        FORGOT_PASSWORD_LABEL,
        focus == SignInFocus::ForgotPassword,
    );

    draw_create_account_bar(frame, outer[1], focus == SignInFocus::CreateAccount);
}

/// Bottom bar linking to the sign-up screen
fn draw_create_account_bar(frame: &mut Frame, area: Rect, is_selected: bool) {
    let mut style = Style::default().fg(ACCENT);
    if is_selected {
        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }

    let bar = Paragraph::new(Line::from(Span::styled(
        format!(" ↪ {CREATE_ACCOUNT_LABEL} "),
        style,
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(bar, area);
}

/// Horizontally centered column no wider than `width`
fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
