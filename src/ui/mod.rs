//! UI module for rendering the TUI

mod components;
mod dashboard;
mod forms;
mod layout;
mod logo;
mod sign_in;
mod sign_up;

use crate::app::App;
use crate::state::View;
use ratatui::{style::Color, Frame};

pub use sign_in::{AUTH_ERROR_MESSAGE, AUTH_ERROR_TITLE};

/// Brand accent used for focus, buttons and links
pub const ACCENT: Color = Color::Rgb(255, 144, 0);
/// Color for validation messages and failing fields
pub const ERROR: Color = Color::Rgb(197, 48, 48);

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    match app.state.current_view {
        View::SignIn => sign_in::draw(frame, main_area, app),
        View::SignUp => sign_up::draw(frame, main_area),
        View::Dashboard => dashboard::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Alerts render last so they sit above everything else
    if let Some(alert) = app.state.current_alert() {
        components::render_alert_dialog(frame, alert);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::auth::LocalAuthService;
    use crate::config::TuiConfig;
    use ratatui::{backend::TestBackend, Terminal};

    pub fn app() -> App {
        App::with_auth(TuiConfig::default(), Box::new(LocalAuthService::default()))
    }

    /// Render a full frame and return the screen as text, one line per row
    pub fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
