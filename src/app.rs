//! Application state and core logic

use crate::auth::{AuthService, Credentials, LocalAuthService, Session};
use crate::config::TuiConfig;
use crate::state::{
    field_errors, validate, Alert, AppState, FieldErrors, Form, SignInFocus, SignInFormData, View,
};
use crate::ui::{AUTH_ERROR_MESSAGE, AUTH_ERROR_TITLE};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Authentication collaborator
    auth: Box<dyn AuthService>,
    /// Loaded user configuration
    pub config: TuiConfig,
    /// Where configuration changes are written; None disables saving
    config_path: Option<PathBuf>,
    /// Whether the app should quit
    quit: bool,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create an App backed by the local authentication service
    pub fn new(config: TuiConfig, config_path: Option<PathBuf>) -> Self {
        let auth = LocalAuthService::new(config.rejected_emails());
        let mut app = Self::with_auth(config, Box::new(auth));
        app.config_path = config_path;
        app
    }

    /// Create an App with a custom authentication service and no config persistence
    pub fn with_auth(config: TuiConfig, auth: Box<dyn AuthService>) -> Self {
        let mut app = Self {
            state: AppState::default(),
            auth,
            config,
            config_path: None,
            quit: false,
            status_message: None,
        };
        app.reset_sign_in_form();
        app
    }

    /// Empty the sign-in form, then prefill the remembered email
    fn reset_sign_in_form(&mut self) {
        let form = &mut self.state.sign_in_form;
        form.clear();
        if let Some(email) = self.config.prefill_email() {
            form.email.set_text(email);
            form.set_focus(SignInFocus::Password);
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Show a blocking alert
    pub fn show_alert(&mut self, title: &str, message: &str) {
        self.state.push_alert(Alert::new(title, message));
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Alerts are modal
        if self.state.has_alerts() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_alert();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        match self.state.current_view {
            View::SignIn => self.handle_sign_in_key(key).await?,
            View::SignUp => self.handle_sign_up_key(key),
            View::Dashboard => self.handle_dashboard_key(key).await?,
        }

        Ok(())
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        tracing::debug!(
            from = self.state.current_view.route_name(),
            to = view.route_name(),
            "Navigate"
        );
        self.state.view_history.push(self.state.current_view);
        self.state.current_view = view;
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        if let Some(view) = self.state.view_history.pop() {
            tracing::debug!(to = view.route_name(), "Navigate back");
            self.state.current_view = view;
        }
    }

    /// Replace the whole navigation stack with a single view
    fn reset_to(&mut self, view: View) {
        self.state.view_history.clear();
        self.state.current_view = view;
    }

    /// Handle keys in SignIn view
    async fn handle_sign_in_key(&mut self, key: KeyEvent) -> Result<()> {
        let focus = self.state.sign_in_form.focus();

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.sign_in_form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.sign_in_form.prev_field(),
            KeyCode::Char('s') if chord(key) == KeyModifiers::CONTROL => {
                self.submit_form().await;
            }
            KeyCode::Enter => self.activate(focus).await,
            // Space presses buttons and links; in inputs it is typed
            KeyCode::Char(' ') if !focus.is_text_input() => self.activate(focus).await,
            KeyCode::Char(c) if is_typed(key) => self.state.sign_in_form.input_char(c),
            KeyCode::Backspace => self.state.sign_in_form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Enter on the focused element
    async fn activate(&mut self, focus: SignInFocus) {
        match focus {
            // Return key on the email input moves on to the password
            SignInFocus::Email => self.state.sign_in_form.set_focus(SignInFocus::Password),
            SignInFocus::Password | SignInFocus::SubmitButton => self.submit_form().await,
            SignInFocus::ForgotPassword => {
                tracing::debug!("Password recovery is not available");
            }
            SignInFocus::CreateAccount => self.navigate(View::SignUp),
        }
    }

    /// Programmatic form submission
    pub async fn submit_form(&mut self) {
        let data = self.state.sign_in_form.data();
        self.handle_sign_in(data).await;
    }

    /// Validate the submitted values, then authenticate
    async fn handle_sign_in(&mut self, data: SignInFormData) {
        self.state.sign_in_form.set_errors(&FieldErrors::new());

        if let Err(err) = validate(&data) {
            tracing::debug!(%err, "Sign-in form rejected");
            self.state.sign_in_form.set_errors(&field_errors(&err));
            return;
        }

        let credentials = Credentials::from(data);
        match self.auth.sign_in(&credentials).await {
            Ok(session) => self.complete_sign_in(session),
            Err(err) => {
                tracing::warn!(error = %err, "Sign-in failed");
                self.show_alert(AUTH_ERROR_TITLE, AUTH_ERROR_MESSAGE);
            }
        }
    }

    fn complete_sign_in(&mut self, session: Session) {
        tracing::info!(email = %session.email, "Signed in");

        if self.config.remembers_email()
            && self.config.last_email.as_deref() != Some(session.email.as_str())
        {
            self.config.last_email = Some(session.email.clone());
            self.persist_config();
        }

        self.state.sign_in_form.password.clear();
        self.state.sign_in_form.set_focus(SignInFocus::Email);
        self.state.session = Some(session);
        self.reset_to(View::Dashboard);
    }

    fn persist_config(&self) {
        if let Some(path) = &self.config_path {
            if let Err(err) = self.config.save_to(path) {
                tracing::warn!(error = %err, "Failed to save config");
            }
        }
    }

    /// Handle keys in SignUp view
    fn handle_sign_up_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            self.go_back();
        }
    }

    /// Handle keys in Dashboard view
    async fn handle_dashboard_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.sign_out().await;
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    /// End the current session and return to the sign-in screen
    pub async fn sign_out(&mut self) {
        if let Some(session) = self.state.session.take() {
            if let Err(err) = self.auth.sign_out(&session).await {
                tracing::warn!(error = %err, "Sign-out failed");
            }
        }
        self.reset_sign_in_form();
        self.reset_to(View::SignIn);
        self.status_message = Some("Sessão encerrada.".to_string());
    }
}

/// The Ctrl/Alt part of a key's modifiers
fn chord(key: KeyEvent) -> KeyModifiers {
    key.modifiers & (KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Whether a character key produces text. Ctrl+Alt together is AltGr on
/// Windows and still types (`@` on pt and de layouts).
fn is_typed(key: KeyEvent) -> bool {
    let chord = chord(key);
    chord.is_empty() || chord == KeyModifiers::CONTROL | KeyModifiers::ALT
}
