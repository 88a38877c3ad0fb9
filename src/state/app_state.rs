//! Application state definitions

use super::forms::SignInForm;
use crate::auth::Session;
use std::collections::VecDeque;

/// Registered screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    SignIn,
    SignUp,
    Dashboard,
}

impl View {
    /// Route name used for navigation and logs
    pub fn route_name(&self) -> &'static str {
        match self {
            Self::SignIn => "SignIn",
            Self::SignUp => "SignUp",
            Self::Dashboard => "Dashboard",
        }
    }
}

/// A blocking message shown over the current screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Sign-in form controller
    pub sign_in_form: SignInForm,

    // Authenticated user, if any
    pub session: Option<Session>,

    // Modal alerts, front is displayed
    alerts: VecDeque<Alert>,
}

impl AppState {
    /// Queue an alert for display
    pub fn push_alert(&mut self, alert: Alert) {
        self.alerts.push_back(alert);
    }

    pub fn has_alerts(&self) -> bool {
        !self.alerts.is_empty()
    }

    /// The alert currently on screen
    pub fn current_alert(&self) -> Option<&Alert> {
        self.alerts.front()
    }

    /// Dismiss the alert currently on screen
    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }

    #[cfg(test)]
    pub fn alert_count(&self) -> usize {
        self.alerts.len()
    }
}
