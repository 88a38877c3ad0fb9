//! Trait abstraction for authentication to enable mocking in tests

use crate::state::SignInFormData;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Validated email/password pair sent to the authentication service
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl From<SignInFormData> for Credentials {
    fn from(data: SignInFormData) -> Self {
        Self {
            email: data.email,
            password: data.password,
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// An authenticated user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    pub signed_in_at: DateTime<Utc>,
}

impl Session {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            signed_in_at: Utc::now(),
        }
    }
}

/// Failures reported by an authentication service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("no active session for {0}")]
    NotSignedIn(String),
}

/// Trait for authentication operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange credentials for a session
    async fn sign_in(&mut self, credentials: &Credentials) -> Result<Session, AuthError>;

    /// End a session
    async fn sign_out(&mut self, session: &Session) -> Result<(), AuthError>;
}
