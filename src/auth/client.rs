//! In-process authentication service
//!
//! Accepts any well-formed credentials except for emails on a configured
//! rejection list, and tracks the one session it has handed out. Stands in
//! for a remote backend.

use super::traits::{AuthError, AuthService, Credentials, Session};
use async_trait::async_trait;

/// Authentication service that runs without a backend
#[derive(Debug, Clone, Default)]
pub struct LocalAuthService {
    rejected_emails: Vec<String>,
    active: Option<Session>,
}

impl LocalAuthService {
    /// Create a service that refuses the given emails (case-insensitive)
    pub fn new(rejected_emails: Vec<String>) -> Self {
        Self {
            rejected_emails: rejected_emails
                .into_iter()
                .map(|email| email.to_lowercase())
                .collect(),
            active: None,
        }
    }

    fn is_rejected(&self, email: &str) -> bool {
        let email = email.to_lowercase();
        self.rejected_emails.iter().any(|rejected| *rejected == email)
    }
}

#[async_trait]
impl AuthService for LocalAuthService {
    async fn sign_in(&mut self, credentials: &Credentials) -> Result<Session, AuthError> {
        tracing::info!(email = %credentials.email, "Sign-in attempt");

        if self.is_rejected(&credentials.email) {
            tracing::info!(email = %credentials.email, "Sign-in rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let session = Session::new(credentials.email.clone());
        self.active = Some(session.clone());
        Ok(session)
    }

    async fn sign_out(&mut self, session: &Session) -> Result<(), AuthError> {
        if self.active.as_ref() != Some(session) {
            return Err(AuthError::NotSignedIn(session.email.clone()));
        }
        self.active = None;
        tracing::info!(email = %session.email, "Signed out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    fn credentials(email: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn test_default_accepts_everyone() {
        let mut service = LocalAuthService::default();
        let session = block_on(service.sign_in(&credentials("a@b.com"))).unwrap();
        assert_eq!(session.email, "a@b.com");
    }

    #[test]
    fn test_rejected_email_fails() {
        let mut service = LocalAuthService::new(vec!["blocked@b.com".to_string()]);
        let result = block_on(service.sign_in(&credentials("blocked@b.com")));
        assert_eq!(result, Err(AuthError::InvalidCredentials));
    }

    #[test]
    fn test_rejection_ignores_case() {
        let mut service = LocalAuthService::new(vec!["Blocked@B.com".to_string()]);
        let result = block_on(service.sign_in(&credentials("blocked@b.COM")));
        assert!(result.is_err());
    }

    #[test]
    fn test_other_emails_still_accepted() {
        let mut service = LocalAuthService::new(vec!["blocked@b.com".to_string()]);
        assert!(block_on(service.sign_in(&credentials("ok@b.com"))).is_ok());
    }

    #[test]
    fn test_sign_out_ends_issued_session() {
        let mut service = LocalAuthService::default();
        let session = block_on(service.sign_in(&credentials("a@b.com"))).unwrap();
        assert!(block_on(service.sign_out(&session)).is_ok());
        assert_eq!(
            block_on(service.sign_out(&session)),
            Err(AuthError::NotSignedIn("a@b.com".to_string()))
        );
    }

    #[test]
    fn test_sign_out_of_unknown_session_fails() {
        let mut service = LocalAuthService::default();
        let result = block_on(service.sign_out(&Session::new("a@b.com")));
        assert!(matches!(result, Err(AuthError::NotSignedIn(_))));
    }
}
