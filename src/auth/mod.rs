//! Authentication collaborator used by the sign-in flow

mod client;
mod traits;

pub use client::LocalAuthService;
pub use traits::{AuthService, Credentials, Session};

#[cfg(test)]
pub use traits::{AuthError, MockAuthService};
