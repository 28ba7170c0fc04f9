//! Pluggable sign-in checks
//!
//! The portal has no authentication service. These implementations stand in
//! for one and can be swapped without touching the pages.

use crate::config::AdminCredentials;
use crate::error::AuthError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Who signed in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
}

pub trait Authenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<Identity, AuthError>;
}

/// Compares against a single configured username/password pair
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    expected: AdminCredentials,
}

impl StaticCredentials {
    pub fn new(expected: AdminCredentials) -> Self {
        Self { expected }
    }
}

impl Authenticator for StaticCredentials {
    fn authenticate(&self, credentials: &Credentials) -> Result<Identity, AuthError> {
        if credentials.username == self.expected.username
            && credentials.password == self.expected.password
        {
            Ok(Identity {
                username: credentials.username.clone(),
            })
        } else {
            tracing::warn!(username = %credentials.username, "rejected admin login");
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Accepts any sign-in that names an email address
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Authenticator for AcceptAll {
    fn authenticate(&self, credentials: &Credentials) -> Result<Identity, AuthError> {
        let email = credentials.username.trim();
        if email.is_empty() {
            return Err(AuthError::MissingEmail);
        }
        Ok(Identity {
            username: email.to_string(),
        })
    }
}

/// Signed-in state for one admin console instance
#[derive(Debug, Clone, Default)]
pub struct AdminSession {
    identity: Option<Identity>,
}

impl AdminSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(
        &mut self,
        authenticator: &dyn Authenticator,
        credentials: &Credentials,
    ) -> Result<&Identity, AuthError> {
        let identity = authenticator.authenticate(credentials)?;
        tracing::info!(username = %identity.username, "admin signed in");
        Ok(&*self.identity.insert(identity))
    }

    pub fn logout(&mut self) {
        self.identity = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_credentials() {
        let auth = StaticCredentials::new(AdminCredentials::default());
        assert!(auth.authenticate(&Credentials::new("superadmin", "Admin@123")).is_ok());
        assert_eq!(
            auth.authenticate(&Credentials::new("superadmin", "admin@123")),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            auth.authenticate(&Credentials::default()),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_session_lifecycle() {
        let auth = StaticCredentials::new(AdminCredentials {
            username: "ops".into(),
            password: "pw".into(),
        });
        let mut session = AdminSession::new();
        assert!(!session.is_authenticated());

        assert!(session.login(&auth, &Credentials::new("ops", "nope")).is_err());
        assert!(!session.is_authenticated());

        let who = session.login(&auth, &Credentials::new("ops", "pw")).unwrap();
        assert_eq!(who.username, "ops");
        assert!(session.is_authenticated());

        session.logout();
        assert!(session.identity().is_none());
    }

    #[test]
    fn test_accept_all_requires_email() {
        assert_eq!(
            AcceptAll.authenticate(&Credentials::new("  ", "x")),
            Err(AuthError::MissingEmail)
        );
        let who = AcceptAll
            .authenticate(&Credentials::new(" player@example.com ", ""))
            .unwrap();
        assert_eq!(who.username, "player@example.com");
    }
}
