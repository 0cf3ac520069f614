//! Operator authentication.
//!
//! The back-office has no credential store. Any well-formed email with a
//! non-empty password is accepted and turned into an [`AuthenticatedUser`]
//! that the session carries until logout.

mod error;

pub use error::LoginError;

use lendsqr_core::{AdminRole, AuthenticatedUser, Email};

/// Role handed to every operator who signs in.
pub const DEFAULT_ROLE: AdminRole = AdminRole::Admin;

/// Authentication service for the login gate.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthService;

impl AuthService {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Check a login submission and build the operator identity.
    ///
    /// # Errors
    ///
    /// Returns `LoginError::InvalidEmail` if the email does not parse and
    /// `LoginError::MissingPassword` if the password is blank.
    pub fn login(&self, email: &str, password: &str) -> Result<AuthenticatedUser, LoginError> {
        let email = Email::parse(email)?;
        if password.is_empty() {
            return Err(LoginError::MissingPassword);
        }

        let user = AuthenticatedUser::from_email(email, DEFAULT_ROLE);
        tracing::info!(operator_id = %user.id, email = %user.email, "Operator signed in");
        Ok(user)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_login_accepts_well_formed_submission() {
        let user = AuthService::new()
            .login("grace.effiom@lendsqr.com", "hunter2")
            .unwrap();
        assert_eq!(user.name, "Grace Effiom");
        assert_eq!(user.email.as_str(), "grace.effiom@lendsqr.com");
        assert_eq!(user.role, AdminRole::Admin);
    }

    #[test]
    fn test_login_rejects_bad_email() {
        let err = AuthService::new().login("not-an-email", "pw").unwrap_err();
        assert!(matches!(err, LoginError::InvalidEmail(_)));
    }

    #[test]
    fn test_login_rejects_empty_password() {
        let err = AuthService::new().login("ops@lendsqr.com", "").unwrap_err();
        assert!(matches!(err, LoginError::MissingPassword));
    }
}
