//! Login error types.

use thiserror::Error;

/// Errors returned by the login gate.
#[derive(Debug, Error)]
pub enum LoginError {
    /// The email is not well-formed.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] lendsqr_core::EmailError),

    /// No password was entered.
    #[error("password is required")]
    MissingPassword,
}
