//! Session-related types for operator authentication.

/// Session-stored operator identity.
///
/// The whole [`AuthenticatedUser`](lendsqr_core::AuthenticatedUser) is kept
/// in the session; there is no operator table to look it up from.
pub type CurrentAdmin = lendsqr_core::AuthenticatedUser;

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current logged-in operator.
    pub const CURRENT_ADMIN: &str = "current_admin";

    /// Key for a one-shot notice shown on the next page load.
    pub const FLASH: &str = "flash";
}
