//! HTTP middleware for admin.
//!
//! - `auth` - Extractors that read the signed-in operator from the session
//! - `session` - In-memory session layer (SameSite=Strict, 24h inactivity expiry)

pub mod auth;
pub mod session;

pub use auth::{
    OptionalAdminAuth, RequireAdminAuth, clear_current_admin, set_current_admin, set_flash,
    take_flash,
};
pub use session::{SESSION_COOKIE_NAME, create_session_layer};
