//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                  - Health check (mounted by `app`)
//!
//! # Auth
//! GET  /auth/login              - Login page
//! POST /auth/login              - Sign in with email + password
//! POST /auth/logout             - Logout
//!
//! # Dashboard
//! GET  /                        - Redirect to /users
//! GET  /dashboard               - Welcome page
//! GET  /sections/{id}           - Placeholder for sections without a screen
//!
//! # Users
//! GET  /users                   - Stat cards + users table
//! GET  /users/{id}              - Select and show a user
//! GET  /users/{id}/edit         - Edit form
//! POST /users/{id}              - Save the edit form
//! POST /users/{id}/status       - Change status
//! POST /users/{id}/delete       - Delete
//! POST /users/selection/clear   - Deselect
//!
//! # API
//! GET    /api/users             - JSON page of users
//! GET    /api/users/selected    - Selected user or null
//! GET    /api/users/events      - Server-sent change events
//! GET    /api/users/{id}        - One user
//! PUT    /api/users/{id}        - Replace a user
//! DELETE /api/users/{id}        - Delete a user
//! ```

pub mod api;
pub mod auth;
pub mod dashboard;
pub mod users;

use axum::Router;

use lendsqr_core::UserId;

use crate::error::AppError;
use crate::state::AppState;

/// Build the complete route table.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(dashboard::router())
        .merge(users::router())
        .merge(api::router())
}

/// Parse a user ID from a path segment.
///
/// A malformed ID cannot name a record, so it is reported as not found.
pub(crate) fn parse_user_id(raw: &str) -> Result<UserId, AppError> {
    UserId::parse(raw).map_err(|_| AppError::NotFound(format!("user {raw}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("LSQ00000042").unwrap().sequence(), 42);

        let err = parse_user_id("42").unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Not found: user 42");
    }
}
