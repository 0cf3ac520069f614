//! API route handlers for admin.
//!
//! JSON endpoints over the users collection, plus the change event stream.
//! Unauthenticated requests get 401 instead of a login redirect.

pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the complete API router.
pub fn router() -> Router<AppState> {
    Router::new().merge(users::router())
}
