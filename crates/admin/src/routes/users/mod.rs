//! Users management route handlers.
//!
//! This module contains handlers for the users table, the detail view, the
//! edit form and the single-user actions (status change, delete, deselect).

mod actions;
mod detail;
mod edit;
mod list;
pub mod types;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

// Re-export types needed by templates and tests
pub use types::{
    DetailSection, FormError, PageLinkView, PageSizeView, SortHeaderView, StatusForm,
    UserDetailView, UserForm, UserRowView, users_href,
};

pub use actions::{clear_selection, delete, set_status};
pub use detail::{UserShowTemplate, show};
pub use edit::{UserEditTemplate, edit, update};
pub use list::{UsersIndexTemplate, index};

/// Build the users router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(index))
        .route("/users/selection/clear", post(clear_selection))
        .route("/users/{id}", get(show).post(update))
        .route("/users/{id}/edit", get(edit))
        .route("/users/{id}/status", post(set_status))
        .route("/users/{id}/delete", post(delete))
}
