//! User detail page handler.

use askama::Template;
use axum::{
    extract::{Path, State},
    response::Html,
};
use tower_sessions::Session;
use tracing::instrument;

use lendsqr_core::UserStatus;

use crate::{
    error::AppError,
    filters,
    middleware::RequireAdminAuth,
    routes::{dashboard::ShellView, parse_user_id},
    state::AppState,
};

use super::types::UserDetailView;

/// User detail page template.
#[derive(Template)]
#[template(path = "users/show.html")]
pub struct UserShowTemplate {
    pub shell: ShellView,
    pub user: UserDetailView,
    /// Status transitions offered as buttons (every status but the current one).
    pub status_actions: Vec<&'static str>,
}

/// User detail handler. Viewing a user selects it.
///
/// GET /users/{id}
#[instrument(skip(admin, state, session))]
pub async fn show(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_user_id(&id)?;

    let record = {
        let mut users = state.users().write().await;
        let record = users
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("user {id}")))?;
        users.select(Some(&record));
        record
    };
    tracing::debug!(user_id = %id, "user selected");

    let template = UserShowTemplate {
        shell: ShellView::new(&admin, &format!("/users/{id}"))
            .with_flash(&session)
            .await,
        status_actions: UserStatus::ALL
            .iter()
            .filter(|s| **s != record.status)
            .map(|s| s.as_str())
            .collect(),
        user: UserDetailView::from(&record),
    };

    Ok(Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    })))
}
