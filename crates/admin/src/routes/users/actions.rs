//! Single-user action handlers: status change, delete, deselect.

use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use tower_sessions::Session;
use tracing::instrument;

use lendsqr_core::UserStatus;

use crate::{
    error::AppError,
    middleware::{RequireAdminAuth, set_flash},
    routes::parse_user_id,
    state::AppState,
};

use super::types::StatusForm;

/// Set a user's status (activate, blacklist, ...).
///
/// POST /users/{id}/status
#[instrument(skip(admin, state, session))]
pub async fn set_status(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Form(input): Form<StatusForm>,
) -> Result<Redirect, AppError> {
    let id = parse_user_id(&id)?;
    let status: UserStatus = input
        .status
        .parse()
        .map_err(|e: lendsqr_core::ParseEnumError| AppError::BadRequest(e.to_string()))?;

    {
        let mut users = state.users().write().await;
        let mut record = users
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("user {id}")))?;
        record.status = status;
        users.update(record)?;
    }
    tracing::info!(user_id = %id, %status, operator = %admin.email, "user status changed");

    let _ = set_flash(&session, &format!("User marked {status}")).await;
    Ok(Redirect::to(&format!("/users/{id}")))
}

/// Delete a user.
///
/// POST /users/{id}/delete
#[instrument(skip(admin, state, session))]
pub async fn delete(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let id = parse_user_id(&id)?;
    let removed = state.users().write().await.delete(&id)?;
    tracing::info!(user_id = %id, operator = %admin.email, "user deleted");

    let _ = set_flash(&session, &format!("Deleted {}", removed.full_name())).await;
    Ok(Redirect::to("/users"))
}

/// Clear the selection.
///
/// POST /users/selection/clear
#[instrument(skip(_admin, state))]
pub async fn clear_selection(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Redirect {
    state.users().write().await.select(None);
    Redirect::to("/users")
}
