//! User edit form handlers.

use askama::Template;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::instrument;

use lendsqr_core::{Gender, MaritalStatus, UserId, UserStatus};

use crate::{
    error::AppError,
    filters,
    middleware::{RequireAdminAuth, set_flash},
    models::CurrentAdmin,
    routes::{dashboard::ShellView, parse_user_id},
    state::AppState,
};

use super::types::UserForm;

/// User edit form template.
#[derive(Template)]
#[template(path = "users/edit.html")]
pub struct UserEditTemplate {
    pub shell: ShellView,
    pub id: String,
    pub form: UserForm,
    pub error: Option<String>,
    pub statuses: &'static [UserStatus],
    pub genders: &'static [Gender],
    pub marital_statuses: &'static [MaritalStatus],
}

impl UserEditTemplate {
    fn new(admin: &CurrentAdmin, id: &UserId, form: UserForm, error: Option<String>) -> Self {
        Self {
            shell: ShellView::new(admin, &format!("/users/{id}/edit")),
            id: id.to_string(),
            form,
            error,
            statuses: UserStatus::ALL,
            genders: Gender::ALL,
            marital_statuses: MaritalStatus::ALL,
        }
    }

    fn into_html(self) -> Html<String> {
        Html(self.render().unwrap_or_else(|e| {
            tracing::error!("Template render error: {}", e);
            "Internal Server Error".to_string()
        }))
    }
}

/// Edit form page.
///
/// GET /users/{id}/edit
#[instrument(skip(admin, state))]
pub async fn edit(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_user_id(&id)?;
    let form = state
        .users()
        .read()
        .await
        .get(&id)
        .map(UserForm::from)
        .ok_or_else(|| AppError::NotFound(format!("user {id}")))?;

    Ok(UserEditTemplate::new(&admin, &id, form, None).into_html())
}

/// Apply the edit form as a full-record replacement.
///
/// Invalid input re-renders the form with a 400; a record that vanished in
/// the meantime is a 404.
///
/// POST /users/{id}
#[instrument(skip(admin, state, session, form))]
pub async fn update(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Form(form): Form<UserForm>,
) -> Result<Response, AppError> {
    let id = parse_user_id(&id)?;

    let record = match form.clone().into_record(id.clone()) {
        Ok(record) => record,
        Err(e) => {
            tracing::debug!(user_id = %id, error = %e, "edit form rejected");
            let page = UserEditTemplate::new(&admin, &id, form, Some(e.to_string()));
            return Ok((StatusCode::BAD_REQUEST, page.into_html()).into_response());
        }
    };

    state.users().write().await.update(record)?;
    tracing::info!(user_id = %id, operator = %admin.email, "user updated");

    let _ = set_flash(&session, "User details saved").await;
    Ok(Redirect::to(&format!("/users/{id}")).into_response())
}
