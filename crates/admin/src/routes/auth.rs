//! Authentication route handlers for admin.
//!
//! Provides the login form and logout.

use askama::Template;
use axum::{
    Form, Router,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::{OptionalAdminAuth, clear_current_admin, set_current_admin};
use crate::services::AuthService;
use crate::state::AppState;

/// Login page template.
#[derive(Template)]
#[template(path = "auth/login.html")]
pub struct LoginPageTemplate {
    pub email: String,
    pub error: Option<String>,
}

impl LoginPageTemplate {
    fn into_html(self) -> Html<String> {
        Html(self.render().unwrap_or_else(|e| {
            tracing::error!("Template render error: {}", e);
            "Internal Server Error".to_string()
        }))
    }
}

/// Login form submission.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Build the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", get(login_page).post(login))
        .route("/auth/logout", post(logout))
}

/// Render the login page. Signed-in operators go straight to the users list.
///
/// GET /auth/login
async fn login_page(OptionalAdminAuth(admin): OptionalAdminAuth) -> Response {
    if admin.is_some() {
        return Redirect::to("/users").into_response();
    }

    LoginPageTemplate {
        email: String::new(),
        error: None,
    }
    .into_html()
    .into_response()
}

/// Check the submission and start an operator session.
///
/// POST /auth/login
#[instrument(skip(session, form), fields(email = %form.email))]
async fn login(
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let admin = match AuthService::new().login(&form.email, &form.password) {
        Ok(admin) => admin,
        Err(e) => {
            tracing::debug!(error = %e, "login rejected");
            let page = LoginPageTemplate {
                email: form.email,
                error: Some(e.to_string()),
            };
            return Ok((StatusCode::BAD_REQUEST, page.into_html()).into_response());
        }
    };

    set_current_admin(&session, &admin)
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?;
    set_sentry_user(&admin);

    Ok(Redirect::to("/users").into_response())
}

/// Logout and clear session.
///
/// POST /auth/logout
async fn logout(session: Session) -> impl IntoResponse {
    let _ = clear_current_admin(&session).await;
    clear_sentry_user();

    Redirect::to("/auth/login")
}
