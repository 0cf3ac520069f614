//! Dashboard and placeholder section handlers, plus the page shell shared by
//! every signed-in view.

use askama::Template;
use axum::{
    Router,
    extract::{Path, State},
    response::{Html, Redirect},
    routing::get,
};
use tower_sessions::Session;
use tracing::instrument;

use crate::{
    components::{NavSection, section_title, sidebar},
    db::UserStats,
    error::AppError,
    filters,
    middleware::{RequireAdminAuth, take_flash},
    models::CurrentAdmin,
    state::AppState,
};

/// Unread notifications shown on the bell in the top bar.
const NOTIFICATION_COUNT: u32 = 3;

/// Admin user view for templates.
#[derive(Debug, Clone)]
pub struct AdminUserView {
    pub name: String,
    pub email: String,
    pub initial: char,
    pub role: String,
}

impl From<&CurrentAdmin> for AdminUserView {
    fn from(admin: &CurrentAdmin) -> Self {
        Self {
            name: admin.name.clone(),
            email: admin.email.to_string(),
            initial: admin.initial(),
            role: admin.role.to_string(),
        }
    }
}

/// Sidebar entry with its active state resolved.
#[derive(Debug, Clone)]
pub struct NavItemView {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: String,
    pub active: bool,
    pub is_logout: bool,
}

/// Sidebar group for templates.
#[derive(Debug, Clone)]
pub struct NavSectionView {
    pub title: Option<&'static str>,
    pub items: Vec<NavItemView>,
}

impl NavSectionView {
    fn build(section: &NavSection, current_path: &str) -> Self {
        Self {
            title: section.title,
            items: section
                .items
                .iter()
                .map(|item| NavItemView {
                    label: item.label,
                    icon: item.icon,
                    href: item.href(),
                    active: item.is_active(current_path),
                    is_logout: item.is_logout(),
                })
                .collect(),
        }
    }
}

/// Everything `base.html` needs: top bar, sidebar and flash notice.
#[derive(Debug, Clone)]
pub struct ShellView {
    pub admin_user: AdminUserView,
    pub current_path: String,
    pub nav: Vec<NavSectionView>,
    pub notifications: u32,
    pub search_query: String,
    pub flash: Option<String>,
}

impl ShellView {
    /// Build the shell for `current_path`.
    #[must_use]
    pub fn new(admin: &CurrentAdmin, current_path: &str) -> Self {
        Self {
            admin_user: AdminUserView::from(admin),
            current_path: current_path.to_string(),
            nav: sidebar()
                .iter()
                .map(|section| NavSectionView::build(section, current_path))
                .collect(),
            notifications: NOTIFICATION_COUNT,
            search_query: String::new(),
            flash: None,
        }
    }

    /// Pre-fill the global search box.
    #[must_use]
    pub fn with_search(mut self, query: &str) -> Self {
        self.search_query = query.to_string();
        self
    }

    /// Attach the queued flash notice, consuming it from the session.
    pub async fn with_flash(mut self, session: &Session) -> Self {
        self.flash = take_flash(session).await;
        self
    }
}

/// Dashboard template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub shell: ShellView,
    pub stats: UserStats,
}

/// Placeholder page for sidebar sections that have no screen yet.
#[derive(Template)]
#[template(path = "section.html")]
pub struct SectionTemplate {
    pub shell: ShellView,
    pub title: String,
}

/// Build the dashboard router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/users") }))
        .route("/dashboard", get(dashboard))
        .route("/sections/{id}", get(section))
}

/// Dashboard page handler.
///
/// GET /dashboard
#[instrument(skip(admin, state, session))]
async fn dashboard(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
) -> Html<String> {
    let stats = state.users().read().await.stats();

    let template = DashboardTemplate {
        shell: ShellView::new(&admin, "/dashboard")
            .with_flash(&session)
            .await,
        stats,
    };

    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    }))
}

/// Placeholder section handler.
///
/// GET /sections/{id}
#[instrument(skip(admin))]
async fn section(
    RequireAdminAuth(admin): RequireAdminAuth,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let item = crate::components::find_item(&id)
        .ok_or_else(|| AppError::NotFound(format!("section {id}")))?;

    let template = SectionTemplate {
        shell: ShellView::new(&admin, &item.href()),
        title: section_title(item.id),
    };

    Ok(Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    })))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use lendsqr_core::{AdminRole, AuthenticatedUser, Email};

    use super::*;

    fn operator() -> CurrentAdmin {
        AuthenticatedUser::from_email(
            Email::parse("grace.effiom@lendsqr.com").unwrap(),
            AdminRole::Admin,
        )
    }

    #[test]
    fn test_shell_marks_active_item() {
        let shell = ShellView::new(&operator(), "/users");
        let active: Vec<&str> = shell
            .nav
            .iter()
            .flat_map(|s| s.items.iter())
            .filter(|i| i.active)
            .map(|i| i.label)
            .collect();
        assert_eq!(active, vec!["Users"]);
        assert_eq!(shell.admin_user.name, "Grace Effiom");
        assert_eq!(shell.admin_user.initial, 'G');
    }

    #[test]
    fn test_section_template_renders_title() {
        let html = SectionTemplate {
            shell: ShellView::new(&operator(), "/sections/loan-requests"),
            title: section_title("loan-requests"),
        }
        .render()
        .unwrap();
        assert!(html.contains("Loan requests"));
        assert!(html.contains("under development"));
    }
}
