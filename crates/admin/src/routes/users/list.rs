//! Users list page handler.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use tower_sessions::Session;
use tracing::instrument;

use crate::{
    components::{DataTableConfig, users_table_config},
    db::UserStats,
    error::AppError,
    filters,
    middleware::RequireAdminAuth,
    routes::dashboard::ShellView,
    services::{PAGE_SIZES, Page, SortDirection, SortKey, UserQuery, query},
    state::AppState,
};

use super::types::{PageLinkView, PageSizeView, SortHeaderView, UserRowView, users_href};

/// Pages shown on either side of the current one in the pager.
const PAGER_WINDOW: usize = 2;

/// Users list page template.
#[derive(Template)]
#[template(path = "users/index.html")]
pub struct UsersIndexTemplate {
    pub shell: ShellView,
    pub stats: UserStats,
    pub table: DataTableConfig,
    pub headers: Vec<SortHeaderView>,
    pub rows: Vec<UserRowView>,
    /// Current filter values, for re-populating the filter form.
    pub q: String,
    pub status: String,
    pub organization: String,
    pub sort: String,
    pub dir: String,
    pub per_page: usize,
    pub page_sizes: Vec<PageSizeView>,
    pub total: usize,
    pub first_row: usize,
    pub last_row: usize,
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
    pub page_links: Vec<PageLinkView>,
    pub selected_id: Option<String>,
}

/// Everything the list page reads from the repository, taken under one guard.
struct ListSnapshot {
    page: Page<UserRowView>,
    stats: UserStats,
    table: DataTableConfig,
    selected_id: Option<String>,
}

/// Users list page handler.
///
/// GET /users
#[instrument(skip(admin, state, session))]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<UserQuery>,
) -> Result<Html<String>, AppError> {
    let criteria = params.criteria()?;

    let ListSnapshot {
        page,
        stats,
        table,
        selected_id,
    } = {
        let users = state.users().read().await;
        let selected = users.selected_id();
        ListSnapshot {
            page: query::run(&users, &criteria).map(|u| UserRowView::new(u, selected)),
            stats: users.stats(),
            table: users_table_config(&users.organizations()),
            selected_id: users.selected().map(|u| u.id.to_string()),
        }
    };
    let current = page.page;
    let total_pages = page.total_pages;
    let (total, first_row, last_row) = (page.total, page.first_row(), page.last_row());

    let (active_key, active_dir) = criteria.sort.unzip();
    let headers = table
        .columns
        .iter()
        .map(|column| {
            let is_active = active_key.is_some_and(|key| key.as_str() == column.key);
            let next_dir = match active_dir {
                Some(dir) if is_active => dir.reverse(),
                _ => SortDirection::Asc,
            };
            SortHeaderView {
                label: column.label.clone(),
                href: column.sortable.then(|| {
                    users_href(&UserQuery {
                        sort: Some(column.key.clone()),
                        dir: Some(next_dir.as_str().to_string()),
                        page: None,
                        ..params.clone()
                    })
                }),
                direction: active_dir.filter(|_| is_active).map(SortDirection::as_str),
            }
        })
        .collect();

    let page_href = |n: usize| {
        users_href(&UserQuery {
            page: Some(n),
            per_page: Some(criteria.per_page),
            ..params.clone()
        })
    };
    let window_start = current.saturating_sub(PAGER_WINDOW).max(1);
    let window_end = (current + PAGER_WINDOW).min(total_pages);
    let page_links = (window_start..=window_end)
        .map(|n| PageLinkView {
            number: n,
            href: page_href(n),
            current: n == current,
        })
        .collect();

    let template = UsersIndexTemplate {
        shell: ShellView::new(&admin, "/users")
            .with_search(&criteria.q)
            .with_flash(&session)
            .await,
        stats,
        table,
        headers,
        rows: page.items,
        q: criteria.q.clone(),
        status: criteria
            .status
            .map(|s| s.to_string())
            .unwrap_or_default(),
        organization: criteria.organization.clone().unwrap_or_default(),
        sort: active_key.map(SortKey::as_str).unwrap_or_default().to_string(),
        dir: active_dir.map(SortDirection::as_str).unwrap_or_default().to_string(),
        per_page: criteria.per_page,
        page_sizes: PAGE_SIZES
            .iter()
            .map(|&size| PageSizeView {
                size,
                selected: size == criteria.per_page,
            })
            .collect(),
        total,
        first_row,
        last_row,
        prev_href: (current > 1).then(|| page_href(current - 1)),
        next_href: (current < total_pages).then(|| page_href(current + 1)),
        page_links,
        selected_id,
    };

    Ok(Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    })))
}
