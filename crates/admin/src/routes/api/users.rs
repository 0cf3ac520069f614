//! JSON API for the users collection.

use std::convert::Infallible;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::{
        Sse,
        sse::{Event, KeepAlive},
    },
    routing::get,
};
use tokio::sync::broadcast::error::RecvError;
use tracing::instrument;

use lendsqr_core::UserRecord;

use crate::{
    db::UserEvent,
    error::AppError,
    middleware::RequireAdminAuth,
    routes::parse_user_id,
    services::{Page, UserQuery, query},
    state::AppState,
};

/// Build the users API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(list))
        .route("/api/users/selected", get(selected))
        .route("/api/users/events", get(events))
        .route(
            "/api/users/{id}",
            get(show).put(replace).delete(remove),
        )
}

/// List users with the same search, filter, sort and paging as the table.
///
/// GET /api/users
#[instrument(skip(_admin, state))]
async fn list(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Query(params): Query<UserQuery>,
) -> Result<Json<Page<UserRecord>>, AppError> {
    let criteria = params.criteria()?;
    let users = state.users().read().await;
    let page = query::run(&users, &criteria).map(Clone::clone);
    Ok(Json(page))
}

/// The selected record, or `null`.
///
/// GET /api/users/selected
async fn selected(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Json<Option<UserRecord>> {
    Json(state.users().read().await.selected().cloned())
}

/// One record by id.
///
/// GET /api/users/{id}
#[instrument(skip(_admin, state))]
async fn show(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserRecord>, AppError> {
    let id = parse_user_id(&id)?;
    state
        .users()
        .read()
        .await
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("user {id}")))
}

/// Replace a record. The body id must match the path.
///
/// PUT /api/users/{id}
#[instrument(skip(admin, state, record))]
async fn replace(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(record): Json<UserRecord>,
) -> Result<Json<UserRecord>, AppError> {
    let id = parse_user_id(&id)?;
    if record.id != id {
        return Err(AppError::BadRequest(format!(
            "body id {} does not match path id {id}",
            record.id
        )));
    }

    state.users().write().await.update(record.clone())?;
    tracing::info!(user_id = %id, operator = %admin.email, "user replaced via API");
    Ok(Json(record))
}

/// Delete a record, returning what was removed.
///
/// DELETE /api/users/{id}
#[instrument(skip(admin, state))]
async fn remove(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserRecord>, AppError> {
    let id = parse_user_id(&id)?;
    let removed = state.users().write().await.delete(&id)?;
    tracing::info!(user_id = %id, operator = %admin.email, "user deleted via API");
    Ok(Json(removed))
}

/// Stream repository changes as server-sent events.
///
/// GET /api/users/events
///
/// Each event's data is the JSON form of a `UserEvent`. Slow clients that
/// fall behind the channel skip the missed events.
async fn events(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Sse<impl futures::Stream<Item = Result<Event, Infallible>>> {
    let mut rx = state.users().read().await.subscribe();

    let stream = async_stream::stream! {
        loop {
            match rx.recv().await {
                Ok(event) => yield Ok(to_sse(&event)),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "user event subscriber lagged");
                }
                Err(RecvError::Closed) => break,
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}

fn to_sse(event: &UserEvent) -> Event {
    let json = serde_json::to_string(event).unwrap_or_default();
    Event::default().event(event.kind()).data(json)
}
