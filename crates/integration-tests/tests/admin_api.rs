//! Integration tests for the users JSON API and event stream.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use axum::http::{StatusCode, header};
use serde_json::{Value, json};

use lendsqr_admin::db::UserEvent;
use lendsqr_core::{UserRecord, UserStatus};
use lendsqr_integration_tests::TestApp;

#[tokio::test]
async fn test_list_returns_page() {
    let app = TestApp::generated(30).await.logged_in().await;

    let response = app.get("/api/users?per_page=20&page=2").await;
    assert_eq!(response.status, StatusCode::OK);
    let page: Value = response.json();
    assert_eq!(page["total"], 30);
    assert_eq!(page["page"], 2);
    assert_eq!(page["total_pages"], 2);
    assert_eq!(page["items"].as_array().map(Vec::len), Some(10));

    let all: Vec<UserRecord> = app.state().users().read().await.list().to_vec();
    let first_on_page: UserRecord = serde_json::from_value(page["items"][0].clone()).unwrap();
    assert_eq!(Some(&first_on_page), all.get(20));
}

#[tokio::test]
async fn test_list_filters_by_status() {
    let app = TestApp::generated(40).await.logged_in().await;

    let response = app.get("/api/users?status=Active&per_page=100").await;
    assert_eq!(response.status, StatusCode::OK);
    let page: Value = response.json();
    let items: Vec<UserRecord> = serde_json::from_value(page["items"].clone()).unwrap();
    assert!(items.iter().all(|u| u.status == UserStatus::Active));

    let expected = app.state().users().read().await.filter(Some(UserStatus::Active), None).len();
    assert_eq!(items.len(), expected);
}

#[tokio::test]
async fn test_list_search_matches_repository_search() {
    let app = TestApp::generated(40).await.logged_in().await;

    let response = app.get("/api/users?q=%20a&per_page=100").await;
    assert_eq!(response.status, StatusCode::OK);
    let page: Value = response.json();
    let items: Vec<UserRecord> = serde_json::from_value(page["items"].clone()).unwrap();

    let expected: Vec<UserRecord> = app
        .state()
        .users()
        .read()
        .await
        .search(" a")
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(page["total"], expected.len());
    assert_eq!(items, expected);
}

#[tokio::test]
async fn test_list_rejects_bad_sort() {
    let app = TestApp::generated(3).await.logged_in().await;
    assert_eq!(
        app.get("/api/users?sort=balance").await.status,
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn test_get_and_selected() {
    let app = TestApp::generated(3).await.logged_in().await;
    let user = app.state().users().read().await.list()[1].clone();

    let response = app.get(&format!("/api/users/{}", user.id)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json::<UserRecord>(), user);

    let response = app.get("/api/users/selected").await;
    assert_eq!(response.json::<Option<UserRecord>>(), None);

    // The detail page selects
    app.get(&format!("/users/{}", user.id)).await;
    let response = app.get("/api/users/selected").await;
    assert_eq!(response.json::<Option<UserRecord>>(), Some(user));
}

#[tokio::test]
async fn test_put_replaces_record() {
    let app = TestApp::generated(3).await.logged_in().await;
    let mut user = app.state().users().read().await.list()[0].clone();
    user.status = UserStatus::Inactive;
    user.organization = "Paystack".to_string();

    let body = serde_json::to_value(&user).unwrap();
    let response = app
        .send_json("PUT", &format!("/api/users/{}", user.id), &body)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json::<UserRecord>(), user);

    let stored = app.state().users().read().await.get(&user.id).cloned();
    assert_eq!(stored, Some(user));
}

#[tokio::test]
async fn test_put_rejects_mismatched_id() {
    let app = TestApp::generated(3).await.logged_in().await;
    let (first, second) = {
        let repo = app.state().users().read().await;
        (repo.list()[0].clone(), repo.list()[1].clone())
    };

    let body = serde_json::to_value(&second).unwrap();
    let response = app
        .send_json("PUT", &format!("/api/users/{}", first.id), &body)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let repo = app.state().users().read().await;
    assert_eq!(repo.get(&first.id), Some(&first));
    assert_eq!(repo.get(&second.id), Some(&second));
}

#[tokio::test]
async fn test_put_rejects_invalid_body() {
    let app = TestApp::generated(3).await.logged_in().await;
    let user = app.state().users().read().await.list()[0].clone();

    let mut body = serde_json::to_value(&user).unwrap();
    body["tier"] = json!(7);
    let response = app
        .send_json("PUT", &format!("/api/users/{}", user.id), &body)
        .await;
    assert!(response.status.is_client_error());

    let stored = app.state().users().read().await.get(&user.id).cloned();
    assert_eq!(stored, Some(user));
}

#[tokio::test]
async fn test_delete_returns_removed_record() {
    let app = TestApp::generated(3).await.logged_in().await;
    let user = app.state().users().read().await.list()[2].clone();

    let response = app.delete(&format!("/api/users/{}", user.id)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json::<UserRecord>(), user);

    let response = app.delete(&format!("/api/users/{}", user.id)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .send_json(
            "PUT",
            &format!("/api/users/{}", user.id),
            &serde_json::to_value(&user).unwrap(),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(app.state().users().read().await.len(), 2);
}

#[tokio::test]
async fn test_mutations_publish_events() {
    let app = TestApp::generated(3).await.logged_in().await;
    let mut events = app.state().users().read().await.subscribe();
    let user = app.state().users().read().await.list()[0].clone();

    app.get(&format!("/users/{}", user.id)).await;
    app.delete(&format!("/api/users/{}", user.id)).await;

    assert_eq!(
        events.recv().await.unwrap(),
        UserEvent::SelectionChanged {
            id: Some(user.id.clone())
        }
    );
    assert_eq!(
        events.recv().await.unwrap(),
        UserEvent::Deleted { id: user.id }
    );
}

#[tokio::test]
async fn test_event_stream_is_sse() {
    let app = TestApp::generated(1).await.logged_in().await;
    let (status, headers) = app.head_only("/api/users/events").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("text/event-stream")
    );
}
