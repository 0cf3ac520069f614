//! Integration tests for the Lendsqr back-office.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p lendsqr-integration-tests
//! ```
//!
//! Tests drive the full admin router in-process with
//! `tower::ServiceExt::oneshot`; no server or network is needed.
//!
//! # Test Categories
//!
//! - `admin_auth` - Login gate, logout, unauthenticated access
//! - `admin_users` - Users pages, forms and actions
//! - `admin_api` - JSON API and event stream

#![allow(clippy::missing_panics_doc)]

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tower::ServiceExt;

use lendsqr_admin::config::AdminConfig;
use lendsqr_admin::db::UserRepository;
use lendsqr_admin::services::DataSource;
use lendsqr_admin::state::AppState;
use lendsqr_core::UserRecord;

/// Seed used for every generated test dataset.
pub const TEST_SEED: u64 = 20_240_601;

/// Email used by `TestApp::login`.
pub const OPERATOR_EMAIL: &str = "grace.effiom@lendsqr.com";

/// The admin router plus the session cookie of the signed-in operator.
pub struct TestApp {
    router: Router,
    state: AppState,
    cookie: Option<String>,
}

/// Buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The `Location` header of a redirect.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    /// Parse the body as JSON.
    #[must_use]
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_str(&self.body).expect("response body is not the expected JSON")
    }
}

impl TestApp {
    /// An app seeded with `count` generated users.
    pub async fn generated(count: u32) -> Self {
        let users = DataSource::Generated {
            count,
            seed: Some(TEST_SEED),
        }
        .load()
        .await
        .expect("generate test users");
        Self::with_users(users)
    }

    /// An app seeded with exactly `users`.
    #[must_use]
    pub fn with_users(users: Vec<UserRecord>) -> Self {
        let config = AdminConfig::from_lookup(|_| None).expect("default config");
        let state = AppState::new(config, UserRepository::new(users));
        Self {
            router: lendsqr_admin::app(state.clone()),
            state,
            cookie: None,
        }
    }

    /// Shared state, for inspecting the repository directly.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Sign in and keep the session cookie for later requests.
    pub async fn login(&mut self) {
        let body = form_encode(&[("email", OPERATOR_EMAIL), ("password", "secret")]);
        let response = self.post_form("/auth/login", &body).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER, "login failed");

        let cookie = response
            .headers
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .expect("login sets a session cookie")
            .to_string();
        self.cookie = Some(cookie);
    }

    /// Sign in, returning the app.
    pub async fn logged_in(mut self) -> Self {
        self.login().await;
        self
    }

    /// Drop the session cookie.
    pub fn forget_session(&mut self) {
        self.cookie = None;
    }

    /// `GET uri`.
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(self.request("GET", uri).body(Body::empty()).expect("request"))
            .await
    }

    /// `POST uri` with a form body.
    pub async fn post_form(&self, uri: &str, body: &str) -> TestResponse {
        let request = self
            .request("POST", uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .expect("request");
        self.send(request).await
    }

    /// `method uri` with a JSON body.
    pub async fn send_json(&self, method: &str, uri: &str, body: &Value) -> TestResponse {
        let request = self
            .request(method, uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");
        self.send(request).await
    }

    /// `DELETE uri`.
    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(self.request("DELETE", uri).body(Body::empty()).expect("request"))
            .await
    }

    /// Send a request and read only its head; for streaming responses.
    pub async fn head_only(&self, uri: &str) -> (StatusCode, HeaderMap) {
        let request = self.request("GET", uri).body(Body::empty()).expect("request");
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        (response.status(), response.headers().clone())
    }

    fn request(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(uri);
        match &self.cookie {
            Some(cookie) => builder.header(header::COOKIE, cookie),
            None => builder,
        }
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

/// `application/x-www-form-urlencoded` body from pairs.
#[must_use]
pub fn form_encode(pairs: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Edit-form body for a record: its JSON keys, with guarantor fields
/// flattened as `guarantorFullName` and so on.
#[must_use]
pub fn edit_form_body(user: &UserRecord) -> String {
    let value = serde_json::to_value(user).expect("record serializes");
    let mut pairs: Vec<(String, String)> = Vec::new();
    if let Value::Object(fields) = value {
        for (key, field) in fields {
            match field {
                Value::Object(nested) => {
                    for (inner, v) in nested {
                        let mut chars = inner.chars();
                        let capitalized = chars
                            .next()
                            .map(|c| c.to_uppercase().chain(chars).collect::<String>())
                            .unwrap_or_default();
                        pairs.push((format!("{key}{capitalized}"), scalar(&v)));
                    }
                }
                other => pairs.push((key, scalar(&other))),
            }
        }
    }
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
