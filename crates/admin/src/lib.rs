//! Lendsqr Admin library.
//!
//! This crate provides the back-office panel as a library, allowing it to be
//! tested in-process and reused by the CLI.
//!
//! # Security
//!
//! The panel exposes customer PII (BVN, phone numbers, balances). Operators
//! must sign in; every page and API route sits behind `RequireAdminAuth`.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod components;
pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::{Router, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use middleware::create_session_layer;
use state::AppState;

/// Directory served under `/static`.
const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Build the admin application: health check, routes, static assets,
/// sessions and request tracing.
///
/// Sentry layers are added by the binary so tests run without a DSN.
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(session_layer)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod test_support {
    use chrono::NaiveDate;
    use lendsqr_core::{Gender, Guarantor, MaritalStatus, Tier, UserId, UserRecord, UserStatus};

    /// A complete, valid record whose searchable fields derive from the
    /// arguments: email `first.last@org.com`, username `firstlast`.
    pub fn sample_user(
        seq: u32,
        first: &str,
        last: &str,
        status: UserStatus,
        organization: &str,
    ) -> UserRecord {
        let first_lower = first.to_lowercase();
        let last_lower = last.to_lowercase();
        UserRecord {
            id: UserId::from_sequence(seq).unwrap(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!(
                "{first_lower}.{last_lower}@{}.com",
                organization.to_lowercase()
            ),
            phone_number: format!("0706078{seq:04}"),
            date_joined: NaiveDate::from_ymd_opt(2021, 3, 14).unwrap(),
            status,
            organization: organization.to_string(),
            username: format!("{first_lower}{last_lower}"),
            bvn: "22345678901".to_string(),
            gender: Gender::Female,
            marital_status: MaritalStatus::Single,
            children: "None".to_string(),
            type_of_residence: "Parent's Apartment".to_string(),
            level_of_education: "B.Sc".to_string(),
            employment_status: "Employed".to_string(),
            sector_of_employment: "FinTech".to_string(),
            duration_of_employment: "2 years".to_string(),
            office_email: format!("{first_lower}.{last_lower}@company.com"),
            monthly_income: "₦200,000.00".to_string(),
            loan_repayment: "₦40,000".to_string(),
            twitter: format!("@{first_lower}_{last_lower}"),
            facebook: format!("{first} {last}"),
            instagram: format!("@{first_lower}_{last_lower}"),
            guarantor: Guarantor {
                full_name: "Debby Ogana".to_string(),
                phone_number: "07060780922".to_string(),
                email: "debby@gmail.com".to_string(),
                relationship: "Sister".to_string(),
            },
            account_balance: 200_000,
            account_number: "9912345678".to_string(),
            bank_name: "Providus Bank".to_string(),
            tier: Tier::try_from(1).unwrap(),
        }
    }
}
