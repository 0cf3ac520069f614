//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Formats a whole-naira amount, e.g. `1234567` as `₦1,234,567.00`.
///
/// Non-numeric input is passed through unchanged.
///
/// Usage in templates: `{{ user.account_balance|naira }}`
#[askama::filter_fn]
pub fn naira(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let raw = value.to_string();
    Ok(raw
        .parse::<u64>()
        .map_or(raw, lendsqr_core::format_naira))
}

/// Thousands separators for counts, e.g. `2453` as `2,453`.
///
/// Usage in templates: `{{ stats.users|thousands }}`
#[askama::filter_fn]
pub fn thousands(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let raw = value.to_string();
    Ok(raw
        .parse::<u64>()
        .map_or(raw, lendsqr_core::group_thousands))
}
