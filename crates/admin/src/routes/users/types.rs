//! Types for user routes.

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use lendsqr_core::{
    Gender, Guarantor, MaritalStatus, ParseEnumError, Tier, TierError, UserId, UserRecord,
    UserStatus, format_naira,
};

use crate::services::UserQuery;

// =============================================================================
// Status Badges
// =============================================================================

/// CSS modifier for a status badge.
#[must_use]
pub const fn status_badge_class(status: UserStatus) -> &'static str {
    match status {
        UserStatus::Active => "badge-green",
        UserStatus::Inactive => "badge-gray",
        UserStatus::Pending => "badge-yellow",
        UserStatus::Blacklisted => "badge-red",
    }
}

/// Display format for the date joined column.
fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

// =============================================================================
// Table Views
// =============================================================================

/// One row of the users table.
#[derive(Debug, Clone)]
pub struct UserRowView {
    pub id: String,
    pub organization: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub date_joined: String,
    pub status: String,
    pub status_class: &'static str,
    pub selected: bool,
}

impl UserRowView {
    #[must_use]
    pub fn new(user: &UserRecord, selected: Option<&UserId>) -> Self {
        Self {
            id: user.id.to_string(),
            organization: user.organization.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            phone_number: user.phone_number.clone(),
            date_joined: format_date(user.date_joined),
            status: user.status.to_string(),
            status_class: status_badge_class(user.status),
            selected: selected == Some(&user.id),
        }
    }
}

/// Sortable column header with its toggle link.
#[derive(Debug, Clone)]
pub struct SortHeaderView {
    pub label: String,
    pub href: Option<String>,
    /// `"asc"` or `"desc"` when this column is the active sort.
    pub direction: Option<&'static str>,
}

/// Entry in the rows-per-page selector.
#[derive(Debug, Clone)]
pub struct PageSizeView {
    pub size: usize,
    pub selected: bool,
}

/// Numbered pagination link.
#[derive(Debug, Clone)]
pub struct PageLinkView {
    pub number: usize,
    pub href: String,
    pub current: bool,
}

// =============================================================================
// Detail View
// =============================================================================

/// Label/value pair in a detail section.
#[derive(Debug, Clone)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

impl DetailField {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Titled group of fields, rendered as one tab panel.
#[derive(Debug, Clone)]
pub struct DetailSection {
    pub key: &'static str,
    pub title: &'static str,
    pub fields: Vec<DetailField>,
}

/// User detail page view.
#[derive(Debug, Clone)]
pub struct UserDetailView {
    pub id: String,
    pub full_name: String,
    /// Star icon classes for the tier rating, filled up to the tier.
    pub tier_icons: Vec<&'static str>,
    pub account_balance: String,
    pub account_number: String,
    pub bank_name: String,
    pub status: String,
    pub status_class: &'static str,
    pub sections: Vec<DetailSection>,
}

impl From<&UserRecord> for UserDetailView {
    fn from(user: &UserRecord) -> Self {
        let g = &user.guarantor;
        let sections = vec![
            DetailSection {
                key: "personal",
                title: "Personal Information",
                fields: vec![
                    DetailField::new("Full Name", user.full_name()),
                    DetailField::new("Phone Number", user.phone_number.clone()),
                    DetailField::new("Email Address", user.email.clone()),
                    DetailField::new("BVN", user.bvn.clone()),
                    DetailField::new("Gender", user.gender.as_str()),
                    DetailField::new("Marital Status", user.marital_status.as_str()),
                    DetailField::new("Children", user.children.clone()),
                    DetailField::new("Type of Residence", user.type_of_residence.clone()),
                    DetailField::new("Date Joined", format_date(user.date_joined)),
                    DetailField::new("Organization", user.organization.clone()),
                    DetailField::new("Username", user.username.clone()),
                ],
            },
            DetailSection {
                key: "employment",
                title: "Education and Employment",
                fields: vec![
                    DetailField::new("Level of Education", user.level_of_education.clone()),
                    DetailField::new("Employment Status", user.employment_status.clone()),
                    DetailField::new("Sector of Employment", user.sector_of_employment.clone()),
                    DetailField::new("Duration of Employment", user.duration_of_employment.clone()),
                    DetailField::new("Office Email", user.office_email.clone()),
                    DetailField::new("Monthly Income", user.monthly_income.clone()),
                    DetailField::new("Loan Repayment", user.loan_repayment.clone()),
                ],
            },
            DetailSection {
                key: "socials",
                title: "Socials",
                fields: vec![
                    DetailField::new("Twitter", user.twitter.clone()),
                    DetailField::new("Facebook", user.facebook.clone()),
                    DetailField::new("Instagram", user.instagram.clone()),
                ],
            },
            DetailSection {
                key: "guarantor",
                title: "Guarantor",
                fields: vec![
                    DetailField::new("Full Name", g.full_name.clone()),
                    DetailField::new("Phone Number", g.phone_number.clone()),
                    DetailField::new("Email Address", g.email.clone()),
                    DetailField::new("Relationship", g.relationship.clone()),
                ],
            },
        ];

        Self {
            id: user.id.to_string(),
            full_name: user.full_name(),
            tier_icons: user
                .tier
                .stars()
                .iter()
                .map(|&filled| if filled { "ph-fill ph-star" } else { "ph ph-star" })
                .collect(),
            account_balance: format_naira(user.account_balance),
            account_number: user.account_number.clone(),
            bank_name: user.bank_name.clone(),
            status: user.status.to_string(),
            status_class: status_badge_class(user.status),
            sections,
        }
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Status change submitted from the detail page.
#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: String,
}

/// Edit form validation errors.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error(transparent)]
    Enum(#[from] ParseEnumError),

    #[error("tier must be a number between 1 and 3 (got {0:?})")]
    TierNotANumber(String),

    #[error(transparent)]
    Tier(#[from] TierError),

    #[error("account balance must be a whole, non-negative amount (got {0:?})")]
    AccountBalance(String),

    #[error("date joined must be YYYY-MM-DD (got {0:?})")]
    DateJoined(String),
}

/// Full-record edit form. Field names match the JSON keys.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub date_joined: String,
    pub status: String,
    pub organization: String,
    pub username: String,
    pub bvn: String,
    pub gender: String,
    pub marital_status: String,
    pub children: String,
    pub type_of_residence: String,
    pub level_of_education: String,
    pub employment_status: String,
    pub sector_of_employment: String,
    pub duration_of_employment: String,
    pub office_email: String,
    pub monthly_income: String,
    pub loan_repayment: String,
    pub twitter: String,
    pub facebook: String,
    pub instagram: String,
    pub guarantor_full_name: String,
    pub guarantor_phone_number: String,
    pub guarantor_email: String,
    pub guarantor_relationship: String,
    pub account_balance: String,
    pub account_number: String,
    pub bank_name: String,
    pub tier: String,
}

impl From<&UserRecord> for UserForm {
    fn from(user: &UserRecord) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            phone_number: user.phone_number.clone(),
            date_joined: user.date_joined.format("%Y-%m-%d").to_string(),
            status: user.status.to_string(),
            organization: user.organization.clone(),
            username: user.username.clone(),
            bvn: user.bvn.clone(),
            gender: user.gender.to_string(),
            marital_status: user.marital_status.to_string(),
            children: user.children.clone(),
            type_of_residence: user.type_of_residence.clone(),
            level_of_education: user.level_of_education.clone(),
            employment_status: user.employment_status.clone(),
            sector_of_employment: user.sector_of_employment.clone(),
            duration_of_employment: user.duration_of_employment.clone(),
            office_email: user.office_email.clone(),
            monthly_income: user.monthly_income.clone(),
            loan_repayment: user.loan_repayment.clone(),
            twitter: user.twitter.clone(),
            facebook: user.facebook.clone(),
            instagram: user.instagram.clone(),
            guarantor_full_name: user.guarantor.full_name.clone(),
            guarantor_phone_number: user.guarantor.phone_number.clone(),
            guarantor_email: user.guarantor.email.clone(),
            guarantor_relationship: user.guarantor.relationship.clone(),
            account_balance: user.account_balance.to_string(),
            account_number: user.account_number.clone(),
            bank_name: user.bank_name.clone(),
            tier: user.tier.get().to_string(),
        }
    }
}

impl UserForm {
    /// Validate the form and build the replacement record for `id`.
    ///
    /// # Errors
    ///
    /// Returns the first `FormError` found; nothing is written.
    pub fn into_record(self, id: UserId) -> Result<UserRecord, FormError> {
        let first_name = required(self.first_name, "First name")?;
        let last_name = required(self.last_name, "Last name")?;
        let status: UserStatus = self.status.trim().parse()?;
        let gender: Gender = self.gender.trim().parse()?;
        let marital_status: MaritalStatus = self.marital_status.trim().parse()?;

        let tier_raw = self.tier.trim();
        let tier = Tier::try_from(
            tier_raw
                .parse::<u8>()
                .map_err(|_| FormError::TierNotANumber(tier_raw.to_string()))?,
        )?;

        let balance_raw = self.account_balance.trim().replace(',', "");
        let account_balance = balance_raw
            .parse::<u64>()
            .map_err(|_| FormError::AccountBalance(self.account_balance.clone()))?;

        let date_joined = NaiveDate::parse_from_str(self.date_joined.trim(), "%Y-%m-%d")
            .map_err(|_| FormError::DateJoined(self.date_joined.clone()))?;

        Ok(UserRecord {
            id,
            first_name,
            last_name,
            email: self.email,
            phone_number: self.phone_number,
            date_joined,
            status,
            organization: self.organization,
            username: self.username,
            bvn: self.bvn,
            gender,
            marital_status,
            children: self.children,
            type_of_residence: self.type_of_residence,
            level_of_education: self.level_of_education,
            employment_status: self.employment_status,
            sector_of_employment: self.sector_of_employment,
            duration_of_employment: self.duration_of_employment,
            office_email: self.office_email,
            monthly_income: self.monthly_income,
            loan_repayment: self.loan_repayment,
            twitter: self.twitter,
            facebook: self.facebook,
            instagram: self.instagram,
            guarantor: Guarantor {
                full_name: self.guarantor_full_name,
                phone_number: self.guarantor_phone_number,
                email: self.guarantor_email,
                relationship: self.guarantor_relationship,
            },
            account_balance,
            account_number: self.account_number,
            bank_name: self.bank_name,
            tier,
        })
    }
}

fn required(value: String, field: &'static str) -> Result<String, FormError> {
    if value.trim().is_empty() {
        Err(FormError::Required(field))
    } else {
        Ok(value)
    }
}

// =============================================================================
// Query String Helpers
// =============================================================================

/// Encode list parameters for links, skipping empty values.
#[must_use]
pub fn list_query_string(query: &UserQuery) -> String {
    let mut out = url::form_urlencoded::Serializer::new(String::new());
    let text = [
        ("q", &query.q),
        ("status", &query.status),
        ("organization", &query.organization),
        ("sort", &query.sort),
        ("dir", &query.dir),
    ];
    for (key, value) in text {
        if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
            out.append_pair(key, v);
        }
    }
    if let Some(page) = query.page {
        out.append_pair("page", &page.to_string());
    }
    if let Some(per_page) = query.per_page {
        out.append_pair("per_page", &per_page.to_string());
    }
    out.finish()
}

/// `/users` link for `query`.
#[must_use]
pub fn users_href(query: &UserQuery) -> String {
    let qs = list_query_string(query);
    if qs.is_empty() {
        "/users".to_string()
    } else {
        format!("/users?{qs}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_support::sample_user;

    #[test]
    fn test_status_badge_classes() {
        assert_eq!(status_badge_class(UserStatus::Active), "badge-green");
        assert_eq!(status_badge_class(UserStatus::Inactive), "badge-gray");
        assert_eq!(status_badge_class(UserStatus::Pending), "badge-yellow");
        assert_eq!(status_badge_class(UserStatus::Blacklisted), "badge-red");
    }

    #[test]
    fn test_form_prefill_round_trips() {
        let user = sample_user(4, "Grace", "Effiom", UserStatus::Pending, "Lendsqr");
        let form = UserForm::from(&user);
        assert_eq!(form.into_record(user.id.clone()).unwrap(), user);
    }

    #[test]
    fn test_form_rejects_bad_values() {
        let user = sample_user(4, "Grace", "Effiom", UserStatus::Pending, "Lendsqr");
        let id = user.id.clone();

        let mut form = UserForm::from(&user);
        form.status = "Frozen".to_string();
        assert!(matches!(form.into_record(id.clone()), Err(FormError::Enum(_))));

        let mut form = UserForm::from(&user);
        form.tier = "4".to_string();
        assert!(matches!(form.into_record(id.clone()), Err(FormError::Tier(_))));

        let mut form = UserForm::from(&user);
        form.tier = "gold".to_string();
        assert!(matches!(
            form.into_record(id.clone()),
            Err(FormError::TierNotANumber(_))
        ));

        let mut form = UserForm::from(&user);
        form.account_balance = "-5".to_string();
        assert!(matches!(
            form.into_record(id.clone()),
            Err(FormError::AccountBalance(_))
        ));

        let mut form = UserForm::from(&user);
        form.date_joined = "2021-02-30".to_string();
        assert!(matches!(
            form.into_record(id.clone()),
            Err(FormError::DateJoined(_))
        ));

        let mut form = UserForm::from(&user);
        form.first_name = "  ".to_string();
        assert!(matches!(
            form.into_record(id),
            Err(FormError::Required("First name"))
        ));
    }

    #[test]
    fn test_form_accepts_grouped_balance() {
        let user = sample_user(4, "Grace", "Effiom", UserStatus::Pending, "Lendsqr");
        let mut form = UserForm::from(&user);
        form.account_balance = "1,250,000".to_string();
        assert_eq!(
            form.into_record(user.id).unwrap().account_balance,
            1_250_000
        );
    }

    #[test]
    fn test_detail_view() {
        let mut user = sample_user(4, "Grace", "Effiom", UserStatus::Blacklisted, "Lendsqr");
        user.account_balance = 1_234_567;
        user.tier = Tier::try_from(2).unwrap();
        let view = UserDetailView::from(&user);
        assert_eq!(view.full_name, "Grace Effiom");
        assert_eq!(view.account_balance, "₦1,234,567.00");
        assert_eq!(
            view.tier_icons,
            vec!["ph-fill ph-star", "ph-fill ph-star", "ph ph-star"]
        );
        assert_eq!(view.status_class, "badge-red");
        let titles: Vec<&str> = view.sections.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec![
                "Personal Information",
                "Education and Employment",
                "Socials",
                "Guarantor"
            ]
        );
    }

    #[test]
    fn test_users_href_skips_empty_values() {
        let query = UserQuery {
            q: Some("grace effiom".to_string()),
            status: Some(String::new()),
            sort: Some("email".to_string()),
            page: Some(2),
            ..UserQuery::default()
        };
        assert_eq!(users_href(&query), "/users?q=grace+effiom&sort=email&page=2");
        assert_eq!(users_href(&UserQuery::default()), "/users");
    }

    #[test]
    fn test_row_marks_selection() {
        let user = sample_user(4, "Grace", "Effiom", UserStatus::Active, "Lendsqr");
        assert!(UserRowView::new(&user, Some(&user.id)).selected);
        assert!(!UserRowView::new(&user, None).selected);
    }
}
