//! Dataset search.
//!
//! # Usage
//!
//! ```bash
//! lendsqr-cli search --input users.json --q grace --status Active
//! ```

use std::io::Write;

use thiserror::Error;

use lendsqr_admin::db::{SearchTerm, UserFilter, UserRepository};
use lendsqr_admin::services::{DataSource, SeedError};
use lendsqr_core::{ParseEnumError, UserRecord, UserStatus};

/// Errors that can occur while searching.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The dataset could not be loaded.
    #[error(transparent)]
    Seed(#[from] SeedError),

    /// The status filter is not a known status.
    #[error(transparent)]
    Status(#[from] ParseEnumError),

    /// Results could not be written.
    #[error("Failed to write results: {0}")]
    Write(#[from] std::io::Error),
}

/// Records matching `q` and the filters, in collection order.
#[must_use]
pub fn matching<'a>(
    repo: &'a UserRepository,
    q: &str,
    status: Option<UserStatus>,
    organization: Option<&str>,
) -> Vec<&'a UserRecord> {
    let term = SearchTerm::new(q);
    let filter = UserFilter {
        status,
        organization,
    };
    repo.list()
        .iter()
        .filter(|u| term.as_ref().is_none_or(|t| t.matches(u)) && filter.matches(u))
        .collect()
}

/// One output line: `id  name  organization  status`.
#[must_use]
pub fn format_line(user: &UserRecord) -> String {
    format!(
        "{}  {}  {}  {}",
        user.id,
        user.full_name(),
        user.organization,
        user.status
    )
}

/// Load `source` and print the records matching `q` and the filters.
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded, the status is unknown,
/// or stdout cannot be written.
pub async fn run(
    source: &DataSource,
    q: &str,
    status: Option<&str>,
    organization: Option<&str>,
) -> Result<(), SearchError> {
    let status = status
        .filter(|s| !s.is_empty())
        .map(str::parse::<UserStatus>)
        .transpose()?;

    let repo = UserRepository::new(source.load().await?);
    let hits = matching(&repo, q, status, organization);
    tracing::info!(total = repo.len(), matched = hits.len(), %source, "Search complete");

    let mut stdout = std::io::stdout().lock();
    for user in hits {
        writeln!(stdout, "{}", format_line(user))?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    async fn repo() -> UserRepository {
        let users = DataSource::Generated {
            count: 60,
            seed: Some(5),
        }
        .load()
        .await
        .unwrap();
        UserRepository::new(users)
    }

    #[tokio::test]
    async fn test_no_criteria_returns_everything() {
        let repo = repo().await;
        assert_eq!(matching(&repo, "", None, None).len(), 60);
    }

    #[tokio::test]
    async fn test_filters_are_exact_and_combined() {
        let repo = repo().await;
        let hits = matching(&repo, "", Some(UserStatus::Active), Some("Kuda"));
        assert!(
            hits.iter()
                .all(|u| u.status == UserStatus::Active && u.organization == "Kuda")
        );
        let expected = repo
            .list()
            .iter()
            .filter(|u| u.status == UserStatus::Active && u.organization == "Kuda")
            .count();
        assert_eq!(hits.len(), expected);
    }

    #[tokio::test]
    async fn test_search_matches_first_name_case_insensitively() {
        let repo = repo().await;
        let first = repo.list().first().unwrap().first_name.to_uppercase();
        let hits = matching(&repo, &first, None, None);
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|u| SearchTerm::new(&first).unwrap().matches(u)));
    }

    #[test]
    fn test_format_line() {
        let user: UserRecord = serde_json::from_value(serde_json::json!({
            "id": "LSQ00000012",
            "firstName": "Grace",
            "lastName": "Effiom",
            "email": "grace.effiom@lendsqr.com",
            "phoneNumber": "07060780922",
            "dateJoined": "2021-03-14",
            "status": "Pending",
            "organization": "Lendsqr",
            "username": "graceeffiom",
            "bvn": "07060780922",
            "gender": "Female",
            "maritalStatus": "Single",
            "children": "None",
            "typeOfResidence": "Parent's Apartment",
            "levelOfEducation": "B.Sc",
            "employmentStatus": "Employed",
            "sectorOfEmployment": "FinTech",
            "durationOfEmployment": "2 years",
            "officeEmail": "grace@lendsqr.com",
            "monthlyIncome": "₦200,000.00",
            "loanRepayment": "₦40,000",
            "twitter": "@grace_effiom",
            "facebook": "Grace Effiom",
            "instagram": "@grace_effiom",
            "guarantor": {
                "fullName": "Debby Ogana",
                "phoneNumber": "07060780922",
                "email": "debby@gmail.com",
                "relationship": "Sister"
            },
            "accountBalance": 200000,
            "accountNumber": "9912345678",
            "bankName": "Providus Bank",
            "tier": 1
        }))
        .unwrap();
        assert_eq!(
            format_line(&user),
            "LSQ00000012  Grace Effiom  Lendsqr  Pending"
        );
    }
}
