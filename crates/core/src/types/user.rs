//! Back-office customer record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Gender, MaritalStatus, Tier, UserId, UserStatus};

/// Guarantor details embedded in a [`UserRecord`].
///
/// A guarantor has no identity of its own; it is replaced together with
/// its parent record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guarantor {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub relationship: String,
}

/// One back-office customer profile.
///
/// Serializes with camelCase keys, `dateJoined` as `YYYY-MM-DD`, and `tier`
/// as a bare integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub date_joined: NaiveDate,
    pub status: UserStatus,
    pub organization: String,
    pub username: String,
    pub bvn: String,
    pub gender: Gender,
    pub marital_status: MaritalStatus,
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
    pub guarantor: Guarantor,
    pub account_balance: u64,
    pub account_number: String,
    pub bank_name: String,
    pub tier: Tier,
}

impl UserRecord {
    /// Returns `"First Last"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "id": "LSQ00000001",
        "firstName": "Grace",
        "lastName": "Effiom",
        "email": "grace.effiom@lendsqr.com",
        "phoneNumber": "07060780922",
        "dateJoined": "2021-03-14",
        "status": "Active",
        "organization": "Lendsqr",
        "username": "graceeffiom42",
        "bvn": "07060780922",
        "gender": "Female",
        "maritalStatus": "Single",
        "children": "0",
        "typeOfResidence": "Parent's Apartment",
        "levelOfEducation": "B.Sc",
        "employmentStatus": "Employed",
        "sectorOfEmployment": "FinTech",
        "durationOfEmployment": "2 years",
        "officeEmail": "grace.effiom@company.com",
        "monthlyIncome": "₦200,000.00",
        "loanRepayment": "₦40,000",
        "twitter": "@grace_effiom",
        "facebook": "Grace Effiom",
        "instagram": "@grace_effiom",
        "guarantor": {
            "fullName": "Debby Ogana",
            "phoneNumber": "07060780922",
            "email": "guarantor12@email.com",
            "relationship": "Sister"
        },
        "accountBalance": 200000,
        "accountNumber": "9912345678",
        "bankName": "Providus Bank",
        "tier": 1
    }"#;

    #[test]
    fn test_deserialize_camel_case() {
        let user: UserRecord = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(user.id.as_str(), "LSQ00000001");
        assert_eq!(user.full_name(), "Grace Effiom");
        assert_eq!(user.status, UserStatus::Active);
        assert_eq!(user.date_joined, NaiveDate::from_ymd_opt(2021, 3, 14).unwrap());
        assert_eq!(user.guarantor.relationship, "Sister");
        assert_eq!(user.tier.get(), 1);
    }

    #[test]
    fn test_serialize_keeps_original_keys() {
        let user: UserRecord = serde_json::from_str(SAMPLE).unwrap();
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["dateJoined"], "2021-03-14");
        assert_eq!(value["maritalStatus"], "Single");
        assert_eq!(value["guarantor"]["fullName"], "Debby Ogana");
        assert_eq!(value["accountBalance"], 200_000);
    }

    #[test]
    fn test_rejects_out_of_range_tier() {
        let bad = SAMPLE.replace("\"tier\": 1", "\"tier\": 5");
        assert!(serde_json::from_str::<UserRecord>(&bad).is_err());
    }
}
