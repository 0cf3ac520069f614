//! Synthetic customer records for demos and local development.
//!
//! Records are drawn from fixed pools with a caller-supplied RNG, so a seeded
//! `StdRng` reproduces the same dataset every run.

use chrono::NaiveDate;
use rand::Rng;
use rand::seq::IndexedRandom;

use lendsqr_core::{
    Gender, Guarantor, MaritalStatus, NAIRA, Tier, UserId, UserRecord, UserStatus, format_naira,
    group_thousands,
};

use super::SeedError;

/// Number of records generated when nothing else is configured.
pub const DEFAULT_USER_COUNT: u32 = 500;

pub const ORGANIZATIONS: &[&str] = &[
    "Lendsqr",
    "Irorun",
    "Lendstar",
    "Paystack",
    "Flutterwave",
    "Kuda",
    "Opay",
    "PiggyVest",
];

const EDUCATION_LEVELS: &[&str] = &["B.Sc", "M.Sc", "Ph.D", "HND", "OND", "SSCE"];
const EMPLOYMENT_STATUSES: &[&str] = &["Employed", "Unemployed", "Self-employed"];
const SECTORS: &[&str] = &[
    "FinTech",
    "Banking",
    "Technology",
    "Healthcare",
    "Education",
    "Retail",
    "Manufacturing",
];
const RESIDENCE_TYPES: &[&str] = &[
    "Parent's Apartment",
    "Rented Apartment",
    "Own House",
    "Company Quarters",
];
const RELATIONSHIPS: &[&str] = &["Sister", "Brother", "Friend", "Colleague", "Parent", "Spouse"];
const BANKS: &[&str] = &[
    "Providus Bank",
    "GTBank",
    "Access Bank",
    "First Bank",
    "UBA",
    "Zenith Bank",
    "Fidelity Bank",
];

const FIRST_NAMES: &[&str] = &[
    "Grace", "John", "Mary", "David", "Sarah", "Michael", "Jennifer", "Robert", "Lisa", "William",
    "Karen", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Nancy", "Christopher", "Betty",
    "Daniel", "Helen", "Matthew", "Sandra", "Anthony", "Donna", "Mark", "Carol", "Donald", "Ruth",
    "Steven", "Sharon", "Paul", "Michelle", "Andrew", "Laura", "Joshua", "Kenneth", "Kimberly",
    "Kevin", "Deborah", "Brian", "Dorothy", "George", "Edward", "Ronald", "Timothy", "Jason",
    "Jeffrey", "Ryan", "Jacob", "Gary", "Nicholas", "Eric", "Jonathan", "Stephen", "Larry",
    "Justin", "Scott", "Brandon", "Benjamin", "Samuel", "Gregory", "Alexander", "Patrick", "Frank",
    "Raymond", "Jack", "Dennis", "Jerry", "Tyler", "Aaron",
];

const LAST_NAMES: &[&str] = &[
    "Effiom", "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas",
    "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris",
    "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King",
    "Wright", "Scott", "Torres", "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson", "Baker",
    "Hall", "Rivera", "Campbell", "Mitchell", "Carter", "Roberts", "Gomez", "Phillips", "Evans",
    "Turner", "Diaz", "Parker", "Cruz", "Edwards", "Collins", "Reyes", "Stewart", "Morris",
    "Morales", "Murphy", "Cook", "Rogers", "Gutierrez", "Ortiz", "Morgan", "Cooper", "Peterson",
    "Bailey", "Reed", "Kelly", "Howard", "Ramos", "Kim", "Cox", "Ward", "Richardson", "Watson",
    "Brooks", "Chavez", "Wood", "James", "Bennett", "Gray", "Mendoza", "Ruiz", "Hughes", "Price",
    "Alvarez", "Castillo", "Sanders", "Patel", "Myers", "Long", "Ross", "Foster",
];

/// Generate `count` records with IDs `LSQ00000001` onwards.
///
/// # Errors
///
/// Returns `SeedError::Id` if `count` exceeds the ID sequence range.
pub fn generate_users<R: Rng + ?Sized>(count: u32, rng: &mut R) -> Result<Vec<UserRecord>, SeedError> {
    (1..=count).map(|seq| generate_user(seq, rng)).collect()
}

/// Generate one record with the given sequence number.
///
/// # Errors
///
/// Returns `SeedError::Id` if `sequence` is out of range.
pub fn generate_user<R: Rng + ?Sized>(sequence: u32, rng: &mut R) -> Result<UserRecord, SeedError> {
    let id = UserId::from_sequence(sequence)?;
    let first_name = pick(rng, FIRST_NAMES);
    let last_name = pick(rng, LAST_NAMES);
    let first = first_name.to_lowercase();
    let last = last_name.to_lowercase();
    // The email domain is drawn independently of the organization field.
    let email_org = pick(rng, ORGANIZATIONS).to_lowercase();

    Ok(UserRecord {
        id,
        email: format!("{first}.{last}@{email_org}.com"),
        phone_number: phone_number(rng),
        date_joined: date_joined(rng),
        status: pick_variant(rng, UserStatus::ALL, UserStatus::Active),
        organization: pick(rng, ORGANIZATIONS).to_string(),
        username: format!("{first}{last}{}", rng.random_range(0..999)),
        bvn: rng.random_range(10_000_000_000_u64..100_000_000_000).to_string(),
        gender: pick_variant(rng, Gender::ALL, Gender::Female),
        marital_status: pick_variant(rng, MaritalStatus::ALL, MaritalStatus::Single),
        children: rng.random_range(0..5).to_string(),
        type_of_residence: pick(rng, RESIDENCE_TYPES).to_string(),
        level_of_education: pick(rng, EDUCATION_LEVELS).to_string(),
        employment_status: pick(rng, EMPLOYMENT_STATUSES).to_string(),
        sector_of_employment: pick(rng, SECTORS).to_string(),
        duration_of_employment: format!("{} years", rng.random_range(1..=10)),
        office_email: format!("{first}.{last}@company.com"),
        monthly_income: format_naira(rng.random_range(50_000..550_000)),
        loan_repayment: format!("{NAIRA}{}", group_thousands(rng.random_range(10_000..110_000))),
        twitter: format!("@{first}_{last}"),
        facebook: format!("{first_name} {last_name}"),
        instagram: format!("@{first}_{last}"),
        guarantor: Guarantor {
            full_name: format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES)),
            phone_number: phone_number(rng),
            email: format!("guarantor{}@email.com", rng.random_range(0..1000)),
            relationship: pick(rng, RELATIONSHIPS).to_string(),
        },
        account_balance: rng.random_range(10_000..1_010_000),
        account_number: rng.random_range(1_000_000_000_u64..10_000_000_000).to_string(),
        bank_name: pick(rng, BANKS).to_string(),
        tier: Tier::try_from(rng.random_range(Tier::MIN..=Tier::MAX))?,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    })
}

fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

fn pick_variant<R: Rng + ?Sized, T: Copy>(rng: &mut R, all: &[T], fallback: T) -> T {
    all.choose(rng).copied().unwrap_or(fallback)
}

/// `0` followed by nine or ten digits in `700000000..=1599999999`.
fn phone_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("0{}", rng.random_range(700_000_000_u64..1_600_000_000))
}

/// A date in 2020-2023 with the day capped at 28.
fn date_joined<R: Rng + ?Sized>(rng: &mut R) -> NaiveDate {
    let year = rng.random_range(2020..=2023);
    let month = rng.random_range(1..=12);
    let day = rng.random_range(1..=28);
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}
