//! Business logic services for admin.
//!
//! # Services
//!
//! - `auth` - Login gate that turns a submission into an operator identity
//! - `data_source` - Initial collection from the generator or a JSON file
//! - `generator` - Seedable synthetic customer records
//! - `query` - Search, filter, sort and paginate the user list

pub mod auth;
pub mod data_source;
pub mod generator;
pub mod query;

pub use auth::{AuthService, LoginError};
pub use data_source::{DataSource, SeedError, ensure_unique_ids};
pub use generator::{DEFAULT_USER_COUNT, ORGANIZATIONS, generate_users};
pub use query::{
    DEFAULT_PER_PAGE, ListCriteria, PAGE_SIZES, Page, QueryError, SortDirection, SortKey, UserQuery,
};
