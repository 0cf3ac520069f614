//! Core types for the Lendsqr back-office.
//!
//! This module provides type-safe wrappers for the user-management domain.

pub mod email;
pub mod id;
pub mod money;
pub mod operator;
pub mod status;
pub mod tier;
pub mod user;

pub use email::{Email, EmailError};
pub use id::{UserId, UserIdError};
pub use money::{NAIRA, format_naira, group_thousands};
pub use operator::AuthenticatedUser;
pub use status::*;
pub use tier::{Tier, TierError};
pub use user::{Guarantor, UserRecord};
