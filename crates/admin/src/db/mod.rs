//! In-memory data layer for the back-office.
//!
//! # Collections
//!
//! - `users` - Customer records, seeded once at startup from a
//!   [`DataSource`](crate::services::DataSource) and held for the lifetime of
//!   the process. Nothing is persisted.
//!
//! The repository is a plain struct: reads borrow it, writes need `&mut`.
//! [`AppState`](crate::state::AppState) wraps it in a single `RwLock` so
//! concurrent requests still observe one writer at a time.

pub mod users;

use thiserror::Error;

use lendsqr_core::UserId;

pub use users::{SearchTerm, UserEvent, UserFilter, UserRepository, UserStats};

/// Errors that can occur during repository operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// No record in the collection has this ID.
    #[error("user {id} not found")]
    NotFound {
        /// The ID that was looked up.
        id: UserId,
    },
}

impl RepositoryError {
    /// Build a `NotFound` error for an ID.
    #[must_use]
    pub fn not_found(id: &UserId) -> Self {
        Self::NotFound { id: id.clone() }
    }
}
