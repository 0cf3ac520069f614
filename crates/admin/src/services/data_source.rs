//! Where the initial user collection comes from.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

use lendsqr_core::{TierError, UserId, UserIdError, UserRecord};

use super::generator::{DEFAULT_USER_COUNT, generate_users};

/// Errors that can occur while building the initial collection.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate user id {0} in seed data")]
    DuplicateId(UserId),

    #[error("invalid user id: {0}")]
    Id(#[from] UserIdError),

    #[error(transparent)]
    Tier(#[from] TierError),
}

/// Source of the records a repository is seeded with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Synthetic records. A fixed `seed` reproduces the same dataset.
    Generated { count: u32, seed: Option<u64> },
    /// A JSON array of records.
    File(PathBuf),
}

impl Default for DataSource {
    fn default() -> Self {
        Self::Generated {
            count: DEFAULT_USER_COUNT,
            seed: None,
        }
    }
}

impl DataSource {
    /// Produce the records.
    ///
    /// # Errors
    ///
    /// Returns `SeedError` if the file cannot be read or parsed, if it holds
    /// duplicate IDs, or if `count` exceeds the ID range.
    pub async fn load(&self) -> Result<Vec<UserRecord>, SeedError> {
        let users = match self {
            Self::Generated { count, seed } => {
                let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
                generate_users(*count, &mut rng)?
            }
            Self::File(path) => load_file(path).await?,
        };

        tracing::info!(source = %self, users = users.len(), "Loaded user records");
        Ok(users)
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generated {
                count,
                seed: Some(seed),
            } => write!(f, "generated({count}, seed={seed})"),
            Self::Generated { count, seed: None } => write!(f, "generated({count})"),
            Self::File(path) => write!(f, "file({})", path.display()),
        }
    }
}

async fn load_file(path: &Path) -> Result<Vec<UserRecord>, SeedError> {
    let raw = tokio::fs::read(path).await.map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let users: Vec<UserRecord> =
        serde_json::from_slice(&raw).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    ensure_unique_ids(&users)?;
    Ok(users)
}

/// Reject collections where two records share an ID.
///
/// # Errors
///
/// Returns `SeedError::DuplicateId` naming the first repeated ID.
pub fn ensure_unique_ids(users: &[UserRecord]) -> Result<(), SeedError> {
    let mut seen = HashSet::with_capacity(users.len());
    for user in users {
        if !seen.insert(&user.id) {
            return Err(SeedError::DuplicateId(user.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use lendsqr_core::UserStatus;

    use super::*;
    use crate::test_support::sample_user;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("lendsqr-{}-{name}.json", std::process::id()))
    }

    #[tokio::test]
    async fn test_generated_with_seed_is_reproducible() {
        let source = DataSource::Generated {
            count: 25,
            seed: Some(7),
        };
        let a = source.load().await.unwrap();
        let b = source.load().await.unwrap();
        assert_eq!(a.len(), 25);
        assert_eq!(a, b);
    }

    #[test]
    fn test_default_is_five_hundred_generated() {
        assert_eq!(
            DataSource::default(),
            DataSource::Generated {
                count: 500,
                seed: None
            }
        );
    }

    #[tokio::test]
    async fn test_file_round_trip() {
        let users = vec![
            sample_user(1, "Grace", "Effiom", UserStatus::Active, "Lendsqr"),
            sample_user(2, "John", "Smith", UserStatus::Pending, "Kuda"),
        ];
        let path = temp_path("round-trip");
        tokio::fs::write(&path, serde_json::to_vec(&users).unwrap())
            .await
            .unwrap();

        let loaded = DataSource::File(path.clone()).load().await.unwrap();
        let _ = tokio::fs::remove_file(&path).await;

        assert_eq!(loaded, users);
    }

    #[tokio::test]
    async fn test_file_with_duplicate_ids_is_rejected() {
        let users = vec![
            sample_user(3, "Grace", "Effiom", UserStatus::Active, "Lendsqr"),
            sample_user(3, "John", "Smith", UserStatus::Pending, "Kuda"),
        ];
        let path = temp_path("duplicates");
        tokio::fs::write(&path, serde_json::to_vec(&users).unwrap())
            .await
            .unwrap();

        let err = DataSource::File(path.clone()).load().await.unwrap_err();
        let _ = tokio::fs::remove_file(&path).await;

        assert!(matches!(err, SeedError::DuplicateId(id) if id.as_str() == "LSQ00000003"));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let err = DataSource::File(temp_path("does-not-exist"))
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let path = temp_path("malformed");
        tokio::fs::write(&path, b"[{\"id\": \"nope\"}]").await.unwrap();

        let err = DataSource::File(path.clone()).load().await.unwrap_err();
        let _ = tokio::fs::remove_file(&path).await;

        assert!(matches!(err, SeedError::Parse { .. }));
    }
}
