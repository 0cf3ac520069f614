//! Synthetic dataset generation.
//!
//! # Usage
//!
//! ```bash
//! lendsqr-cli generate --count 500 --seed 42 --output users.json
//! ```

use std::io::Write;
use std::path::Path;

use thiserror::Error;

use lendsqr_admin::services::{DataSource, SeedError};

/// Errors that can occur while generating a dataset.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Record generation failed.
    #[error(transparent)]
    Seed(#[from] SeedError),

    /// The dataset could not be serialized.
    #[error("Failed to serialize dataset: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The output could not be written.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// Generate `count` users and write them as pretty JSON to `output`, or to
/// stdout when no path is given.
///
/// # Errors
///
/// Returns an error if generation, serialization or the write fails.
pub async fn run(count: u32, seed: Option<u64>, output: Option<&Path>) -> Result<(), GenerateError> {
    let users = DataSource::Generated { count, seed }.load().await?;
    let json = serde_json::to_string_pretty(&users)?;

    match output {
        Some(path) => {
            tokio::fs::write(path, json.as_bytes())
                .await
                .map_err(|source| GenerateError::Write {
                    path: path.display().to_string(),
                    source,
                })?;
            tracing::info!(count = users.len(), path = %path.display(), "Dataset written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").map_err(|source| GenerateError::Write {
                path: "<stdout>".to_string(),
                source,
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use lendsqr_core::UserRecord;

    use super::*;

    #[tokio::test]
    async fn test_writes_reproducible_file() {
        let path = std::env::temp_dir().join(format!("lendsqr-cli-{}.json", std::process::id()));
        run(5, Some(11), Some(&path)).await.unwrap();

        let bytes = tokio::fs::read(&path).await.unwrap();
        let _ = tokio::fs::remove_file(&path).await;
        let users: Vec<UserRecord> = serde_json::from_slice(&bytes).unwrap();

        let expected = DataSource::Generated {
            count: 5,
            seed: Some(11),
        }
        .load()
        .await
        .unwrap();
        assert_eq!(users, expected);
    }
}
