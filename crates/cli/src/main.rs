//! Lendsqr CLI - dataset tools for the back-office.
//!
//! # Usage
//!
//! ```bash
//! # Write 500 reproducible users to a file
//! lendsqr-cli generate --count 500 --seed 42 --output users.json
//!
//! # Search a dataset file
//! lendsqr-cli search --input users.json --q grace --status Active
//!
//! # Search a freshly generated dataset
//! lendsqr-cli search --count 100 --seed 7 --organization Kuda
//! ```
//!
//! # Commands
//!
//! - `generate` - Write a synthetic dataset as pretty JSON
//! - `search` - Print records matching a search and filters

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use lendsqr_admin::services::{DEFAULT_USER_COUNT, DataSource};

mod commands;

#[derive(Parser)]
#[command(name = "lendsqr-cli")]
#[command(author, version, about = "Lendsqr back-office CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic users dataset
    Generate {
        /// Number of records
        #[arg(short, long, default_value_t = DEFAULT_USER_COUNT)]
        count: u32,

        /// RNG seed for a reproducible dataset
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Search and filter a users dataset
    Search {
        #[command(flatten)]
        source: SourceArgs,

        /// Search text (name, email, organization, phone)
        #[arg(short, long, default_value = "")]
        q: String,

        /// Exact status (`Active`, `Inactive`, `Pending`, `Blacklisted`)
        #[arg(long)]
        status: Option<String>,

        /// Exact organization
        #[arg(long)]
        organization: Option<String>,
    },
}

/// Where `search` reads its records from.
#[derive(Args)]
struct SourceArgs {
    /// JSON dataset file
    #[arg(short, long, conflicts_with_all = ["count", "seed"])]
    input: Option<PathBuf>,

    /// Number of records to generate when no input file is given
    #[arg(long, default_value_t = DEFAULT_USER_COUNT)]
    count: u32,

    /// RNG seed for the generated records
    #[arg(long)]
    seed: Option<u64>,
}

impl SourceArgs {
    fn into_data_source(self) -> DataSource {
        match self.input {
            Some(path) => DataSource::File(path),
            None => DataSource::Generated {
                count: self.count,
                seed: self.seed,
            },
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Generate {
            count,
            seed,
            output,
        } => commands::generate::run(count, seed, output.as_deref()).await?,
        Commands::Search {
            source,
            q,
            status,
            organization,
        } => {
            commands::search::run(
                &source.into_data_source(),
                &q,
                status.as_deref(),
                organization.as_deref(),
            )
            .await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_search_defaults_to_generated_source() {
        let cli = Cli::try_parse_from(["lendsqr-cli", "search", "--seed", "3"]);
        let Ok(Cli {
            command: Commands::Search { source, .. },
        }) = cli
        else {
            panic!("expected search command");
        };
        assert_eq!(
            source.into_data_source(),
            DataSource::Generated {
                count: DEFAULT_USER_COUNT,
                seed: Some(3)
            }
        );
    }

    #[test]
    fn test_input_conflicts_with_seed() {
        let cli = Cli::try_parse_from([
            "lendsqr-cli",
            "search",
            "--input",
            "users.json",
            "--seed",
            "3",
        ]);
        assert!(cli.is_err());
    }
}
