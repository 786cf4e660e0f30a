// ABOUTME: Progress CLI - command-line front end for the progress prediction engine
// ABOUTME: Reads PredictionInput JSON, runs single or batch predictions, prints JSON results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Forecast one user
//! progress-cli predict --input user.json --pretty
//!
//! # Pin the evaluation instant for reproducible output
//! progress-cli predict --input user.json --as-of 2025-03-01T00:00:00Z
//!
//! # Forecast every user in a JSON array
//! progress-cli batch --input users.json
//!
//! # Show the effective model configuration
//! progress-cli config
//! ```

mod commands;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use progress_engine::logging::LoggingConfig;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "progress-cli",
    about = "Progress Prediction Engine CLI",
    long_about = "Forecasts weight, strength, goal achievement, plateau risk and milestones from logged fitness history."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Forecast a single user from a PredictionInput JSON file
    Predict {
        /// Path to the input JSON file
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Evaluation instant (RFC 3339), overrides the file's `as_of`
        #[arg(long)]
        as_of: Option<DateTime<Utc>>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Forecast every user in a JSON array of PredictionInput objects
    Batch {
        /// Path to the input JSON array
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the effective model configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    debug!("Progress CLI");

    match cli.command {
        Command::Predict {
            input,
            as_of,
            pretty,
        } => commands::predict::single(&input, as_of, pretty),
        Command::Batch { input, pretty } => commands::predict::batch(&input, pretty),
        Command::Config => commands::config::show(),
    }
}
