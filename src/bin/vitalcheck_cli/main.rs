// ABOUTME: VitalCheck CLI - scores biomarker readings from the command line
// ABOUTME: Handles scoring, reference range listing, and score status lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalCheck Contributors
//!
//! Usage:
//! ```bash
//! # Score a biomarker map from a file
//! vitalcheck-cli score --input readings.json
//!
//! # Score from stdin with a text report
//! echo '{"heartRate": 72, "oxygenSaturation": 98}' | vitalcheck-cli score --format text
//!
//! # Force the female fundamental frequency band
//! vitalcheck-cli score --input readings.json --voice-profile female
//!
//! # List reference ranges
//! vitalcheck-cli ranges --format text
//!
//! # Show the status for a score
//! vitalcheck-cli status 72
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};
use vitalcheck::errors::AppError;
use vitalcheck::logging::LoggingConfig;

#[derive(Parser)]
#[command(
    name = "vitalcheck-cli",
    version,
    about = "VitalCheck digital health check CLI",
    long_about = "Scores cardiovascular and voice biomarkers into a 0-100 health index with recommendations and a risk assessment."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Human-readable report
    Text,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Score a biomarker map (a JSON array is scored as a batch)
    Score {
        /// JSON file to read (defaults to stdin)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// Output format
        #[arg(long, short = 'f', value_enum, default_value = "json")]
        format: OutputFormat,

        /// Voice profile strategy: threshold, threshold:<hz>, male, or female
        #[arg(long)]
        voice_profile: Option<String>,
    },

    /// List the reference ranges used for scoring
    Ranges {
        /// Output format
        #[arg(long, short = 'f', value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the health status for a score
    Status {
        /// Composite score (0-100)
        score: f64,

        /// Output format
        #[arg(long, short = 'f', value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }
    debug!("VitalCheck CLI");

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("Error: {e:#}");
            let code = e
                .downcast_ref::<AppError>()
                .map_or(1, |app_error| app_error.code.exit_code());
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Score {
            input,
            format,
            voice_profile,
        } => commands::score::run(input.as_deref(), format, voice_profile.as_deref()),
        Command::Ranges { format } => commands::ranges::run(format),
        Command::Status { score, format } => commands::status::run(score, format),
    }
}
