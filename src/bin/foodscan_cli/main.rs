// ABOUTME: FoodScan CLI - scan food photos, batch-scan directories, look up nutrition
// ABOUTME: Reports go to stdout as JSON or text; logs go to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors
//!
//! Usage:
//! ```bash
//! # Scan one photo for a weight-loss lunch
//! foodscan-cli scan lunch.jpg --goal lose --meal-time lunch
//!
//! # Reproducible recommendations
//! foodscan-cli scan dinner.png --seed 42 --format text
//!
//! # Scan a whole directory, one JSON line per file
//! foodscan-cli batch ./photos --goal gain --seed 7
//!
//! # Nutrition facts for a label
//! foodscan-cli nutrition "dal tadka"
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::Local;
use clap::{value_parser, Args, Parser, Subcommand, ValueEnum};
use foodscan::config::ScanConfig;
use foodscan::logging::LoggingConfig;
use foodscan::models::{ActivityLevel, MealTime, UserProfile, WeightGoal};
use foodscan::services::{ScanRequest, ScanService};
use foodscan::AppError;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "foodscan-cli",
    version,
    about = "FoodScan food photo recognition",
    long_about = "Identify food in a photo with color and texture heuristics, then report nutrition facts and goal-aware meal suggestions."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory with reference data overrides (overrides FOODSCAN_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Scan a single photo
    Scan {
        /// JPEG or PNG file
        image: PathBuf,

        #[command(flatten)]
        profile: ProfileArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Scan every JPEG/PNG in a directory in parallel
    Batch {
        /// Directory to scan (not recursive)
        dir: PathBuf,

        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Print the nutrition record for a food label
    Nutrition {
        /// Food label, e.g. "idli" or "chapati"
        label: String,
    },
}

/// User profile and meal context shared by scanning commands
#[derive(Args)]
struct ProfileArgs {
    /// Weight goal: maintain, lose, or gain
    #[arg(long, default_value = "maintain")]
    goal: String,

    /// Body weight in kilograms (30-200)
    #[arg(long, default_value_t = 70.0)]
    weight: f64,

    /// Activity level: sedentary, moderate, or active
    #[arg(long, default_value = "moderate")]
    activity: String,

    /// Meal time: breakfast, lunch, dinner, or snack
    #[arg(long, conflicts_with = "hour")]
    meal_time: Option<String>,

    /// Hour of day (0-23) to derive the meal time from
    #[arg(long, value_parser = value_parser!(u32).range(0..24))]
    hour: Option<u32>,

    /// Seed for recommendation sampling (overrides FOODSCAN_SEED)
    #[arg(long)]
    seed: Option<u64>,
}

impl ProfileArgs {
    fn request(&self) -> Result<ScanRequest> {
        let goal: WeightGoal = self.goal.parse()?;
        let profile = UserProfile::new(
            self.weight,
            goal,
            ActivityLevel::from_str_lossy(&self.activity),
        )?;
        let meal_time = match (&self.meal_time, self.hour) {
            (Some(name), _) => MealTime::from_str_lossy(name).ok_or_else(|| {
                AppError::invalid_input(format!(
                    "unknown meal time '{name}', expected breakfast, lunch, dinner or snack"
                ))
            })?,
            (None, Some(hour)) => MealTime::from_hour(hour),
            (None, None) => MealTime::from_time(&Local::now()),
        };
        debug!(%goal, %meal_time, weight_kg = self.weight, "scan request resolved");
        Ok(ScanRequest::new(profile, meal_time))
    }
}

/// Report output format
#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Human-readable summary
    Text,
}

fn run(cli: Cli) -> Result<ExitCode> {
    let level = if cli.verbose { "debug" } else { "warn" };
    LoggingConfig::from_env().with_level(level).init()?;

    let mut config = ScanConfig::from_env()?;
    if cli.data_dir.is_some() {
        config.data_dir = cli.data_dir;
    }

    match cli.command {
        Command::Scan {
            image,
            profile,
            format,
        } => {
            let service = ScanService::from_config(&config)?;
            let request = profile.request()?;
            let seed = profile.seed.or(config.seed);
            commands::scan::run(&service, &image, &request, seed, format)
        }
        Command::Batch { dir, profile } => {
            let service = ScanService::from_config(&config)?;
            let request = profile.request()?;
            let seed = profile.seed.or(config.seed);
            commands::batch::run(&service, &dir, &request, seed)
        }
        Command::Nutrition { label } => {
            let service = ScanService::from_config(&config)?;
            commands::nutrition::run(&service, &label)
        }
    }
}

/// Exit status for an error that escaped `run`
fn failure_status(error: &anyhow::Error) -> u8 {
    match error.downcast_ref::<AppError>() {
        Some(app) if app.code.is_user_error() => commands::USER_ERROR_EXIT,
        _ => 1,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("Error: {error:#}");
            ExitCode::from(failure_status(&error))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodscan::config::ConfigError;

    fn profile(goal: &str, weight: f64, meal_time: Option<&str>) -> ProfileArgs {
        ProfileArgs {
            goal: goal.to_owned(),
            weight,
            activity: "moderate".to_owned(),
            meal_time: meal_time.map(str::to_owned),
            hour: Some(13),
            seed: None,
        }
    }

    #[test]
    fn test_bad_profile_arguments_exit_as_user_errors() {
        let bad = [
            profile("bulk", 70.0, None),
            profile("lose", 250.0, None),
            profile("gain", 70.0, Some("brunch")),
        ];
        for args in bad {
            let error = args.request().err().map(|e| failure_status(&e));
            assert_eq!(error, Some(commands::USER_ERROR_EXIT));
        }
        assert!(profile("maintain", 70.0, Some("lunch")).request().is_ok());
    }

    #[test]
    fn test_configuration_errors_exit_with_failure() {
        let error = anyhow::Error::from(ConfigError::InvalidRange("sample_size must not exceed 3"));
        assert_eq!(failure_status(&error), 1);

        let internal = anyhow::Error::from(AppError::internal("boom"));
        assert_eq!(failure_status(&internal), 1);
    }
}
