use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::io;
use std::path::PathBuf;

use stridecalc::batch::{BatchConfig, BatchProcessor, BatchSummary};
use stridecalc::config::AppConfig;
use stridecalc::export::{write_records, OutputFormat};
use stridecalc::import::{ImportManager, SensorPackage};
use stridecalc::logging::{init_logging, LogFormat};
use stridecalc::models::{MessageLocale, WorkoutKind};
use stridecalc::sample_packages;

/// StrideCalc - Workout Calculator CLI
///
/// Turns raw sensor readings for running, sports walking and pool swimming
/// into distance, average speed and calories burned.
#[derive(Parser)]
#[command(name = "stridecalc")]
#[command(version)]
#[command(about = "Workout distance, speed and calorie calculator", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase verbosity of log output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format (text, json, csv, table)
    #[arg(short = 'f', long, global = true)]
    format: Option<OutputFormat>,

    /// Language of text summaries (ru, en)
    #[arg(long, global = true)]
    locale: Option<MessageLocale>,

    /// Log format (pretty, json, compact)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the built-in sample workouts (default)
    Demo,

    /// Summarize one sensor package
    Calc {
        /// Workout code (SWM, RUN, WLK)
        code: String,

        /// Comma-separated sensor values in constructor order
        #[arg(short, long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
        data: Vec<f64>,
    },

    /// Summarize all packages in a CSV or JSON file
    Import {
        /// Package file path
        #[arg(short = 'i', long)]
        file: PathBuf,
    },

    /// List workout codes and their sensor value layout
    Codes,

    /// Configure application settings
    Config {
        /// Print the effective configuration
        #[arg(short, long)]
        list: bool,

        /// Set a configuration value (section.key=value)
        #[arg(short, long)]
        set: Option<String>,

        /// Get a configuration value (section.key)
        #[arg(short, long)]
        get: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // `config --set` may name a file it is about to create
    let creates_config = matches!(cli.command, Some(Commands::Config { set: Some(_), .. }));
    let mut config = match cli.config.as_deref() {
        Some(path) if creates_config => AppConfig::load_for_update(path)?,
        path => AppConfig::load_or_default(path)?,
    };
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(locale) = cli.locale {
        config.output.locale = locale;
    }
    if let Some(log_format) = cli.log_format {
        config.logging.format = log_format;
    }
    config.logging.level = config.logging.level.raised_by(cli.verbose);

    init_logging(&config.logging).context("Failed to initialize logging")?;

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            let packages: Vec<SensorPackage> =
                sample_packages().into_iter().map(SensorPackage::from).collect();
            run_packages(&config, &packages)?;
        }

        Commands::Calc { code, data } => {
            run_packages(&config, &[SensorPackage::new(code, data)])?;
        }

        Commands::Import { file } => {
            eprintln!("{}", format!("Importing {}...", file.display()).dimmed());
            let packages = ImportManager::new()
                .import_file(&file)
                .with_context(|| format!("Failed to import {}", file.display()))?;
            run_packages(&config, &packages)?;
        }

        Commands::Codes => {
            for kind in WorkoutKind::ALL {
                println!(
                    "{}  {:<14} {}",
                    kind.code().bold(),
                    kind.display_name(),
                    kind.parameter_names().join(", ")
                );
            }
        }

        Commands::Config { list, set, get } => {
            let path = cli.config.clone().unwrap_or_else(AppConfig::default_config_path);

            if let Some(key_value) = set {
                let (key, value) = key_value
                    .split_once('=')
                    .with_context(|| format!("Expected section.key=value, got: {}", key_value))?;
                let mut stored = AppConfig::load_for_update(&path)?;
                stored.set_value(key.trim(), value.trim())?;
                stored.save_to_file(&path)?;
                eprintln!("{}", format!("✓ Saved {}", path.display()).green());
            } else if let Some(key) = get {
                println!("{}", config.get_value(&key)?);
            } else if list {
                print!("{}", toml::to_string_pretty(&config)?);
            } else {
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}

/// Summarize packages, write the records to stdout and report failures
fn run_packages(config: &AppConfig, packages: &[SensorPackage]) -> Result<()> {
    let processor = BatchProcessor::new(BatchConfig::from(&config.validation));
    let summary = processor.process(packages);

    let stdout = io::stdout();
    write_records(
        &summary.records,
        config.output.format,
        config.output.locale,
        stdout.lock(),
    )?;

    report_failures(&summary);
    if !summary.is_success() {
        bail!(
            "{} of {} workouts failed",
            summary.failures.len(),
            summary.total_packages()
        );
    }
    Ok(())
}

fn report_failures(summary: &BatchSummary) {
    for failure in &summary.failures {
        eprintln!(
            "{} package #{} ({}): {}",
            "✗".red().bold(),
            failure.index + 1,
            failure.code,
            failure.error.user_message()
        );
    }
    if summary.skipped > 0 {
        eprintln!(
            "{}",
            format!("{} remaining packages skipped", summary.skipped).yellow()
        );
    }
}
