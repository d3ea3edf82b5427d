//! taskrank CLI - rank tasks by priority score.

mod analyze;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use taskrank_core::{Config, DanglingPolicy, SimpleTask, Strategy, DEFAULT_CONFIG_FILE};
use taskrank_engine::{BucketScorer, ScoringEngine};
use tokio::io::AsyncReadExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "taskrank")]
#[command(about = "Rank tasks by priority score", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Date to measure urgency from (YYYY-MM-DD), defaults to today
    #[arg(long, global = true)]
    today: Option<NaiveDate>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score and rank a `{"tasks": [...], "strategy": ...}` payload
    Analyze {
        /// Payload file, `-` or omitted for stdin
        input: Option<PathBuf>,
        /// Strategy label, overrides the payload
        #[arg(long)]
        strategy: Option<String>,
        /// Reject dependency indices outside the task list
        #[arg(long)]
        strict_dependencies: bool,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Place a task into a LOW / MEDIUM / HIGH / CRITICAL bucket
    Bucket {
        /// Urgency
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        urgency: i64,
        /// Importance
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        importance: i64,
        /// Deadline (YYYY-MM-DD)
        #[arg(long)]
        deadline: Option<String>,
    },
    /// List the recognized strategies
    Strategies,
}

fn init_logging() {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_logging();

    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    let today = cli.today.unwrap_or_else(|| chrono::Local::now().date_naive());

    match cli.command {
        Commands::Analyze { input, strategy, strict_dependencies, pretty } => {
            let body = read_input(input).await?;

            let mut engine = ScoringEngine::from_config(&config, today)
                .context("Invalid calendar configuration")?;
            if strict_dependencies {
                engine = engine.with_policy(DanglingPolicy::Reject);
            }

            let outcome = analyze::handle(
                &engine,
                &body,
                strategy.as_deref(),
                &config.scoring.default_strategy,
            );

            match outcome {
                Ok(response) => {
                    info!("Ranked {} tasks", response.results.len());
                    println!("{}", to_json(&response, pretty)?);
                    Ok(ExitCode::SUCCESS)
                }
                Err(rejection) => {
                    println!("{}", to_json(&rejection, pretty)?);
                    Ok(ExitCode::from(2))
                }
            }
        }
        Commands::Bucket { urgency, importance, deadline } => {
            let task = SimpleTask { urgency, importance, deadline };
            let bucket = BucketScorer::new(today).bucket(&task);
            println!("{}", bucket);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Strategies => {
            let default = config.scoring.strategy();
            for strategy in Strategy::ALL {
                let marker = if strategy == default { " (default)" } else { "" };
                println!("  {}{} | {}", strategy.label(), marker, strategy.description());
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn read_input(input: Option<PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut body = String::new();
            tokio::io::stdin()
                .read_to_string(&mut body)
                .await
                .context("Failed to read stdin")?;
            Ok(body)
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
