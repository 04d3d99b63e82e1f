//! `revise` command-line front end.
//!
//! # Responsibility
//! - Parse arguments, load config, and initialize core logging.
//! - Open the review database and hand the subcommand to `commands::run`.

mod commands;
mod config;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use commands::Command;
use config::{Config, CONFIG_ENV_VAR};
use log::info;
use revise_core::db::open_db;
use revise_core::{core_version, init_logging, ReviewService, SqliteReviewStore};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "revise")]
#[command(about = "Plan fixed-interval spaced-repetition reviews per user", version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,

    /// Review database path (overrides config file)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Log level (overrides config file)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    init_logging(&config.log_level, &config.log_dir).context("failed to initialize logging")?;
    info!(
        "event=cli_start module=cli status=ok core_version={}",
        core_version()
    );

    let users = config.user_directory()?;
    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create data directory {}", parent.display()))?;
    }
    let conn = open_db(&config.db_path)
        .with_context(|| format!("failed to open database {}", config.db_path.display()))?;
    let service = ReviewService::new(SqliteReviewStore::new(&conn), users);

    let stdout = std::io::stdout();
    commands::run(cli.command, &service, Local::now().date_naive(), &mut stdout.lock())
}
