//! `roster` — interactive CLI for the roster record store.
//!
//! # Usage
//!
//! ```
//! roster                        # opens ./test.db
//! roster --db /path/to/some.db
//! roster --config ~/.config/roster/config.toml
//! ```

mod app;
mod prompt;

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use roster_store_sqlite::SqliteStore;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Database file used when neither flag nor config file names one.
const DEFAULT_DB_PATH: &str = "test.db";

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "roster", about = "Interactive CLI for the roster store")]
struct Args {
  /// Path to a TOML config file (db_path).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Path to the database file (default: ./test.db).
  #[arg(long, value_name = "FILE")]
  db: Option<PathBuf>,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  db_path: Option<PathBuf>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  // Initialise tracing. Diagnostics go to stderr, never the transcript.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .with_writer(io::stderr)
    .init();

  let args = Args::parse();

  // Load config file if provided.
  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override the config file, which overrides the default.
  let db_path = args
    .db
    .or(file_cfg.db_path)
    .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

  let mut store = SqliteStore::open(&db_path)
    .with_context(|| format!("opening record store at {}", db_path.display()))?;
  tracing::info!(path = %db_path.display(), "record store opened");

  app::run(&mut store, &mut io::stdin().lock(), &mut io::stdout())?;

  store.close().context("closing the record store")?;
  tracing::info!("database connection closed");
  println!("\nDatabase connection closed.");

  Ok(())
}
