//! # Stockroom Console Application Entry Point
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                           │
//! │                                                                     │
//! │  1. Initialize Logging ───────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                            │
//! │     • Default: WARN so the menu stays readable; RUST_LOG=info       │
//! │       surfaces pool/migration lifecycle events                      │
//! │                                                                     │
//! │  2. Determine Database Path ──────────────────────────────────────► │
//! │     • --db flag, or the per-user data directory:                    │
//! │       Linux:   ~/.local/share/stockroom/stockroom.db                │
//! │       macOS:   ~/Library/Application Support/com.stockroom.../      │
//! │       Windows: %APPDATA%/stockroom/data/                            │
//! │                                                                     │
//! │  3. Connect to Database ──────────────────────────────────────────► │
//! │     • SQLite with WAL mode                                          │
//! │     • Run pending migrations                                        │
//! │                                                                     │
//! │  4. Run the Menu Loop ────────────────────────────────────────────► │
//! │     • Products / Barcodes submenus until the user exits             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod input;
mod menu;

use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stockroom_db::{Database, DbConfig};

#[tokio::main]
async fn main() {
    init_tracing();

    let db_path = match parse_args() {
        Some(path) => path,
        None => return, // --help already printed
    };

    info!(path = %db_path.display(), "Starting Stockroom console");

    let db = match Database::new(DbConfig::new(&db_path)).await {
        Ok(db) => db,
        Err(err) => {
            eprintln!("✗ Could not open database at {}: {}", db_path.display(), err);
            std::process::exit(1);
        }
    };

    menu::run(&db).await;

    db.close().await;
}

/// Initializes tracing with an env-filter.
///
/// Defaults to WARN: an interactive menu and INFO logs fight over the same
/// terminal. `RUST_LOG=info` (or finer) overrides.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

/// Parses command line arguments.
///
/// Returns the database path to use, or `None` when `--help` was handled.
fn parse_args() -> Option<PathBuf> {
    let args: Vec<String> = env::args().collect();
    let mut db_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stockroom - console inventory manager");
                println!();
                println!("Usage: stockroom [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: per-user data dir)");
                println!("  -h, --help         Show this help message");
                return None;
            }
            other => {
                eprintln!("Unknown option: {other} (try --help)");
            }
        }
        i += 1;
    }

    Some(db_path.unwrap_or_else(default_db_path))
}

/// Resolves the default database path inside the per-user data directory,
/// creating the directory if needed. Falls back to the working directory
/// when no home is available (e.g. bare containers).
fn default_db_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("com", "stockroom", "stockroom") {
        let data_dir = dirs.data_dir();
        if std::fs::create_dir_all(data_dir).is_ok() {
            return data_dir.join("stockroom.db");
        }
    }
    PathBuf::from("./stockroom.db")
}
