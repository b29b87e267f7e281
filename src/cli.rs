//! Command-line parsing and logging setup for the two binaries.

use crate::config::{
    CheckConfig, DEFAULT_DB_PATH, DEFAULT_SCRIPT_PATH, DEFAULT_TABLES, SeedConfig,
};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "apply_sql")]
#[command(about = "Apply a SQL seed script to the water_me database")]
#[command(version)]
pub struct SeedCli {
    /// Database file (created if missing)
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,
    /// SQL script to execute
    #[arg(long, default_value = DEFAULT_SCRIPT_PATH)]
    pub script: PathBuf,
    /// Roll back the whole script if any statement fails
    #[arg(long)]
    pub transaction: bool,
}

impl SeedCli {
    pub fn into_config(self) -> SeedConfig {
        SeedConfig {
            db_path: self.db,
            script_path: self.script,
            transactional: self.transaction,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "check_db")]
#[command(about = "Report row counts for the water_me tables")]
#[command(version)]
pub struct CheckCli {
    /// Database file to inspect
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,
    /// Table to count; repeat to replace the default list
    #[arg(long = "table", value_name = "NAME", default_values = DEFAULT_TABLES)]
    pub tables: Vec<String>,
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCli {
    pub fn into_config(self) -> CheckConfig {
        CheckConfig {
            db_path: self.db,
            tables: self.tables,
            json: self.json,
        }
    }
}

/// Logs go to stderr; stdout is reserved for the report.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
