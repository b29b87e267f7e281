//! Default locations and per-tool settings.
//!
//! Both tools run from the project root, so every default path is relative
//! to the working directory.

use std::path::PathBuf;

/// Database file shared by both tools.
pub const DEFAULT_DB_PATH: &str = "water_me.db";

/// Seed script applied by `apply_sql`.
pub const DEFAULT_SCRIPT_PATH: &str = "scripts/seed_test_data.sql";

/// Tables inspected by `check_db`, in report order.
pub const DEFAULT_TABLES: [&str; 3] = ["plants", "logs", "notes"];

/// Settings for a single `apply_sql` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    pub db_path: PathBuf,
    pub script_path: PathBuf,
    /// Run the whole script inside one transaction.
    pub transactional: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            script_path: PathBuf::from(DEFAULT_SCRIPT_PATH),
            transactional: false,
        }
    }
}

/// Settings for a single `check_db` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    pub db_path: PathBuf,
    pub tables: Vec<String>,
    pub json: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            tables: DEFAULT_TABLES.iter().map(|t| t.to_string()).collect(),
            json: false,
        }
    }
}
