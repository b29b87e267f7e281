//! Seed application: run a SQL script against the database file.

use crate::config::SeedConfig;
use crate::db::Database;
use crate::error::{Result, ToolError};
use std::fs;
use std::path::Path;
use tracing::info;

/// Printed on stdout after a successful run.
pub const APPLIED_MARKER: &str = "APPLIED";

/// Read the whole script as UTF-8 text.
pub fn read_script<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| ToolError::ScriptRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply the configured script to the configured database.
///
/// The connection is opened before the script is read, so the database file
/// exists afterwards even when the script is missing. On error the
/// connection is simply dropped.
pub fn apply_seed(config: &SeedConfig) -> Result<()> {
    let mut db = Database::open(&config.db_path)?;
    let sql = read_script(&config.script_path)?;

    if config.transactional {
        db.apply_script_atomic(&sql)?;
    } else {
        db.apply_script(&sql)?;
    }
    db.close()?;

    info!(
        db = %config.db_path.display(),
        script = %config.script_path.display(),
        "seed script applied"
    );
    Ok(())
}
