//! Error types shared by `apply_sql` and `check_db`.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// All possible errors raised by the database tools
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("unable to open database {path}: {source}", path = .path.display())]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },

    #[error("unable to read script {path}: {source}", path = .path.display())]
    ScriptRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to close database: {0}")]
    Close(rusqlite::Error),

    /// Statement-level failures carry the driver's own message unchanged.
    #[error(transparent)]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ToolError>;

/// Marker that starts every user-facing failure line.
pub const ERROR_MARKER: &str = "ERROR";

/// Render a failure as the single line both tools print on stdout.
pub fn error_line(err: &impl fmt::Display) -> String {
    format!("{ERROR_MARKER} {err}")
}
