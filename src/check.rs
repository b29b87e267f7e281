//! Row-count report for the tables the app expects.
//!
//! A table that cannot be counted does not stop the report; its entry
//! carries the error text instead of a number. Only failing to open the
//! database aborts the whole check.

use crate::db::Database;
use crate::error::{Result, error_line};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use tracing::warn;

/// Outcome of counting one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TableCount {
    Count(i64),
    Error(String),
}

impl fmt::Display for TableCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableCount::Count(n) => write!(f, "{n}"),
            TableCount::Error(msg) => write!(f, "{msg}"),
        }
    }
}

/// One line of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableReport {
    pub table: String,
    #[serde(flatten)]
    pub count: TableCount,
}

impl fmt::Display for TableReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TABLE {}: {}", self.table, self.count)
    }
}

/// Full result of a check run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckReport {
    Tables(Vec<TableReport>),
    /// The database could not be opened; no table was inspected.
    #[serde(rename = "error")]
    Unavailable(String),
}

impl CheckReport {
    /// Plain-text report, one entry per line
    pub fn lines(&self) -> Vec<String> {
        match self {
            CheckReport::Tables(tables) => tables.iter().map(|t| t.to_string()).collect(),
            CheckReport::Unavailable(msg) => vec![error_line(msg)],
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Count every table in order, keeping per-table failures in the report.
pub fn check_tables<S: AsRef<str>>(db: &Database, tables: &[S]) -> Vec<TableReport> {
    tables
        .iter()
        .map(|table| {
            let table = table.as_ref();
            let count = match db.count_rows(table) {
                Ok(n) => TableCount::Count(n),
                Err(e) => {
                    warn!(table, error = %e, "row count failed");
                    TableCount::Error(e.to_string())
                }
            };
            TableReport {
                table: table.to_string(),
                count,
            }
        })
        .collect()
}

/// Open `db_path`, count `tables` and close the connection again.
pub fn run_check<P: AsRef<Path>, S: AsRef<str>>(db_path: P, tables: &[S]) -> CheckReport {
    let db = match Database::open(db_path) {
        Ok(db) => db,
        Err(e) => return CheckReport::Unavailable(e.to_string()),
    };

    let reports = check_tables(&db, tables);
    if let Err(e) = db.close() {
        warn!(error = %e, "closing database after check failed");
    }
    CheckReport::Tables(reports)
}
