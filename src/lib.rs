//! # water-me-tools
//!
//! Maintenance utilities for the `water_me.db` SQLite database: `apply_sql`
//! seeds it from a SQL script and `check_db` reports row counts for the
//! tables the app expects.

pub mod check;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod seed;

pub use check::{CheckReport, TableCount, TableReport};
pub use config::{CheckConfig, SeedConfig};
pub use db::Database;
pub use error::{Result, ToolError};
