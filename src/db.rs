//! SQLite access shared by both tools.
//!
//! Opening only binds the file; a corrupt or locked database surfaces on the
//! first statement run against it.

use crate::error::{Result, ToolError};
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

/// Database handle
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open database connection, creating the file if it does not exist yet
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening database");

        let conn = Connection::open(path).map_err(|source| ToolError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Database { conn })
    }

    /// Open an in-memory database for testing
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Database { conn })
    }

    /// Execute a (possibly multi-statement) script.
    ///
    /// Statements run in autocommit mode, so anything before a failing
    /// statement stays applied.
    pub fn apply_script(&self, sql: &str) -> Result<()> {
        debug!(bytes = sql.len(), "executing script");
        self.conn.execute_batch(sql)?;
        Ok(())
    }

    /// Execute a script inside a single transaction; a failing statement
    /// rolls back everything the script did.
    pub fn apply_script_atomic(&mut self, sql: &str) -> Result<()> {
        debug!(bytes = sql.len(), "executing script in transaction");
        let tx = self.conn.transaction()?;
        tx.execute_batch(sql)?;
        tx.commit()?;
        Ok(())
    }

    /// Count the rows of `table`
    pub fn count_rows(&self, table: &str) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", quote_identifier(table));
        let count = self.conn.query_row(&sql, [], |row| row.get(0))?;
        debug!(table, count, "counted rows");
        Ok(count)
    }

    /// Close the connection, surfacing any error SQLite reports on close
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| ToolError::Close(e))?;
        debug!("database closed");
        Ok(())
    }
}

/// Quote `name` as an SQLite identifier.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
