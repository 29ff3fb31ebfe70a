use anyhow::{Context, Result};
use rusqlite::{Connection, Transaction};

use super::schema;

/// Owns the SQLite connection shared by every planning service.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (or creates) the planning database and enables foreign keys.
    ///
    /// # Examples
    /// ```
    /// use chantier_planning::services::database::Database;
    /// let db = Database::new(":memory:").unwrap();
    /// db.initialize_schema().unwrap();
    /// ```
    pub fn new(path: &str) -> Result<Self> {
        let conn =
            Connection::open(path).context(format!("Failed to open database at {}", path))?;

        conn.execute("PRAGMA foreign_keys = ON", [])
            .context("Failed to enable foreign keys")?;

        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Creates tables and runs column migrations.
    pub fn initialize_schema(&self) -> Result<()> {
        schema::initialize_schema(self.connection())
    }

    /// Runs `work` inside a transaction, committing only if it succeeds.
    pub fn with_transaction<T>(
        conn: &Connection,
        work: impl FnOnce(&Transaction<'_>) -> Result<T>,
    ) -> Result<T> {
        let tx = conn
            .unchecked_transaction()
            .context("Failed to begin transaction")?;
        let value = work(&tx)?;
        tx.commit().context("Failed to commit transaction")?;
        Ok(value)
    }
}
