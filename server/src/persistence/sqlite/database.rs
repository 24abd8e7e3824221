//! SQLite connection pool, migrations and the post-migration table check.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;

use crate::persistence::PersistenceError;

/// Tables the repositories read and write. Both must exist after migrating.
pub const SERVICE_TABLES: [&str; 2] = ["sachet", "echantionnage"];

/// Holds a connection pool to the SQLite database.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (or create) the database file at `path`, migrate it, and check
    /// that the packet and sampling tables are in place.
    pub async fn open(path: &Path) -> Result<Self, PersistenceError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let db = Self::connect(options, 5).await?;
        let (sachets, echantionnages) = db.row_counts().await?;
        tracing::info!(
            path = %path.display(),
            sachets,
            echantionnages,
            "Database ready"
        );
        Ok(db)
    }

    /// Create an in-memory database for testing. Migrations are applied.
    #[cfg(test)]
    pub async fn new_in_memory() -> Result<Self, PersistenceError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        // Each in-memory connection is its own database, so keep exactly one.
        Self::connect(options, 1).await
    }

    async fn connect(
        options: SqliteConnectOptions,
        max_connections: u32,
    ) -> Result<Self, PersistenceError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.run_migrations().await?;
        db.verify_tables().await?;
        Ok(db)
    }

    /// Run embedded migrations from `server/migrations/`.
    async fn run_migrations(&self) -> Result<(), PersistenceError> {
        let migrator = sqlx::migrate!("./migrations");
        migrator
            .run(&self.pool)
            .await
            .map_err(|e| PersistenceError::Migration(e.to_string()))?;
        tracing::debug!(migrations = migrator.iter().count(), "Migrations applied");
        Ok(())
    }

    /// Fail if a migration left one of [`SERVICE_TABLES`] missing.
    async fn verify_tables(&self) -> Result<(), PersistenceError> {
        let present: Vec<(String,)> =
            sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table'")
                .fetch_all(&self.pool)
                .await?;

        let missing: Vec<&str> = SERVICE_TABLES
            .iter()
            .copied()
            .filter(|table| !present.iter().any(|(name,)| name == table))
            .collect();
        if !missing.is_empty() {
            return Err(PersistenceError::Migration(format!(
                "missing tables after migration: {}",
                missing.join(", ")
            )));
        }

        tracing::debug!(tables = ?SERVICE_TABLES, "Service tables present");
        Ok(())
    }

    /// Number of stored packets and sampling records.
    async fn row_counts(&self) -> Result<(i64, i64), PersistenceError> {
        let counts: (i64, i64) = sqlx::query_as(
            "SELECT (SELECT COUNT(*) FROM sachet), (SELECT COUNT(*) FROM echantionnage)",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(counts)
    }

    /// Get a reference to the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
