//! SQLite-backed repository implementations.
//!
//! ## Database setup
//!
//! [`Database`] wraps a `sqlx::SqlitePool` configured with:
//! - **WAL mode** — allows one writer and multiple concurrent readers.
//! - **Embedded migrations** — `sqlx::migrate!` runs `migrations/001_initial_schema.sql`
//!   automatically when [`Database::open`] is called. The schema is idempotent.
//!
//! ## Repository types
//!
//! Each `Sqlite*Repository` holds a `SqlitePool` and implements the
//! corresponding trait from [`crate::persistence::traits`]:
//!
//! | Type | Trait |
//! |------|-------|
//! | [`SqliteSachetRepository`] | `SachetRepository` |
//! | [`SqliteEchantionnageRepository`] | `EchantionnageRepository` |
//!
//! SQLite has no array column type, so a packet's `combinaison` is stored as
//! comma-joined `TEXT` and round-tripped through the codec in [`helpers`].

mod database;
mod echantionnage_repo;
mod sachet_repo;
#[cfg(test)]
mod integration_tests;
pub(crate) mod helpers;

pub use database::Database;
pub use echantionnage_repo::SqliteEchantionnageRepository;
pub use sachet_repo::SqliteSachetRepository;

/// Every repository, sharing one pool. Handed to the GraphQL schema as context data.
#[derive(Clone)]
pub struct Repositories {
    pub sachets: SqliteSachetRepository,
    pub echantionnages: SqliteEchantionnageRepository,
}

impl Repositories {
    pub fn new(db: &Database) -> Self {
        Self {
            sachets: SqliteSachetRepository::new(db.pool().clone()),
            echantionnages: SqliteEchantionnageRepository::new(db.pool().clone()),
        }
    }
}
