pub mod sqlite;
pub mod traits;

use chrono::{DateTime, Utc};

use sqlite::helpers::CodecError;

/// Errors from the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(String),
    #[error("Invalid stored combinaison: {0}")]
    Decode(#[from] CodecError),
}

/// A stored packet, with its combination already decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct SachetData {
    pub id: i32,
    pub poids: i32,
    pub combinaison: Vec<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Mutable fields of a packet, used for both create and full-replace update.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSachet {
    pub poids: i32,
    pub combinaison: Vec<i32>,
}

/// A stored sampling record.
#[derive(Debug, Clone, PartialEq)]
pub struct EchantionnageData {
    pub echantion_number: i32,
    pub poids_generated: i32,
    pub poids_measured: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Mutable fields of a sampling record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEchantionnage {
    pub poids_generated: i32,
    pub poids_measured: i32,
}

/// The instant a write is stamped with. Only repositories call this.
pub fn now_timestamp() -> DateTime<Utc> {
    Utc::now()
}
