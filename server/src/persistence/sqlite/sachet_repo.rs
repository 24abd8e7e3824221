//! SQLite-backed repository for packets.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use super::helpers::{decode_combinaison, encode_combinaison};
use crate::persistence::traits::SachetRepository;
use crate::persistence::{now_timestamp, NewSachet, PersistenceError, SachetData};

type SachetRow = (i32, i32, Option<String>, DateTime<Utc>, DateTime<Utc>);

/// SQLite implementation of [`SachetRepository`].
#[derive(Clone)]
pub struct SqliteSachetRepository {
    pool: SqlitePool,
}

impl SqliteSachetRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn row_to_sachet(
    (id, poids, combinaison, created_at, updated_at): SachetRow,
) -> Result<SachetData, PersistenceError> {
    Ok(SachetData {
        id,
        poids,
        combinaison: decode_combinaison(combinaison.as_deref())?,
        created_at,
        updated_at,
    })
}

impl SachetRepository for SqliteSachetRepository {
    async fn create_sachet(&self, data: &NewSachet) -> Result<SachetData, PersistenceError> {
        let now = now_timestamp();

        let row: SachetRow = sqlx::query_as(
            r#"
            INSERT INTO sachet (poids, combinaison, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, poids, combinaison, created_at, updated_at
            "#,
        )
        .bind(data.poids)
        .bind(encode_combinaison(&data.combinaison))
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        row_to_sachet(row)
    }

    async fn load_sachet(&self, id: i32) -> Result<Option<SachetData>, PersistenceError> {
        let row: Option<SachetRow> = sqlx::query_as(
            "SELECT id, poids, combinaison, created_at, updated_at FROM sachet WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_sachet).transpose()
    }

    async fn list_sachets(&self) -> Result<Vec<SachetData>, PersistenceError> {
        let rows: Vec<SachetRow> = sqlx::query_as(
            "SELECT id, poids, combinaison, created_at, updated_at FROM sachet ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_sachet).collect()
    }

    async fn update_sachet(&self, id: i32, data: &NewSachet) -> Result<bool, PersistenceError> {
        let result = sqlx::query(
            "UPDATE sachet SET poids = ?, combinaison = ?, updated_at = ? WHERE id = ?",
        )
        .bind(data.poids)
        .bind(encode_combinaison(&data.combinaison))
        .bind(now_timestamp())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_sachet(&self, id: i32) -> Result<bool, PersistenceError> {
        let result = sqlx::query("DELETE FROM sachet WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::sqlite::Database;

    async fn test_db() -> (Database, SqliteSachetRepository) {
        let db = Database::new_in_memory().await.unwrap();
        let repo = SqliteSachetRepository::new(db.pool().clone());
        (db, repo)
    }

    fn sample_sachet(poids: i32, combinaison: &[i32]) -> NewSachet {
        NewSachet {
            poids,
            combinaison: combinaison.to_vec(),
        }
    }

    #[tokio::test]
    async fn test_create_and_load_roundtrip() {
        let (_db, repo) = test_db().await;
        let created = repo.create_sachet(&sample_sachet(100, &[1, 2, 3])).await.unwrap();
        assert_eq!(created.poids, 100);
        assert_eq!(created.combinaison, vec![1, 2, 3]);
        assert_eq!(created.created_at, created.updated_at);

        let loaded = repo.load_sachet(created.id).await.unwrap();
        assert_eq!(loaded, Some(created));
    }

    #[tokio::test]
    async fn test_combinaison_stored_as_comma_joined_text() {
        let (db, repo) = test_db().await;
        let created = repo.create_sachet(&sample_sachet(5, &[10, 20, 30])).await.unwrap();

        let (raw,): (String,) = sqlx::query_as("SELECT combinaison FROM sachet WHERE id = ?")
            .bind(created.id)
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(raw, "10,20,30");
    }

    #[tokio::test]
    async fn test_empty_combinaison() {
        let (_db, repo) = test_db().await;
        let created = repo.create_sachet(&sample_sachet(0, &[])).await.unwrap();
        let loaded = repo.load_sachet(created.id).await.unwrap().unwrap();
        assert!(loaded.combinaison.is_empty());
    }

    #[tokio::test]
    async fn test_load_nonexistent() {
        let (_db, repo) = test_db().await;
        assert_eq!(repo.load_sachet(999_999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_ordered_by_id() {
        let (_db, repo) = test_db().await;
        let a = repo.create_sachet(&sample_sachet(1, &[1])).await.unwrap();
        let b = repo.create_sachet(&sample_sachet(2, &[2])).await.unwrap();
        let c = repo.create_sachet(&sample_sachet(3, &[3])).await.unwrap();

        let list = repo.list_sachets().await.unwrap();
        let ids: Vec<i32> = list.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![a.id, b.id, c.id]);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_stamps() {
        let (_db, repo) = test_db().await;
        let created = repo.create_sachet(&sample_sachet(100, &[1, 2])).await.unwrap();

        let updated = repo
            .update_sachet(created.id, &sample_sachet(250, &[9, 8, 7]))
            .await
            .unwrap();
        assert!(updated);

        let loaded = repo.load_sachet(created.id).await.unwrap().unwrap();
        assert_eq!(loaded.poids, 250);
        assert_eq!(loaded.combinaison, vec![9, 8, 7]);
        assert_eq!(loaded.created_at, created.created_at);
        assert!(loaded.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing_returns_false() {
        let (_db, repo) = test_db().await;
        let updated = repo.update_sachet(42, &sample_sachet(1, &[1])).await.unwrap();
        assert!(!updated);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let (_db, repo) = test_db().await;
        let created = repo.create_sachet(&sample_sachet(1, &[1])).await.unwrap();
        assert!(repo.delete_sachet(created.id).await.unwrap());
        assert!(!repo.delete_sachet(created.id).await.unwrap());
        assert_eq!(repo.load_sachet(created.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_malformed_stored_text_is_decode_error() {
        let (db, repo) = test_db().await;
        let created = repo.create_sachet(&sample_sachet(1, &[1])).await.unwrap();
        sqlx::query("UPDATE sachet SET combinaison = '3,x,5' WHERE id = ?")
            .bind(created.id)
            .execute(db.pool())
            .await
            .unwrap();

        let result = repo.load_sachet(created.id).await;
        assert!(
            matches!(result, Err(PersistenceError::Decode(_))),
            "expected Decode, got {:?}",
            result
        );
        assert!(matches!(
            repo.list_sachets().await,
            Err(PersistenceError::Decode(_))
        ));
    }
}
