//! SQLite-backed implementation of [`EchantionnageRepository`].

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::persistence::traits::EchantionnageRepository;
use crate::persistence::{now_timestamp, EchantionnageData, NewEchantionnage, PersistenceError};

type EchantionnageRow = (i32, i32, i32, DateTime<Utc>, DateTime<Utc>);

#[derive(Clone)]
pub struct SqliteEchantionnageRepository {
    pool: SqlitePool,
}

impl SqliteEchantionnageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn row_to_echantionnage(
    (echantion_number, poids_generated, poids_measured, created_at, updated_at): EchantionnageRow,
) -> EchantionnageData {
    EchantionnageData {
        echantion_number,
        poids_generated,
        poids_measured,
        created_at,
        updated_at,
    }
}

impl EchantionnageRepository for SqliteEchantionnageRepository {
    async fn create_echantionnage(
        &self,
        data: &NewEchantionnage,
    ) -> Result<EchantionnageData, PersistenceError> {
        let now = now_timestamp();

        let row: EchantionnageRow = sqlx::query_as(
            r#"
            INSERT INTO echantionnage (poids_generated, poids_measured, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            RETURNING echantion_number, poids_generated, poids_measured, created_at, updated_at
            "#,
        )
        .bind(data.poids_generated)
        .bind(data.poids_measured)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row_to_echantionnage(row))
    }

    async fn load_echantionnage(
        &self,
        echantion_number: i32,
    ) -> Result<Option<EchantionnageData>, PersistenceError> {
        let row: Option<EchantionnageRow> = sqlx::query_as(
            r#"
            SELECT echantion_number, poids_generated, poids_measured, created_at, updated_at
            FROM echantionnage
            WHERE echantion_number = ?
            "#,
        )
        .bind(echantion_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(row_to_echantionnage))
    }

    async fn list_echantionnages(&self) -> Result<Vec<EchantionnageData>, PersistenceError> {
        let rows: Vec<EchantionnageRow> = sqlx::query_as(
            r#"
            SELECT echantion_number, poids_generated, poids_measured, created_at, updated_at
            FROM echantionnage
            ORDER BY echantion_number ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(row_to_echantionnage).collect())
    }

    async fn update_echantionnage(
        &self,
        echantion_number: i32,
        data: &NewEchantionnage,
    ) -> Result<bool, PersistenceError> {
        let result = sqlx::query(
            r#"
            UPDATE echantionnage
            SET poids_generated = ?, poids_measured = ?, updated_at = ?
            WHERE echantion_number = ?
            "#,
        )
        .bind(data.poids_generated)
        .bind(data.poids_measured)
        .bind(now_timestamp())
        .bind(echantion_number)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_echantionnage(&self, echantion_number: i32) -> Result<bool, PersistenceError> {
        let result = sqlx::query("DELETE FROM echantionnage WHERE echantion_number = ?")
            .bind(echantion_number)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
