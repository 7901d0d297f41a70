use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Installation showcase shown on the marketing site.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Solution {
    pub id: Uuid,
    pub image_url: String,
    pub location: String,
    pub power: f64,
    pub annual_saving: String,
    pub created_at: OffsetDateTime,
}

impl Solution {
    pub async fn create(
        db: &PgPool,
        image_url: &str,
        location: &str,
        power: f64,
        annual_saving: &str,
    ) -> sqlx::Result<Solution> {
        sqlx::query_as::<_, Solution>(
            r#"
            INSERT INTO solutions (image_url, location, power, annual_saving)
            VALUES ($1, $2, $3, $4)
            RETURNING id, image_url, location, power, annual_saving, created_at
            "#,
        )
        .bind(image_url)
        .bind(location)
        .bind(power)
        .bind(annual_saving)
        .fetch_one(db)
        .await
    }

    pub async fn list_newest_first(db: &PgPool) -> sqlx::Result<Vec<Solution>> {
        sqlx::query_as::<_, Solution>(
            r#"
            SELECT id, image_url, location, power, annual_saving, created_at
            FROM solutions
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(db)
        .await
    }

    /// Returns whether a row was actually removed.
    pub async fn delete(db: &PgPool, id: Uuid) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM solutions WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
