use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Callback request left by a site visitor.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub number: String,
    pub created_at: OffsetDateTime,
}

impl Contact {
    pub async fn create(db: &PgPool, name: &str, number: &str) -> sqlx::Result<Contact> {
        sqlx::query_as::<_, Contact>(
            r#"
            INSERT INTO contacts (name, number)
            VALUES ($1, $2)
            RETURNING id, name, number, created_at
            "#,
        )
        .bind(name)
        .bind(number)
        .fetch_one(db)
        .await
    }

    pub async fn list_newest_first(db: &PgPool) -> sqlx::Result<Vec<Contact>> {
        sqlx::query_as::<_, Contact>(
            r#"
            SELECT id, name, number, created_at
            FROM contacts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(db)
        .await
    }
}
