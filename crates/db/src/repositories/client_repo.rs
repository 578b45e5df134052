//! Repository for the `clients` table.

use abaad_core::types::DbId;
use sqlx::PgPool;

use crate::models::client::{Client, ClientRecord};

const SELECT_JOINED: &str = "\
    SELECT c.id, c.name, c.contact_info, \
           (SELECT COUNT(*) FROM projects p WHERE p.client_id = c.id) AS project_count \
    FROM clients c";

/// Provides CRUD operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("{SELECT_JOINED} ORDER BY c.name, c.id");
        sqlx::query_as::<_, Client>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("{SELECT_JOINED} WHERE c.id = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &ClientRecord) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar("INSERT INTO clients (name, contact_info) VALUES ($1, $2) RETURNING id")
            .bind(&input.name)
            .bind(&input.contact_info)
            .fetch_one(pool)
            .await
    }

    pub async fn update(pool: &PgPool, id: DbId, input: &ClientRecord) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE clients SET name = $2, contact_info = $3 WHERE id = $1")
            .bind(id)
            .bind(&input.name)
            .bind(&input.contact_info)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
