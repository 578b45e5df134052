//! Repository for the `materials` catalog.

use abaad_core::types::DbId;
use sqlx::PgPool;

use crate::models::material::{Material, MaterialRecord};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, base_unit_price, unit_of_measure";

/// Provides CRUD operations for materials.
pub struct MaterialRepo;

impl MaterialRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Material>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM materials ORDER BY name, id");
        sqlx::query_as::<_, Material>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Material>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM materials WHERE id = $1");
        sqlx::query_as::<_, Material>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &MaterialRecord) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO materials (name, base_unit_price, unit_of_measure)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(&input.name)
        .bind(input.base_unit_price)
        .bind(&input.unit_of_measure)
        .fetch_one(pool)
        .await
    }

    pub async fn update(pool: &PgPool, id: DbId, input: &MaterialRecord) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE materials SET name = $2, base_unit_price = $3, unit_of_measure = $4
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.base_unit_price)
        .bind(&input.unit_of_measure)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM materials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
