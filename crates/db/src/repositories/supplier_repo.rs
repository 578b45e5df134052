//! Repository for the `suppliers` table.

use abaad_core::types::DbId;
use sqlx::PgPool;

use crate::models::supplier::{Supplier, SupplierRecord};

const SELECT_JOINED: &str = "\
    SELECT s.id, s.name, s.contact_info, \
           (SELECT COUNT(*) FROM supplier_materials sm WHERE sm.supplier_id = s.id) AS material_count \
    FROM suppliers s";

/// Provides CRUD operations for suppliers.
pub struct SupplierRepo;

impl SupplierRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Supplier>, sqlx::Error> {
        let query = format!("{SELECT_JOINED} ORDER BY s.name, s.id");
        sqlx::query_as::<_, Supplier>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Supplier>, sqlx::Error> {
        let query = format!("{SELECT_JOINED} WHERE s.id = $1");
        sqlx::query_as::<_, Supplier>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &SupplierRecord) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar("INSERT INTO suppliers (name, contact_info) VALUES ($1, $2) RETURNING id")
            .bind(&input.name)
            .bind(&input.contact_info)
            .fetch_one(pool)
            .await
    }

    pub async fn update(pool: &PgPool, id: DbId, input: &SupplierRecord) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE suppliers SET name = $2, contact_info = $3 WHERE id = $1")
            .bind(id)
            .bind(&input.name)
            .bind(&input.contact_info)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM suppliers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
