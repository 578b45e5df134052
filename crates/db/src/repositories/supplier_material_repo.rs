//! Repository for the `supplier_materials` price list.

use abaad_core::types::DbId;
use sqlx::PgPool;

use crate::models::supplier_material::{SupplierMaterial, SupplierMaterialRecord};

/// Joined projection over an `sm` row source.
const PROJECTION: &str = "\
    SELECT sm.supplier_id, sm.material_id, sm.price, sm.lead_time_days, \
           s.name AS supplier_name, m.name AS material_name, m.unit_of_measure";

const JOINS: &str = "\
    LEFT JOIN suppliers s ON s.id = sm.supplier_id \
    LEFT JOIN materials m ON m.id = sm.material_id";

/// Provides list/upsert/delete for supplier prices.
pub struct SupplierMaterialRepo;

impl SupplierMaterialRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<SupplierMaterial>, sqlx::Error> {
        let query = format!(
            "{PROJECTION} FROM supplier_materials sm {JOINS}
             ORDER BY m.name, sm.price"
        );
        sqlx::query_as::<_, SupplierMaterial>(&query)
            .fetch_all(pool)
            .await
    }

    /// Insert or replace the price keyed on (supplier, material).
    pub async fn upsert(
        pool: &PgPool,
        input: &SupplierMaterialRecord,
    ) -> Result<SupplierMaterial, sqlx::Error> {
        let query = format!(
            "WITH sm AS (
                INSERT INTO supplier_materials (supplier_id, material_id, price, lead_time_days)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (supplier_id, material_id) DO UPDATE SET
                    price = EXCLUDED.price,
                    lead_time_days = EXCLUDED.lead_time_days
                RETURNING *
             )
             {PROJECTION} FROM sm {JOINS}"
        );
        sqlx::query_as::<_, SupplierMaterial>(&query)
            .bind(input.supplier_id)
            .bind(input.material_id)
            .bind(input.price)
            .bind(input.lead_time_days)
            .fetch_one(pool)
            .await
    }

    pub async fn delete(
        pool: &PgPool,
        supplier_id: DbId,
        material_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM supplier_materials WHERE supplier_id = $1 AND material_id = $2",
        )
        .bind(supplier_id)
        .bind(material_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
