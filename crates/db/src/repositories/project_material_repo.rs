//! Repository for the `project_materials` junction table.

use abaad_core::types::DbId;
use sqlx::PgPool;

use crate::models::project_material::{ProjectMaterial, ProjectMaterialRecord};

/// Joined projection over a `pm` row source.
const PROJECTION: &str = "\
    SELECT pm.project_id, pm.material_id, pm.quantity, pm.unit_price, \
           pm.quantity * pm.unit_price AS line_total, \
           p.name AS project_name, m.name AS material_name, m.unit_of_measure";

const JOINS: &str = "\
    LEFT JOIN projects p ON p.id = pm.project_id \
    LEFT JOIN materials m ON m.id = pm.material_id";

/// Provides list/upsert/delete for materials bought by projects.
pub struct ProjectMaterialRepo;

impl ProjectMaterialRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<ProjectMaterial>, sqlx::Error> {
        let query = format!(
            "{PROJECTION} FROM project_materials pm {JOINS}
             ORDER BY p.name, m.name"
        );
        sqlx::query_as::<_, ProjectMaterial>(&query)
            .fetch_all(pool)
            .await
    }

    /// Material lines of one project, largest line total first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectMaterial>, sqlx::Error> {
        let query = format!(
            "{PROJECTION} FROM project_materials pm {JOINS}
             WHERE pm.project_id = $1
             ORDER BY line_total DESC, m.name"
        );
        sqlx::query_as::<_, ProjectMaterial>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Insert or replace the line keyed on (project, material).
    pub async fn upsert(
        pool: &PgPool,
        input: &ProjectMaterialRecord,
    ) -> Result<ProjectMaterial, sqlx::Error> {
        let query = format!(
            "WITH pm AS (
                INSERT INTO project_materials (project_id, material_id, quantity, unit_price)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (project_id, material_id) DO UPDATE SET
                    quantity = EXCLUDED.quantity,
                    unit_price = EXCLUDED.unit_price
                RETURNING *
             )
             {PROJECTION} FROM pm {JOINS}"
        );
        sqlx::query_as::<_, ProjectMaterial>(&query)
            .bind(input.project_id)
            .bind(input.material_id)
            .bind(input.quantity)
            .bind(input.unit_price)
            .fetch_one(pool)
            .await
    }

    pub async fn delete(
        pool: &PgPool,
        project_id: DbId,
        material_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM project_materials WHERE project_id = $1 AND material_id = $2",
        )
        .bind(project_id)
        .bind(material_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
