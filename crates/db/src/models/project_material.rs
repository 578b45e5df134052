//! Project material line (quantity bought at a unit price) model and DTOs.

use abaad_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectMaterial {
    #[serde(rename = "ProjectID")]
    pub project_id: DbId,
    #[serde(rename = "MaterialID")]
    pub material_id: DbId,
    #[serde(rename = "Quantity")]
    pub quantity: f64,
    /// Unit price actually paid by the project.
    #[serde(rename = "UnitPrice")]
    pub unit_price: f64,
    /// `Quantity * UnitPrice`.
    #[serde(rename = "LineTotal")]
    pub line_total: f64,
    #[serde(rename = "ProjectName")]
    pub project_name: Option<String>,
    #[serde(rename = "MaterialName")]
    pub material_name: Option<String>,
    #[serde(rename = "UnitOfMeasure")]
    pub unit_of_measure: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectMaterialInput {
    #[serde(rename = "ProjectID")]
    pub project_id: Option<DbId>,
    #[serde(rename = "MaterialID")]
    pub material_id: Option<DbId>,
    #[serde(rename = "Quantity")]
    pub quantity: Option<f64>,
    #[serde(rename = "UnitPrice")]
    pub unit_price: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct ProjectMaterialRecord {
    pub project_id: DbId,
    pub material_id: DbId,
    pub quantity: f64,
    pub unit_price: f64,
}
