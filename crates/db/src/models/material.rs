//! Material entity model and DTOs.

use abaad_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Material {
    #[serde(rename = "MaterialID")]
    pub id: DbId,
    #[serde(rename = "MaterialName")]
    pub name: String,
    /// List price per unit, used as the baseline for price anomalies.
    #[serde(rename = "BaseUnitPrice")]
    pub base_unit_price: f64,
    #[serde(rename = "UnitOfMeasure")]
    pub unit_of_measure: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MaterialInput {
    #[serde(rename = "MaterialName")]
    pub name: Option<String>,
    #[serde(rename = "BaseUnitPrice")]
    pub base_unit_price: Option<f64>,
    #[serde(rename = "UnitOfMeasure")]
    pub unit_of_measure: Option<String>,
}

/// Validated material values ready to be written.
#[derive(Debug, Clone)]
pub struct MaterialRecord {
    pub name: String,
    pub base_unit_price: f64,
    pub unit_of_measure: Option<String>,
}
