//! Supplier price list entry model and DTOs.

use abaad_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SupplierMaterial {
    #[serde(rename = "SupplierID")]
    pub supplier_id: DbId,
    #[serde(rename = "MaterialID")]
    pub material_id: DbId,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "LeadTimeDays")]
    pub lead_time_days: Option<i32>,
    #[serde(rename = "SupplierName")]
    pub supplier_name: Option<String>,
    #[serde(rename = "MaterialName")]
    pub material_name: Option<String>,
    #[serde(rename = "UnitOfMeasure")]
    pub unit_of_measure: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupplierMaterialInput {
    #[serde(rename = "SupplierID")]
    pub supplier_id: Option<DbId>,
    #[serde(rename = "MaterialID")]
    pub material_id: Option<DbId>,
    #[serde(rename = "Price")]
    pub price: Option<f64>,
    #[serde(rename = "LeadTimeDays")]
    pub lead_time_days: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct SupplierMaterialRecord {
    pub supplier_id: DbId,
    pub material_id: DbId,
    pub price: f64,
    pub lead_time_days: Option<i32>,
}
