//! Supplier entity model and DTOs.

use abaad_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A supplier row with the number of materials it offers.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Supplier {
    #[serde(rename = "SupplierID")]
    pub id: DbId,
    #[serde(rename = "SupplierName")]
    pub name: String,
    #[serde(rename = "ContactInfo")]
    pub contact_info: Option<String>,
    #[serde(rename = "MaterialCount")]
    pub material_count: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupplierInput {
    #[serde(rename = "SupplierName")]
    pub name: Option<String>,
    #[serde(rename = "ContactInfo")]
    pub contact_info: Option<String>,
}

/// Validated supplier values ready to be written.
#[derive(Debug, Clone)]
pub struct SupplierRecord {
    pub name: String,
    pub contact_info: Option<String>,
}
