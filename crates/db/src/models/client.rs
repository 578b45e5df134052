//! Client entity model and DTOs.

use abaad_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    #[serde(rename = "ClientID")]
    pub id: DbId,
    #[serde(rename = "ClientName")]
    pub name: String,
    #[serde(rename = "ContactInfo")]
    pub contact_info: Option<String>,
    #[serde(rename = "ProjectCount")]
    pub project_count: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientInput {
    #[serde(rename = "ClientName")]
    pub name: Option<String>,
    #[serde(rename = "ContactInfo")]
    pub contact_info: Option<String>,
}

/// Validated client values ready to be written.
#[derive(Debug, Clone)]
pub struct ClientRecord {
    pub name: String,
    pub contact_info: Option<String>,
}
