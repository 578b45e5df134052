//! Shared response bodies for write endpoints.
//!
//! Creates answer `{ "<Entity>ID": id, "message": "..." }`; updates and
//! deletes answer `{ "message": "..." }`.

use abaad_core::types::DbId;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Body of a `201 Created` response.
///
/// The id key varies per entity (`BranchID`, `ProjectID`, ...), so the
/// struct serializes itself as a two-entry map.
#[derive(Debug)]
pub struct Created {
    pub id_field: &'static str,
    pub id: DbId,
    pub message: String,
}

impl Created {
    /// `entity` is the display name, e.g. `Branch` yields `BranchID` and
    /// "Branch created".
    pub fn new(entity: &'static str, id_field: &'static str, id: DbId) -> Self {
        Self {
            id_field,
            id,
            message: format!("{entity} created"),
        }
    }
}

impl Serialize for Created {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(self.id_field, &self.id)?;
        map.serialize_entry("message", &self.message)?;
        map.end()
    }
}

/// `{ "message": ... }` body for updates and deletes.
#[derive(Debug, serde::Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn updated(entity: &str) -> Self {
        Self {
            message: format!("{entity} updated"),
        }
    }

    pub fn deleted(entity: &str) -> Self {
        Self {
            message: format!("{entity} deleted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_uses_entity_id_key() {
        let body = serde_json::to_value(Created::new("Branch", "BranchID", 42)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "BranchID": 42, "message": "Branch created" })
        );
    }

    #[test]
    fn message_bodies() {
        let body = serde_json::to_value(MessageResponse::deleted("Project")).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "Project deleted" }));
        assert_eq!(MessageResponse::updated("Role").message, "Role updated");
    }
}
