use std::fmt::Display;

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Not-found error for an entity addressed by its primary key.
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        Self::NotFound {
            entity,
            key: id.to_string(),
        }
    }

    /// Not-found error for a junction row addressed by a composite key.
    ///
    /// The key parts are rendered as `a/b`, matching the URL path shape.
    pub fn not_found_composite(entity: &'static str, left: impl Display, right: impl Display) -> Self {
        Self::NotFound {
            entity,
            key: format!("{left}/{right}"),
        }
    }
}
