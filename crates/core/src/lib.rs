//! Domain core for the Abaad contracting backend.
//!
//! Pure logic only: error taxonomy, shared types, request validation and
//! the derived-metric computations behind the report endpoints. Nothing in
//! this crate touches the database or HTTP.

pub mod error;
pub mod project_status;
pub mod reports;
pub mod types;
pub mod validation;
