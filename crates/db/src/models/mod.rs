//! Domain model structs and DTOs.
//!
//! Each entity submodule contains:
//! - A `FromRow` + `Serialize` row struct, including the display names
//!   joined in from referenced tables
//! - A `Deserialize` input DTO shared by create and update (all `Option`
//!   fields, validated by the handler before it reaches a repository)
//!
//! JSON field names follow the PascalCase wire format of the public API
//! (`BranchID`, `BranchName`, ...); database columns stay snake_case.

pub mod branch;
pub mod client;
pub mod dashboard;
pub mod department;
pub mod employee;
pub mod material;
pub mod project;
pub mod project_material;
pub mod report;
pub mod role;
pub mod supplier;
pub mod supplier_material;
pub mod work_assignment;
