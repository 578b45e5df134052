//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument and return `sqlx::Error`.

pub mod branch_repo;
pub mod client_repo;
pub mod dashboard_repo;
pub mod department_repo;
pub mod employee_repo;
pub mod material_repo;
pub mod project_material_repo;
pub mod project_repo;
pub mod report_repo;
pub mod role_repo;
pub mod supplier_material_repo;
pub mod supplier_repo;
pub mod work_assignment_repo;

pub use branch_repo::BranchRepo;
pub use client_repo::ClientRepo;
pub use dashboard_repo::DashboardRepo;
pub use department_repo::DepartmentRepo;
pub use employee_repo::EmployeeRepo;
pub use material_repo::MaterialRepo;
pub use project_material_repo::ProjectMaterialRepo;
pub use project_repo::ProjectRepo;
pub use report_repo::ReportRepo;
pub use role_repo::RoleRepo;
pub use supplier_material_repo::SupplierMaterialRepo;
pub use supplier_repo::SupplierRepo;
pub use work_assignment_repo::WorkAssignmentRepo;
