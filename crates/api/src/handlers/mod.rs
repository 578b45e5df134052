pub mod branch;
pub mod client;
pub mod dashboard;
pub mod department;
pub mod employee;
pub mod material;
pub mod project;
pub mod project_material;
pub mod reports;
pub mod role;
pub mod supplier;
pub mod supplier_material;
pub mod work_assignment;
