pub mod branch;
pub mod client;
pub mod department;
pub mod employee;
pub mod health;
pub mod junction;
pub mod material;
pub mod project;
pub mod reports;
pub mod role;
pub mod supplier;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                                         service + database health
/// /dashboard                                      counts and recent projects (GET)
///
/// /branches                                       list, create
/// /branches/{id}                                  get, update, delete
/// /departments                                    list, create
/// /departments/{id}                               get, update, delete
/// /employees                                      list, create
/// /employees/{id}                                 get, update, delete
/// /roles                                          list, create
/// /roles/{id}                                     get, update, delete
/// /clients                                        list, create
/// /clients/{id}                                   get, update, delete
/// /materials                                      list, create
/// /materials/{id}                                 get, update, delete
/// /suppliers                                      list, create
/// /suppliers/{id}                                 get, update, delete
///
/// /projects                                       list, create
/// /projects/{id}                                  get, update, delete
/// /projects/{id}/assignments                      work assignments (GET)
/// /projects/{id}/materials                        material lines (GET)
///
/// /work-assignments                               list, upsert
/// /work-assignments/{project_id}/{employee_id}    delete
/// /project-materials                              list, upsert
/// /project-materials/{project_id}/{material_id}   delete
/// /supplier-materials                             list, upsert
/// /supplier-materials/{supplier_id}/{material_id} delete
///
/// /reports/profitability                          per-project profit (GET)
/// /reports/supplier-impact                        supplier rankings (GET)
/// /reports/hot-materials                          material spend share (GET)
/// /reports/employee-utilization                   manager team hours (GET)
/// /reports/price-anomalies                        overpaid material lines (GET)
/// /reports/branch-performance                     per-branch results (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .route("/dashboard", get(handlers::dashboard::summary))
        // Organization.
        .nest("/branches", branch::router())
        .nest("/departments", department::router())
        .nest("/employees", employee::router())
        .nest("/roles", role::router())
        // Customers and supply chain.
        .nest("/clients", client::router())
        .nest("/materials", material::router())
        .nest("/suppliers", supplier::router())
        .nest("/projects", project::router())
        // Junction rows keyed on id pairs.
        .nest("/work-assignments", junction::work_assignment_router())
        .nest("/project-materials", junction::project_material_router())
        .nest("/supplier-materials", junction::supplier_material_router())
        .nest("/reports", reports::router())
}
