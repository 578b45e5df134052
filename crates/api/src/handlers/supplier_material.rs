//! Handlers for `/supplier-materials`, the supplier price list.

use abaad_core::error::CoreError;
use abaad_core::types::DbId;
use abaad_core::validation::{missing, nonzero_amount, positive_id, require_positive};
use abaad_db::models::supplier_material::{
    SupplierMaterial, SupplierMaterialInput, SupplierMaterialRecord,
};
use abaad_db::repositories::SupplierMaterialRepo;
use axum::extract::State;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::MessageResponse;
use crate::state::AppState;

const ENTITY: &str = "SupplierMaterial";

fn validate(input: &SupplierMaterialInput) -> Result<SupplierMaterialRecord, CoreError> {
    let (Some(supplier_id), Some(material_id), Some(price)) = (
        positive_id(input.supplier_id),
        positive_id(input.material_id),
        nonzero_amount(input.price),
    ) else {
        return Err(missing("SupplierID, MaterialID, Price required"));
    };

    if input.lead_time_days.is_some_and(|days| days < 0) {
        return Err(CoreError::Validation(
            "LeadTimeDays must not be negative".into(),
        ));
    }

    Ok(SupplierMaterialRecord {
        supplier_id,
        material_id,
        price: require_positive(price, "Price")?,
        lead_time_days: input.lead_time_days,
    })
}

/// GET /api/supplier-materials
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<SupplierMaterial>>> {
    let prices = SupplierMaterialRepo::list(&state.pool).await?;
    Ok(Json(prices))
}

/// POST /api/supplier-materials
pub async fn upsert(
    State(state): State<AppState>,
    AppJson(input): AppJson<SupplierMaterialInput>,
) -> AppResult<Json<SupplierMaterial>> {
    let record = validate(&input)?;
    let price = SupplierMaterialRepo::upsert(&state.pool, &record).await?;
    Ok(Json(price))
}

/// DELETE /api/supplier-materials/{supplier_id}/{material_id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath((supplier_id, material_id)): AppPath<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    if SupplierMaterialRepo::delete(&state.pool, supplier_id, material_id).await? {
        Ok(Json(MessageResponse::deleted(ENTITY)))
    } else {
        Err(AppError::Core(CoreError::not_found_composite(
            ENTITY,
            supplier_id,
            material_id,
        )))
    }
}
