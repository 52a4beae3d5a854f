//! Handlers for the `/inventory/types` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use mediavault_core::error::CoreError;
use mediavault_core::types::DbId;
use mediavault_db::models::inventory_type::{
    CreateInventoryType, InventoryType, UpdateInventoryType,
};
use mediavault_db::repositories::InventoryTypeRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/inventory/types
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<InventoryType>>> {
    let types = InventoryTypeRepo::list_all(&state.pool).await?;
    Ok(Json(types))
}

/// POST /api/v1/inventory/types
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateInventoryType>,
) -> AppResult<(StatusCode, Json<InventoryType>)> {
    let inventory_type = InventoryTypeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(inventory_type)))
}

/// GET /api/v1/inventory/types/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<InventoryType>> {
    let inventory_type = InventoryTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "InventoryType",
            id,
        }))?;
    Ok(Json(inventory_type))
}

/// PATCH /api/v1/inventory/types/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInventoryType>,
) -> AppResult<Json<InventoryType>> {
    let inventory_type = InventoryTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "InventoryType",
            id,
        }))?;
    Ok(Json(inventory_type))
}

/// DELETE /api/v1/inventory/types/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = InventoryTypeRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "InventoryType",
            id,
        }))
    }
}
