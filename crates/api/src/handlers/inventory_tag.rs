//! Handlers for the `/inventory/tags` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use mediavault_core::error::CoreError;
use mediavault_core::types::DbId;
use mediavault_db::models::inventory_tag::{CreateInventoryTag, InventoryTag, UpdateInventoryTag};
use mediavault_db::repositories::InventoryTagRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/inventory/tags
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<InventoryTag>>> {
    let tags = InventoryTagRepo::list_all(&state.pool).await?;
    Ok(Json(tags))
}

/// POST /api/v1/inventory/tags
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateInventoryTag>,
) -> AppResult<(StatusCode, Json<InventoryTag>)> {
    let tag = InventoryTagRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(tag)))
}

/// GET /api/v1/inventory/tags/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<InventoryTag>> {
    let tag = InventoryTagRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "InventoryTag",
            id,
        }))?;
    Ok(Json(tag))
}

/// PATCH /api/v1/inventory/tags/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInventoryTag>,
) -> AppResult<Json<InventoryTag>> {
    let tag = InventoryTagRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "InventoryTag",
            id,
        }))?;
    Ok(Json(tag))
}

/// DELETE /api/v1/inventory/tags/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = InventoryTagRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "InventoryTag",
            id,
        }))
    }
}
