//! Handlers for the `/inventory/languages` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use mediavault_core::error::CoreError;
use mediavault_core::types::DbId;
use mediavault_db::models::inventory_language::{
    CreateInventoryLanguage, InventoryLanguage, UpdateInventoryLanguage,
};
use mediavault_db::repositories::InventoryLanguageRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/inventory/languages
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<InventoryLanguage>>> {
    let languages = InventoryLanguageRepo::list_all(&state.pool).await?;
    Ok(Json(languages))
}

/// POST /api/v1/inventory/languages
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateInventoryLanguage>,
) -> AppResult<(StatusCode, Json<InventoryLanguage>)> {
    let language = InventoryLanguageRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(language)))
}

/// GET /api/v1/inventory/languages/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<InventoryLanguage>> {
    let language = InventoryLanguageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "InventoryLanguage",
            id,
        }))?;
    Ok(Json(language))
}

/// PATCH /api/v1/inventory/languages/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInventoryLanguage>,
) -> AppResult<Json<InventoryLanguage>> {
    let language = InventoryLanguageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "InventoryLanguage",
            id,
        }))?;
    Ok(Json(language))
}

/// DELETE /api/v1/inventory/languages/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = InventoryLanguageRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "InventoryLanguage",
            id,
        }))
    }
}
