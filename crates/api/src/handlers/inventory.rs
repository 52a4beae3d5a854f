//! Handlers for the `/inventory` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use mediavault_core::error::CoreError;
use mediavault_core::metadata::InventoryMetadata;
use mediavault_core::types::DbId;
use mediavault_db::models::inventory::{CreateInventory, Inventory, UpdateInventory};
use mediavault_db::repositories::{
    InventoryLanguageRepo, InventoryRepo, InventoryTagRepo, InventoryTypeRepo,
};

use crate::error::{AppError, AppResult, FieldErrors};
use crate::query::{CreatedAfter, InventoryListParams, Page};
use crate::response::Paginated;
use crate::state::AppState;

/// Base path used when building pagination links.
const LIST_PATH: &str = "/api/v1/inventory";

/// GET /api/v1/inventory
///
/// Paginated listing in insertion order, optionally restricted to items
/// created strictly after the `created_after` calendar date (midnight UTC).
/// An unparseable date yields an empty page, never an error.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<InventoryListParams>,
) -> AppResult<Json<Paginated<Inventory>>> {
    let page = Page::clamp(params.limit, params.offset);

    let created_after = match CreatedAfter::parse(params.created_after.as_deref()) {
        CreatedAfter::MatchNothing => return Ok(Json(Paginated::empty())),
        CreatedAfter::Unfiltered => None,
        CreatedAfter::After(instant) => Some(instant),
    };

    let count = InventoryRepo::count(&state.pool, created_after).await?;
    let results =
        InventoryRepo::list(&state.pool, created_after, page.limit, page.offset).await?;

    let mut extra = Vec::new();
    if let Some(raw) = params.created_after.as_deref() {
        extra.push(("created_after", raw));
    }

    Ok(Json(Paginated::new(
        LIST_PATH,
        &extra,
        count,
        page.limit,
        page.offset,
        results,
    )))
}

/// POST /api/v1/inventory
///
/// The body is inspected as raw JSON first so a missing or malformed
/// `metadata` object is reported as a 400 with an error detail, before any
/// field validation runs.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<(StatusCode, Json<Inventory>)> {
    let metadata = body
        .get("metadata")
        .ok_or_else(|| AppError::BadRequest("metadata is required".to_string()))?;
    InventoryMetadata::parse(metadata)?;

    let input: CreateInventory =
        serde_json::from_value(body).map_err(|e| AppError::BadRequest(e.to_string()))?;

    validate_references(
        &state,
        Some(input.type_id),
        Some(input.language_id),
        Some(&input.tag_ids),
    )
    .await?;

    let inventory = InventoryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(inventory)))
}

/// GET /api/v1/inventory/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Inventory>> {
    let inventory = InventoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Inventory",
            id,
        }))?;
    Ok(Json(inventory))
}

/// PATCH /api/v1/inventory/{id}
///
/// Partial update; only provided fields change. The stored metadata document
/// is not re-validated here (the schema invariant holds at creation time).
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInventory>,
) -> AppResult<Json<Inventory>> {
    validate_references(
        &state,
        input.type_id,
        input.language_id,
        input.tag_ids.as_deref(),
    )
    .await?;

    let inventory = InventoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Inventory",
            id,
        }))?;
    Ok(Json(inventory))
}

/// DELETE /api/v1/inventory/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = InventoryRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Inventory",
            id,
        }))
    }
}

/// Check that every referenced lookup row exists, collecting failures into
/// field-keyed messages.
async fn validate_references(
    state: &AppState,
    type_id: Option<DbId>,
    language_id: Option<DbId>,
    tag_ids: Option<&[DbId]>,
) -> AppResult<()> {
    let mut errors = FieldErrors::new();

    if let Some(type_id) = type_id {
        if !InventoryTypeRepo::exists(&state.pool, type_id).await? {
            errors.add(
                "type_id",
                format!("Invalid id {type_id} - object does not exist."),
            );
        }
    }
    if let Some(language_id) = language_id {
        if !InventoryLanguageRepo::exists(&state.pool, language_id).await? {
            errors.add(
                "language_id",
                format!("Invalid id {language_id} - object does not exist."),
            );
        }
    }
    if let Some(tag_ids) = tag_ids {
        for &tag_id in tag_ids {
            if !InventoryTagRepo::exists(&state.pool, tag_id).await? {
                errors.add(
                    "tag_ids",
                    format!("Invalid id {tag_id} - object does not exist."),
                );
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Fields(errors))
    }
}
