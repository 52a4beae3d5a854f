//! Handlers for the `/orders` resource: list/create, deactivation, and tag
//! lookups in both directions.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use mediavault_core::error::CoreError;
use mediavault_core::types::DbId;
use mediavault_db::models::order::{CreateOrder, Order};
use mediavault_db::models::order_tag::OrderTag;
use mediavault_db::repositories::{InventoryRepo, OrderRepo, OrderTagRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult, FieldErrors};
use crate::query::{OrderListParams, OrderWindow};
use crate::state::AppState;

/// Response body for a successful deactivation.
#[derive(Debug, Serialize)]
pub struct DeactivateResponse {
    pub message: String,
}

/// GET /api/v1/orders
///
/// With both `start` and `end` supplied and parseable, returns orders whose
/// window is fully contained in `[start, end]`. A lone or unparseable bound
/// yields an empty list; neither bound yields the unfiltered list.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<OrderListParams>,
) -> AppResult<Json<Vec<Order>>> {
    let window = match OrderWindow::parse(params.start.as_deref(), params.end.as_deref()) {
        OrderWindow::MatchNothing => return Ok(Json(Vec::new())),
        OrderWindow::Unfiltered => None,
        OrderWindow::Within { start, end } => Some((start, end)),
    };

    let orders = OrderRepo::list(&state.pool, window).await?;
    Ok(Json(orders))
}

/// POST /api/v1/orders
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateOrder>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let mut errors = FieldErrors::new();
    if !InventoryRepo::exists(&state.pool, input.inventory_id).await? {
        errors.add(
            "inventory_id",
            format!("Invalid id {} - object does not exist.", input.inventory_id),
        );
    }
    for &tag_id in &input.tag_ids {
        if !OrderTagRepo::exists(&state.pool, tag_id).await? {
            errors.add(
                "tag_ids",
                format!("Invalid id {tag_id} - object does not exist."),
            );
        }
    }
    if !errors.is_empty() {
        return Err(AppError::Fields(errors));
    }

    let order = OrderRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// PATCH /api/v1/orders/{id}/deactivate
///
/// Sets the active flag false unconditionally; repeating the call returns
/// the same response. There is no reactivation endpoint.
pub async fn deactivate(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeactivateResponse>> {
    let updated = OrderRepo::deactivate(&state.pool, id).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id,
        }));
    }

    tracing::info!(order_id = id, "Order deactivated");

    Ok(Json(DeactivateResponse {
        message: format!("Order {id} has been deactivated."),
    }))
}

/// GET /api/v1/orders/{id}/tags
pub async fn tags(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<OrderTag>>> {
    if !OrderRepo::exists(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id,
        }));
    }

    let tags = OrderRepo::tags(&state.pool, id).await?;
    Ok(Json(tags))
}

/// GET /api/v1/orders/tags/{id}
///
/// All orders carrying the given tag.
pub async fn list_by_tag(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Order>>> {
    if !OrderTagRepo::exists(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "OrderTag",
            id,
        }));
    }

    let orders = OrderRepo::list_by_tag(&state.pool, id).await?;
    Ok(Json(orders))
}
