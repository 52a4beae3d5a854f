//! Handlers for the `/orders/tags` resource (list/create only).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use mediavault_db::models::order_tag::{CreateOrderTag, OrderTag};
use mediavault_db::repositories::OrderTagRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/orders/tags
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<OrderTag>>> {
    let tags = OrderTagRepo::list_all(&state.pool).await?;
    Ok(Json(tags))
}

/// POST /api/v1/orders/tags
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateOrderTag>,
) -> AppResult<(StatusCode, Json<OrderTag>)> {
    let tag = OrderTagRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(tag)))
}
