//! Route definitions for the orders resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::{order, order_tag};
use crate::state::AppState;

/// Routes mounted at `/orders`.
///
/// ```text
/// GET    /                  -> list (?start=&end=)
/// POST   /                  -> create
/// PATCH  /{id}/deactivate   -> deactivate
/// GET    /{id}/tags         -> tags of one order
/// GET    /tags              -> order-tag list
/// POST   /tags              -> order-tag create
/// GET    /tags/{id}         -> orders carrying a tag
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(order::list).post(order::create))
        .route("/{id}/deactivate", patch(order::deactivate))
        .route("/{id}/tags", get(order::tags))
        .route("/tags", get(order_tag::list).post(order_tag::create))
        .route("/tags/{id}", get(order::list_by_tag))
}
