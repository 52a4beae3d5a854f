//! Route definitions for the inventory resource and its lookup tables.
//!
//! The static segments (`/tags`, `/languages`, `/types`) take precedence
//! over the `/{id}` capture, so lookup routes and item routes coexist under
//! one prefix.

use axum::routing::get;
use axum::Router;

use crate::handlers::{inventory, inventory_language, inventory_tag, inventory_type};
use crate::state::AppState;

/// Routes mounted at `/inventory`.
///
/// ```text
/// GET    /                  -> list (paginated)
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PATCH  /{id}              -> update
/// DELETE /{id}              -> delete
/// GET    /tags              -> tag list          (and /languages, /types)
/// POST   /tags              -> tag create
/// GET    /tags/{id}         -> tag get_by_id
/// PATCH  /tags/{id}         -> tag update
/// DELETE /tags/{id}         -> tag delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(inventory::list).post(inventory::create))
        .route(
            "/{id}",
            get(inventory::get_by_id)
                .patch(inventory::update)
                .delete(inventory::delete),
        )
        .route(
            "/tags",
            get(inventory_tag::list).post(inventory_tag::create),
        )
        .route(
            "/tags/{id}",
            get(inventory_tag::get_by_id)
                .patch(inventory_tag::update)
                .delete(inventory_tag::delete),
        )
        .route(
            "/languages",
            get(inventory_language::list).post(inventory_language::create),
        )
        .route(
            "/languages/{id}",
            get(inventory_language::get_by_id)
                .patch(inventory_language::update)
                .delete(inventory_language::delete),
        )
        .route(
            "/types",
            get(inventory_type::list).post(inventory_type::create),
        )
        .route(
            "/types/{id}",
            get(inventory_type::get_by_id)
                .patch(inventory_type::update)
                .delete(inventory_type::delete),
        )
}
