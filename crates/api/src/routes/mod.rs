pub mod health;
pub mod inventory;
pub mod orders;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /inventory                    list (paginated, ?created_after=), create
/// /inventory/{id}               get, patch, delete
/// /inventory/tags               list, create
/// /inventory/tags/{id}          get, patch, delete
/// /inventory/languages          list, create
/// /inventory/languages/{id}     get, patch, delete
/// /inventory/types              list, create
/// /inventory/types/{id}         get, patch, delete
///
/// /orders                       list (?start=&end=), create
/// /orders/{id}/deactivate       deactivate (PATCH)
/// /orders/{id}/tags             tags of one order
/// /orders/tags                  list, create
/// /orders/tags/{id}             orders carrying a tag
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/inventory", inventory::router())
        .nest("/orders", orders::router())
}
