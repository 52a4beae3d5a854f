//! Integration tests for the order repositories.
//!
//! - Order create with tag links
//! - The contained-window date filter
//! - Unconditional deactivation
//! - Tag lookups in both directions (tags of an order, orders by tag)

use chrono::{Duration, NaiveDate, Utc};
use mediavault_db::models::inventory::CreateInventory;
use mediavault_db::models::inventory_language::CreateInventoryLanguage;
use mediavault_db::models::inventory_type::CreateInventoryType;
use mediavault_db::models::order::CreateOrder;
use mediavault_db::models::order_tag::CreateOrderTag;
use mediavault_db::repositories::{
    InventoryLanguageRepo, InventoryRepo, InventoryTypeRepo, OrderRepo, OrderTagRepo,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_inventory(pool: &PgPool) -> i64 {
    let kind = InventoryTypeRepo::create(
        pool,
        &CreateInventoryType {
            name: "Movie".to_string(),
        },
    )
    .await
    .unwrap();
    let language = InventoryLanguageRepo::create(
        pool,
        &CreateInventoryLanguage {
            name: "English".to_string(),
        },
    )
    .await
    .unwrap();
    let inventory = InventoryRepo::create(
        pool,
        &CreateInventory {
            name: "The Matrix".to_string(),
            type_id: kind.id,
            language_id: language.id,
            metadata: json!({
                "year": 1999,
                "actors": ["Keanu Reeves"],
                "imdb_rating": 8.7,
                "rotten_tomatoes_rating": 87,
            }),
            tag_ids: vec![],
        },
    )
    .await
    .unwrap();
    inventory.id
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn new_order(inventory_id: i64, start: NaiveDate, embargo: NaiveDate, tag_ids: Vec<i64>) -> CreateOrder {
    CreateOrder {
        inventory_id,
        start_date: start,
        embargo_date: embargo,
        is_active: None,
        tag_ids,
    }
}

// ---------------------------------------------------------------------------
// Create / list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_order_with_tags(pool: PgPool) {
    let inventory_id = seed_inventory(&pool).await;
    let tag = OrderTagRepo::create(
        &pool,
        &CreateOrderTag {
            name: "San Antonio".to_string(),
            is_active: Some(true),
        },
    )
    .await
    .unwrap();

    let order = OrderRepo::create(
        &pool,
        &new_order(inventory_id, today(), today() + Duration::days(5), vec![tag.id]),
    )
    .await
    .unwrap();

    assert!(order.is_active);
    assert_eq!(order.inventory_id, inventory_id);
    assert_eq!(order.tags, vec![tag.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_window_filter_keeps_contained_orders_only(pool: PgPool) {
    let inventory_id = seed_inventory(&pool).await;

    // Contained in [today, today+7].
    let inside = OrderRepo::create(
        &pool,
        &new_order(inventory_id, today(), today() + Duration::days(5), vec![]),
    )
    .await
    .unwrap();
    // Embargo falls outside the window.
    OrderRepo::create(
        &pool,
        &new_order(inventory_id, today(), today() + Duration::days(10), vec![]),
    )
    .await
    .unwrap();
    // Starts before the window.
    OrderRepo::create(
        &pool,
        &new_order(
            inventory_id,
            today() - Duration::days(1),
            today() + Duration::days(5),
            vec![],
        ),
    )
    .await
    .unwrap();

    let window = Some((today(), today() + Duration::days(7)));
    let matched = OrderRepo::list(&pool, window).await.unwrap();

    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, inside.id);

    let all = OrderRepo::list(&pool, None).await.unwrap();
    assert_eq!(all.len(), 3);
}

// ---------------------------------------------------------------------------
// Deactivation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deactivate_is_idempotent(pool: PgPool) {
    let inventory_id = seed_inventory(&pool).await;
    let order = OrderRepo::create(
        &pool,
        &new_order(inventory_id, today(), today() + Duration::days(5), vec![]),
    )
    .await
    .unwrap();

    assert!(OrderRepo::deactivate(&pool, order.id).await.unwrap());
    // Second call still reports the row as updated.
    assert!(OrderRepo::deactivate(&pool, order.id).await.unwrap());

    let fetched = OrderRepo::find_by_id(&pool, order.id).await.unwrap().unwrap();
    assert!(!fetched.is_active);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deactivate_missing_order_reports_no_match(pool: PgPool) {
    assert!(!OrderRepo::deactivate(&pool, 999_999).await.unwrap());
}

// ---------------------------------------------------------------------------
// Tag lookups
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_tags_of_an_order_and_orders_by_tag(pool: PgPool) {
    let inventory_id = seed_inventory(&pool).await;
    let tag = OrderTagRepo::create(
        &pool,
        &CreateOrderTag {
            name: "San Antonio".to_string(),
            is_active: Some(true),
        },
    )
    .await
    .unwrap();

    let first = OrderRepo::create(
        &pool,
        &new_order(inventory_id, today(), today() + Duration::days(5), vec![tag.id]),
    )
    .await
    .unwrap();
    let second = OrderRepo::create(
        &pool,
        &new_order(inventory_id, today(), today() + Duration::days(10), vec![tag.id]),
    )
    .await
    .unwrap();
    // An untagged order must not show up in the by-tag listing.
    OrderRepo::create(
        &pool,
        &new_order(inventory_id, today(), today() + Duration::days(3), vec![]),
    )
    .await
    .unwrap();

    let tags = OrderRepo::tags(&pool, first.id).await.unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].name, "San Antonio");

    let orders = OrderRepo::list_by_tag(&pool, tag.id).await.unwrap();
    assert_eq!(
        orders.iter().map(|o| o.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_inventory_cascades_to_orders(pool: PgPool) {
    let inventory_id = seed_inventory(&pool).await;
    let order = OrderRepo::create(
        &pool,
        &new_order(inventory_id, today(), today() + Duration::days(5), vec![]),
    )
    .await
    .unwrap();

    assert!(InventoryRepo::delete(&pool, inventory_id).await.unwrap());
    assert!(OrderRepo::find_by_id(&pool, order.id).await.unwrap().is_none());
}
