//! Integration tests for account creation and lookup.

use assert_matches::assert_matches;
use mediavault_db::models::user::CreateUserProfile;
use mediavault_db::repositories::user_repo::CreateUserError;
use mediavault_db::repositories::UserRepo;
use sqlx::PgPool;

fn new_profile(email: &str) -> CreateUserProfile {
    CreateUserProfile {
        email: email.to_string(),
        username: "ops".to_string(),
        first_name: "Avery".to_string(),
        last_name: "Quinn".to_string(),
        avatar: None,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_normalizes_email_domain(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_profile("Avery.Quinn@Example.COM"))
        .await
        .unwrap();

    assert_eq!(user.email, "Avery.Quinn@example.com");
    assert_eq!(user.full_name(), "Avery Quinn");
    assert!(user.is_active);
    assert!(!user.is_staff);
    assert!(!user.is_superuser);
    assert!(!user.is_admin);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_rejects_empty_email(pool: PgPool) {
    let result = UserRepo::create(&pool, &new_profile("  ")).await;
    assert_matches!(result, Err(CreateUserError::MissingEmail));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_email_violates_unique_constraint(pool: PgPool) {
    UserRepo::create(&pool, &new_profile("avery@example.com"))
        .await
        .unwrap();

    let result = UserRepo::create(&pool, &new_profile("avery@example.com")).await;
    assert_matches!(result, Err(CreateUserError::Database(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_superuser_forces_flags(pool: PgPool) {
    let user = UserRepo::create_superuser(&pool, &new_profile("root@example.com"))
        .await
        .unwrap();

    assert!(user.is_staff);
    assert!(user.is_superuser);
    assert!(user.is_admin);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_lookup_by_email_is_case_tolerant_in_domain(pool: PgPool) {
    let created = UserRepo::create(&pool, &new_profile("avery@example.com"))
        .await
        .unwrap();

    let found = UserRepo::find_by_email(&pool, "avery@EXAMPLE.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, created.id);

    assert!(UserRepo::find_by_email(&pool, "nobody@example.com")
        .await
        .unwrap()
        .is_none());

    let touched = UserRepo::touch_last_login(&pool, created.id).await.unwrap();
    assert!(touched);
    let refreshed = UserRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert!(refreshed.last_login.is_some());
}
