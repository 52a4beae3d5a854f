//! Repository for the `user_profiles` table.
//!
//! Accounts are created and looked up here; authentication itself is not
//! this service's concern.

use mediavault_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUserProfile, UserProfile};

const COLUMNS: &str = "id, email, username, first_name, last_name, avatar, \
    date_joined, last_login, is_active, is_staff, is_superuser, is_admin";

/// Error cases for account creation.
#[derive(Debug, thiserror::Error)]
pub enum CreateUserError {
    #[error("Users must have an email address")]
    MissingEmail,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Provides account creation and lookup for user profiles.
pub struct UserRepo;

impl UserRepo {
    /// Create a regular account. The email is normalized before insert and
    /// `date_joined` is stamped by the database.
    ///
    /// Fails with [`CreateUserError::MissingEmail`] on an empty email; a
    /// duplicate email surfaces as a unique-constraint database error.
    pub async fn create(
        pool: &PgPool,
        input: &CreateUserProfile,
    ) -> Result<UserProfile, CreateUserError> {
        Self::create_with_flags(pool, input, false, false, false).await
    }

    /// Create an account with staff, superuser, and admin flags set.
    pub async fn create_superuser(
        pool: &PgPool,
        input: &CreateUserProfile,
    ) -> Result<UserProfile, CreateUserError> {
        Self::create_with_flags(pool, input, true, true, true).await
    }

    async fn create_with_flags(
        pool: &PgPool,
        input: &CreateUserProfile,
        is_staff: bool,
        is_superuser: bool,
        is_admin: bool,
    ) -> Result<UserProfile, CreateUserError> {
        let email = normalize_email(&input.email).ok_or(CreateUserError::MissingEmail)?;

        let query = format!(
            "INSERT INTO user_profiles \
                 (email, username, first_name, last_name, avatar, \
                  is_staff, is_superuser, is_admin) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, UserProfile>(&query)
            .bind(&email)
            .bind(&input.username)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.avatar)
            .bind(is_staff)
            .bind(is_superuser)
            .bind(is_admin)
            .fetch_one(pool)
            .await?;

        tracing::info!(user_id = user.id, email = %user.email, "User profile created");

        Ok(user)
    }

    /// Find a profile by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<UserProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_profiles WHERE id = $1");
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a profile by its normalized email (the login key).
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<UserProfile>, sqlx::Error> {
        let Some(email) = normalize_email(email) else {
            return Ok(None);
        };
        let query = format!("SELECT {COLUMNS} FROM user_profiles WHERE email = $1");
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(&email)
            .fetch_optional(pool)
            .await
    }

    /// Record a login time for a profile. Returns `true` if a row matched.
    pub async fn touch_last_login(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE user_profiles SET last_login = NOW() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Normalize an email address: trim whitespace and lowercase the domain
/// part. Returns `None` for an empty address.
fn normalize_email(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.rsplit_once('@') {
        Some((local, domain)) => Some(format!("{local}@{}", domain.to_lowercase())),
        None => Some(trimmed.to_string()),
    }
}
