//! User profile model and DTOs.
//!
//! Accounts are identified by email. This entity backs account creation and
//! lookup only; authentication itself lives outside this service.

use mediavault_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `user_profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserProfile {
    pub id: DbId,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Storage reference for the avatar image, if one was uploaded.
    pub avatar: Option<String>,
    pub date_joined: Timestamp,
    pub last_login: Option<Timestamp>,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub is_admin: bool,
}

/// DTO for creating a user profile. The repository normalizes `email`
/// before insert; `date_joined` is stamped server-side.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserProfile {
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub avatar: Option<String>,
}

impl UserProfile {
    /// First and last name joined, trimmed when either is empty.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
