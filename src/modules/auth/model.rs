use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::services::jwt::Role;

// =============================================================================
// USER
// =============================================================================

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub age: i64,
    pub nationality: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Claims carried by this user's access and refresh tokens.
    pub fn role(&self) -> Role {
        Role::User {
            user_id: self.id,
            name: self.name.clone(),
            nationality: self.nationality.clone(),
        }
    }
}

// Insert payload; `id` and `created_at` are assigned on write
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub age: i64,
    pub nationality: String,
}
