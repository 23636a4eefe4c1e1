use chrono::Utc;

use super::model::{NewUser, User};
use crate::config::DbPool;
use crate::error::{AppError, AppResult};
use crate::services::hashing;

pub struct UserCrud {
    pool: DbPool,
}

impl UserCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Inserts the account; a taken username or email is a `Conflict`.
    pub async fn create(&self, user: NewUser) -> AppResult<User> {
        let created_at = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO users (username, email, password_hash, name, age, nationality, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.name)
        .bind(user.age)
        .bind(&user.nationality)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::on_duplicate(e, "username or email already registered"))?;

        Ok(User {
            id: result.last_insert_rowid(),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            name: user.name,
            age: user.age,
            nationality: user.nationality,
            created_at,
        })
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    /// Returns the user only when the password matches.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<User> {
        let user = self
            .find_by_username(username.trim())
            .await?
            .ok_or_else(invalid_credentials)?;

        if !hashing::verify_password(password, &user.password_hash) {
            return Err(invalid_credentials());
        }

        Ok(user)
    }
}

fn invalid_credentials() -> AppError {
    AppError::Unauthenticated("incorrect username or password".to_string())
}
