use chrono::Utc;

use super::model::{Developer, Mathematician};
use crate::config::DbPool;
use crate::error::{AppError, AppResult};
use crate::services::hashing;

pub struct IdentityCrud {
    pool: DbPool,
}

impl IdentityCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    // MATHEMATICIANS
    // =========================================================================

    pub async fn create_mathematician(&self, name: &str, secret: &str) -> AppResult<Mathematician> {
        let secret_hash = hashing::hash_secret(secret)?;
        let created_at = Utc::now();

        let result = sqlx::query(
            "INSERT INTO mathematicians (name, secret_hash, created_at) VALUES (?, ?, ?)",
        )
        .bind(name)
        .bind(&secret_hash)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::on_duplicate(e, "mathematician already registered"))?;

        Ok(Mathematician {
            id: result.last_insert_rowid(),
            name: name.to_string(),
            secret_hash,
            created_at,
        })
    }

    pub async fn authenticate_mathematician(&self, name: &str, secret: &str) -> AppResult<Mathematician> {
        let found = sqlx::query_as::<_, Mathematician>("SELECT * FROM mathematicians WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        match found {
            Some(m) if hashing::verify_secret(secret, &m.secret_hash) => Ok(m),
            _ => Err(AppError::Unauthenticated("incorrect name or secret".to_string())),
        }
    }

    // =========================================================================
    // DEVELOPERS
    // =========================================================================

    pub async fn create_developer(&self, name: &str, code: u32) -> AppResult<Developer> {
        let code_hash = hashing::hash_code(code)?;
        let created_at = Utc::now();

        let result = sqlx::query(
            "INSERT INTO developers (name, code_hash, created_at) VALUES (?, ?, ?)",
        )
        .bind(name)
        .bind(&code_hash)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::on_duplicate(e, "developer already registered"))?;

        Ok(Developer {
            id: result.last_insert_rowid(),
            name: name.to_string(),
            code_hash,
            created_at,
        })
    }

    pub async fn authenticate_developer(&self, name: &str, code: u32) -> AppResult<Developer> {
        let found = sqlx::query_as::<_, Developer>("SELECT * FROM developers WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        match found {
            Some(d) if hashing::verify_code(code, &d.code_hash) => Ok(d),
            _ => Err(AppError::Unauthenticated("incorrect name or code".to_string())),
        }
    }
}
