use chrono::Utc;

use super::model::Calculation;
use super::operation::Operation;
use crate::config::DbPool;
use crate::error::AppResult;
use crate::modules::common::{PageQuery, Paginated};

pub struct CalculationCrud {
    pool: DbPool,
}

impl CalculationCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        mathematician_id: i64,
        operation: Operation,
        numbers: &str,
        result: f64,
    ) -> AppResult<Calculation> {
        let created_at = Utc::now();

        let inserted = sqlx::query(
            r#"
            INSERT INTO calculations (mathematician_id, operation, numbers, result, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(mathematician_id)
        .bind(operation.as_str())
        .bind(numbers)
        .bind(result)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(Calculation {
            id: inserted.last_insert_rowid(),
            mathematician_id,
            operation: operation.as_str().to_string(),
            numbers: numbers.to_string(),
            result,
            created_at,
        })
    }

    pub async fn find(&self, mathematician_id: i64, id: i64) -> AppResult<Option<Calculation>> {
        let calculation = sqlx::query_as::<_, Calculation>(
            "SELECT * FROM calculations WHERE id = ? AND mathematician_id = ?",
        )
        .bind(id)
        .bind(mathematician_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(calculation)
    }

    /// Owner's calculations, newest first, optionally narrowed to one operation.
    pub async fn list(
        &self,
        mathematician_id: i64,
        operation: Option<Operation>,
        page: PageQuery,
    ) -> AppResult<Paginated<Calculation>> {
        let operation = operation.map(|op| op.as_str());

        let calculations = sqlx::query_as::<_, Calculation>(
            r#"
            SELECT * FROM calculations
            WHERE mathematician_id = ? AND (? IS NULL OR operation = ?)
            ORDER BY created_at DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(mathematician_id)
        .bind(operation)
        .bind(operation)
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let (total,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM calculations WHERE mathematician_id = ? AND (? IS NULL OR operation = ?)",
        )
        .bind(mathematician_id)
        .bind(operation)
        .bind(operation)
        .fetch_one(&self.pool)
        .await?;

        Ok(Paginated::new(calculations, page, total))
    }

    pub async fn delete(&self, mathematician_id: i64, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM calculations WHERE id = ? AND mathematician_id = ?")
            .bind(id)
            .bind(mathematician_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_all(&self, mathematician_id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM calculations WHERE mathematician_id = ?")
            .bind(mathematician_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
