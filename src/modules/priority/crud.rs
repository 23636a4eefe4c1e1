use chrono::Utc;

use super::budget::{Assessment, Verdict};
use super::model::Priority;
use super::schema::CreatePriorityRequest;
use crate::config::DbPool;
use crate::error::AppResult;
use crate::modules::common::{PageQuery, Paginated};

pub struct PriorityCrud {
    pool: DbPool,
}

impl PriorityCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: i64,
        req: &CreatePriorityRequest,
        assessment: Assessment,
    ) -> AppResult<Priority> {
        let created_at = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO priorities (user_id, essentials, extras, income, verdict, message, detail, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(req.essentials)
        .bind(req.extras)
        .bind(req.income)
        .bind(assessment.verdict.as_str())
        .bind(&assessment.message)
        .bind(&assessment.detail)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(Priority {
            id: result.last_insert_rowid(),
            user_id,
            essentials: req.essentials,
            extras: req.extras,
            income: req.income,
            verdict: assessment.verdict.as_str().to_string(),
            message: assessment.message,
            detail: assessment.detail,
            created_at,
        })
    }

    pub async fn find(&self, user_id: i64, id: i64) -> AppResult<Option<Priority>> {
        let priority =
            sqlx::query_as::<_, Priority>("SELECT * FROM priorities WHERE id = ? AND user_id = ?")
                .bind(id)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(priority)
    }

    /// Newest first; `verdict` narrows to one grade.
    pub async fn list(
        &self,
        user_id: i64,
        verdict: Option<Verdict>,
        page: PageQuery,
    ) -> AppResult<Paginated<Priority>> {
        let verdict = verdict.map(|v| v.as_str());

        let priorities = sqlx::query_as::<_, Priority>(
            r#"
            SELECT * FROM priorities
            WHERE user_id = ? AND (? IS NULL OR verdict = ?)
            ORDER BY id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(user_id)
        .bind(verdict)
        .bind(verdict)
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let (total,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM priorities WHERE user_id = ? AND (? IS NULL OR verdict = ?)",
        )
        .bind(user_id)
        .bind(verdict)
        .bind(verdict)
        .fetch_one(&self.pool)
        .await?;

        Ok(Paginated::new(priorities, page, total))
    }

    pub async fn delete(&self, user_id: i64, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM priorities WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_all(&self, user_id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM priorities WHERE user_id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
