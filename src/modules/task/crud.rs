use chrono::{DateTime, Duration, Utc};

use super::model::{CompletionOutcome, Task, TaskStatus};
use super::schema::TaskFilter;
use crate::config::DbPool;
use crate::error::AppResult;
use crate::modules::common::{like_pattern, PageQuery, Paginated};

pub struct TaskCrud {
    pool: DbPool,
}

impl TaskCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Creates a pending task whose deadline is fixed `days` from `now`.
    pub async fn create(
        &self,
        user_id: i64,
        description: &str,
        days: i64,
        now: DateTime<Utc>,
    ) -> AppResult<Task> {
        let deadline = now + Duration::days(days);

        let result = sqlx::query(
            r#"
            INSERT INTO tasks (user_id, description, days_to_execution, deadline, complete, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, FALSE, 'pending', ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(description)
        .bind(days)
        .bind(deadline)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Task {
            id: result.last_insert_rowid(),
            user_id,
            description: description.to_string(),
            days_to_execution: days,
            deadline,
            complete: false,
            status: Some(TaskStatus::Pending.as_str().to_string()),
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn find(&self, user_id: i64, id: i64) -> AppResult<Option<Task>> {
        let task = sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(task)
    }

    pub async fn list(
        &self,
        user_id: i64,
        filter: &TaskFilter,
        page: PageQuery,
    ) -> AppResult<Paginated<Task>> {
        let status = filter.status.map(|s| s.as_str());

        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT * FROM tasks
            WHERE user_id = ?
              AND (? IS NULL OR complete = ?)
              AND (? IS NULL OR status = ?)
            ORDER BY created_at DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(user_id)
        .bind(filter.complete)
        .bind(filter.complete)
        .bind(status)
        .bind(status)
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let (total,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM tasks
            WHERE user_id = ?
              AND (? IS NULL OR complete = ?)
              AND (? IS NULL OR status = ?)
            "#,
        )
        .bind(user_id)
        .bind(filter.complete)
        .bind(filter.complete)
        .bind(status)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(Paginated::new(tasks, page, total))
    }

    pub async fn search(
        &self,
        user_id: i64,
        description: &str,
        page: PageQuery,
    ) -> AppResult<Paginated<Task>> {
        let pattern = like_pattern(description);

        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT * FROM tasks
            WHERE user_id = ? AND LOWER(description) LIKE ? ESCAPE '\'
            ORDER BY created_at DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(user_id)
        .bind(&pattern)
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let (total,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM tasks
            WHERE user_id = ? AND LOWER(description) LIKE ? ESCAPE '\'
            "#,
        )
        .bind(user_id)
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await?;

        Ok(Paginated::new(tasks, page, total))
    }

    /// Applies the supplied fields; `None` when the task does not exist for this owner.
    pub async fn update(
        &self,
        user_id: i64,
        id: i64,
        description: Option<&str>,
    ) -> AppResult<Option<Task>> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET description = COALESCE(?, description), updated_at = ?
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(description)
        .bind(Utc::now())
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find(user_id, id).await
    }

    /// Marks a pending, not yet overdue task complete. The scheduler later
    /// moves it to `accomplished`.
    pub async fn complete(&self, user_id: i64, id: i64, now: DateTime<Utc>) -> AppResult<CompletionOutcome> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET complete = TRUE, updated_at = ?
            WHERE id = ? AND user_id = ?
              AND (status IS NULL OR status = 'pending')
              AND deadline > ?
            "#,
        )
        .bind(now)
        .bind(id)
        .bind(user_id)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let task = match self.find(user_id, id).await? {
            Some(task) => task,
            None => return Ok(CompletionOutcome::NotFound),
        };

        if result.rows_affected() == 0 {
            Ok(CompletionOutcome::NotEligible(task))
        } else {
            Ok(CompletionOutcome::Completed(task))
        }
    }

    pub async fn delete(&self, user_id: i64, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_all(&self, user_id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM tasks WHERE user_id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
