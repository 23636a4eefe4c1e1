use chrono::Utc;

use super::model::{Share, ShareKind};
use crate::config::DbPool;
use crate::error::AppResult;
use crate::modules::common::{PageQuery, Paginated};

pub struct ShareCrud {
    pool: DbPool,
}

impl ShareCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Records the share and bumps the blog's `share_count`; `None` when the blog is missing.
    pub async fn create(
        &self,
        user_id: i64,
        blog_id: i64,
        content: &str,
        kind: Option<ShareKind>,
    ) -> AppResult<Option<Share>> {
        let mut tx = self.pool.begin().await?;

        let bumped = sqlx::query("UPDATE blogs SET share_count = share_count + 1 WHERE id = ?")
            .bind(blog_id)
            .execute(&mut *tx)
            .await?;
        if bumped.rows_affected() == 0 {
            return Ok(None);
        }

        let shared_at = Utc::now();
        let kind = kind.map(|k| k.as_str().to_string());
        let result = sqlx::query(
            "INSERT INTO shares (user_id, blog_id, content, kind, shared_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(blog_id)
        .bind(content)
        .bind(&kind)
        .bind(shared_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(Share {
            id: result.last_insert_rowid(),
            user_id,
            blog_id,
            content: content.to_string(),
            kind,
            shared_at,
        }))
    }

    pub async fn find(&self, user_id: i64, id: i64) -> AppResult<Option<Share>> {
        let share = sqlx::query_as::<_, Share>("SELECT * FROM shares WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(share)
    }

    pub async fn list(&self, user_id: i64, page: PageQuery) -> AppResult<Paginated<Share>> {
        let shares = sqlx::query_as::<_, Share>(
            "SELECT * FROM shares WHERE user_id = ? ORDER BY shared_at DESC, id DESC LIMIT ? OFFSET ?",
        )
        .bind(user_id)
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shares WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(Paginated::new(shares, page, total))
    }

    pub async fn delete(&self, user_id: i64, id: i64) -> AppResult<bool> {
        let mut tx = self.pool.begin().await?;

        let blog: Option<(i64,)> =
            sqlx::query_as("DELETE FROM shares WHERE id = ? AND user_id = ? RETURNING blog_id")
                .bind(id)
                .bind(user_id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some((blog_id,)) = blog else {
            return Ok(false);
        };

        sqlx::query("UPDATE blogs SET share_count = MAX(share_count - 1, 0) WHERE id = ?")
            .bind(blog_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }

    pub async fn delete_all(&self, user_id: i64) -> AppResult<u64> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            UPDATE blogs
            SET share_count = MAX(
                share_count - (SELECT COUNT(*) FROM shares s WHERE s.blog_id = blogs.id AND s.user_id = ?),
                0
            )
            WHERE id IN (SELECT blog_id FROM shares WHERE user_id = ?)
            "#,
        )
        .bind(user_id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        let result = sqlx::query("DELETE FROM shares WHERE user_id = ?")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }
}
