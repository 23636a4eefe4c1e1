use chrono::Utc;

use super::model::CommentView;
use super::schema::Sorting;
use crate::config::DbPool;
use crate::error::AppResult;
use crate::modules::common::{like_pattern, PageQuery, Paginated};
use crate::modules::reaction::ReactionsSummary;

fn select_comments() -> String {
    format!(
        "SELECT c.*, u.username AS username, {} FROM comments c JOIN users u ON u.id = c.user_id",
        ReactionsSummary::columns("comment_id", "c")
    )
}

pub struct CommentCrud {
    pool: DbPool,
}

impl CommentCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Inserts the comment and bumps the blog's `comments_count`; `None` when the blog is missing.
    pub async fn create(&self, user_id: i64, blog_id: i64, content: &str) -> AppResult<Option<CommentView>> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        let bumped = sqlx::query("UPDATE blogs SET comments_count = comments_count + 1 WHERE id = ?")
            .bind(blog_id)
            .execute(&mut *tx)
            .await?;
        if bumped.rows_affected() == 0 {
            return Ok(None);
        }

        let result = sqlx::query(
            r#"
            INSERT INTO comments (user_id, blog_id, content, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(blog_id)
        .bind(content)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        let comment = sqlx::query_as::<_, CommentView>(&format!("{} WHERE c.id = ?", select_comments()))
            .bind(result.last_insert_rowid())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(comment))
    }

    pub async fn find(&self, id: i64) -> AppResult<Option<CommentView>> {
        let comment = sqlx::query_as::<_, CommentView>(&format!("{} WHERE c.id = ?", select_comments()))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(comment)
    }

    pub async fn list(
        &self,
        blog_id: Option<i64>,
        page: PageQuery,
        sorting: Sorting,
    ) -> AppResult<Paginated<CommentView>> {
        let order = match sorting {
            Sorting::Recent => "c.created_at DESC, c.id DESC",
            Sorting::Popular => "c.reacts_count DESC, c.created_at DESC, c.id DESC",
        };

        let comments = sqlx::query_as::<_, CommentView>(&format!(
            "{} WHERE (? IS NULL OR c.blog_id = ?) ORDER BY {} LIMIT ? OFFSET ?",
            select_comments(),
            order
        ))
        .bind(blog_id)
        .bind(blog_id)
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let (total,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM comments WHERE (? IS NULL OR blog_id = ?)")
                .bind(blog_id)
                .bind(blog_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(Paginated::new(comments, page, total))
    }

    pub async fn search_by_username(
        &self,
        username: &str,
        page: PageQuery,
    ) -> AppResult<Paginated<CommentView>> {
        let pattern = like_pattern(username);

        let comments = sqlx::query_as::<_, CommentView>(&format!(
            r#"{} WHERE LOWER(u.username) LIKE ? ESCAPE '\' ORDER BY c.created_at DESC, c.id DESC LIMIT ? OFFSET ?"#,
            select_comments()
        ))
        .bind(&pattern)
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let (total,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM comments c JOIN users u ON u.id = c.user_id
            WHERE LOWER(u.username) LIKE ? ESCAPE '\'
            "#,
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await?;

        Ok(Paginated::new(comments, page, total))
    }

    pub async fn list_by_owner(&self, user_id: i64, page: PageQuery) -> AppResult<Paginated<CommentView>> {
        let comments = sqlx::query_as::<_, CommentView>(&format!(
            "{} WHERE c.user_id = ? ORDER BY c.created_at DESC, c.id DESC LIMIT ? OFFSET ?",
            select_comments()
        ))
        .bind(user_id)
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM comments WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(Paginated::new(comments, page, total))
    }

    pub async fn update(&self, user_id: i64, id: i64, content: Option<&str>) -> AppResult<Option<CommentView>> {
        let result = sqlx::query(
            r#"
            UPDATE comments SET content = COALESCE(?, content), updated_at = ?
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(content)
        .bind(Utc::now())
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find(id).await
    }

    /// Deletes the caller's comment and decrements its blog's counter.
    pub async fn delete(&self, user_id: i64, id: i64) -> AppResult<bool> {
        let mut tx = self.pool.begin().await?;

        let blog: Option<(i64,)> =
            sqlx::query_as("DELETE FROM comments WHERE id = ? AND user_id = ? RETURNING blog_id")
                .bind(id)
                .bind(user_id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some((blog_id,)) = blog else {
            return Ok(false);
        };

        sqlx::query("UPDATE blogs SET comments_count = MAX(comments_count - 1, 0) WHERE id = ?")
            .bind(blog_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }

    /// Removes every comment by the caller, adjusting each affected blog.
    pub async fn delete_all(&self, user_id: i64) -> AppResult<u64> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            UPDATE blogs
            SET comments_count = MAX(
                comments_count - (SELECT COUNT(*) FROM comments c WHERE c.blog_id = blogs.id AND c.user_id = ?),
                0
            )
            WHERE id IN (SELECT blog_id FROM comments WHERE user_id = ?)
            "#,
        )
        .bind(user_id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        let result = sqlx::query("DELETE FROM comments WHERE user_id = ?")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }
}
