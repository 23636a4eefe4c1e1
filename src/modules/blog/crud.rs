use chrono::Utc;

use super::model::BlogView;
use super::schema::Sorting;
use crate::config::DbPool;
use crate::error::AppResult;
use crate::modules::common::{like_pattern, PageQuery, Paginated};
use crate::modules::reaction::ReactionsSummary;

fn select_blogs() -> String {
    format!(
        "SELECT b.*, u.name AS author, {} FROM blogs b JOIN users u ON u.id = b.user_id",
        ReactionsSummary::columns("blog_id", "b")
    )
}

pub struct BlogCrud {
    pool: DbPool,
}

impl BlogCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: i64, title: &str, content: &str) -> AppResult<BlogView> {
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO blogs (user_id, title, content, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(title)
        .bind(content)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        let blog = sqlx::query_as::<_, BlogView>(&format!("{} WHERE b.id = ?", select_blogs()))
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(blog)
    }

    /// Any authenticated reader may fetch any blog.
    pub async fn find(&self, id: i64) -> AppResult<Option<BlogView>> {
        let blog = sqlx::query_as::<_, BlogView>(&format!("{} WHERE b.id = ?", select_blogs()))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(blog)
    }

    pub async fn list(&self, page: PageQuery, sorting: Sorting) -> AppResult<Paginated<BlogView>> {
        let order = match sorting {
            Sorting::Recent => "b.created_at DESC, b.id DESC",
            Sorting::Popular => {
                "(b.reacts_count + b.comments_count + b.share_count) DESC, b.created_at DESC, b.id DESC"
            }
        };

        let blogs = sqlx::query_as::<_, BlogView>(&format!(
            "{} ORDER BY {} LIMIT ? OFFSET ?",
            select_blogs(),
            order
        ))
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM blogs")
            .fetch_one(&self.pool)
            .await?;

        Ok(Paginated::new(blogs, page, total))
    }

    /// Title and author-name filters; an absent filter matches everything.
    pub async fn search(
        &self,
        title: Option<&str>,
        author: Option<&str>,
        page: PageQuery,
    ) -> AppResult<Paginated<BlogView>> {
        let title = title.map(like_pattern);
        let author = author.map(like_pattern);
        let filter = r#"
            WHERE (? IS NULL OR LOWER(b.title) LIKE ? ESCAPE '\')
              AND (? IS NULL OR LOWER(u.name) LIKE ? ESCAPE '\')
        "#;

        let blogs = sqlx::query_as::<_, BlogView>(&format!(
            "{} {} ORDER BY b.created_at DESC, b.id DESC LIMIT ? OFFSET ?",
            select_blogs(),
            filter
        ))
        .bind(&title)
        .bind(&title)
        .bind(&author)
        .bind(&author)
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let (total,): (i64,) = sqlx::query_as(&format!(
            "SELECT COUNT(*) FROM blogs b JOIN users u ON u.id = b.user_id {}",
            filter
        ))
        .bind(&title)
        .bind(&title)
        .bind(&author)
        .bind(&author)
        .fetch_one(&self.pool)
        .await?;

        Ok(Paginated::new(blogs, page, total))
    }

    pub async fn list_by_owner(&self, user_id: i64, page: PageQuery) -> AppResult<Paginated<BlogView>> {
        let blogs = sqlx::query_as::<_, BlogView>(&format!(
            "{} WHERE b.user_id = ? ORDER BY b.created_at DESC, b.id DESC LIMIT ? OFFSET ?",
            select_blogs()
        ))
        .bind(user_id)
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM blogs WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(Paginated::new(blogs, page, total))
    }

    /// Owner-scoped partial update; `None` when the caller owns no such blog.
    pub async fn update(
        &self,
        user_id: i64,
        id: i64,
        title: Option<&str>,
        content: Option<&str>,
    ) -> AppResult<Option<BlogView>> {
        let result = sqlx::query(
            r#"
            UPDATE blogs
            SET title = COALESCE(?, title), content = COALESCE(?, content), updated_at = ?
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(title)
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

    /// Comments, reactions and shares go with the blog.
    pub async fn delete(&self, user_id: i64, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_all(&self, user_id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM blogs WHERE user_id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
