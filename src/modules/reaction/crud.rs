use chrono::Utc;

use super::model::{Reaction, ReactionKind, ReactionTarget, ReactionsSummary};
use crate::config::DbPool;
use crate::error::AppResult;

/// Outcome of an upsert; `None` when the target does not exist.
pub type UpsertOutcome = Option<(Reaction, bool)>;

pub struct ReactionCrud {
    pool: DbPool,
}

impl ReactionCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// One reaction per (user, target). Re-reacting only changes the kind;
    /// the target's `reacts_count` moves on first insert only.
    pub async fn upsert(
        &self,
        user_id: i64,
        target: ReactionTarget,
        kind: ReactionKind,
    ) -> AppResult<UpsertOutcome> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        // writing first takes the write lock before any read snapshot exists
        let inserted = sqlx::query(&format!(
            r#"
            INSERT INTO reactions (user_id, {column}, kind, reacted_at)
            SELECT ?, ?, ?, ? WHERE EXISTS (SELECT 1 FROM {table} WHERE id = ?)
            ON CONFLICT DO NOTHING
            "#,
            column = target.column(),
            table = target.table()
        ))
        .bind(user_id)
        .bind(target.id())
        .bind(kind.as_str())
        .bind(now)
        .bind(target.id())
        .execute(&mut *tx)
        .await?;

        let (reaction_id, created) = if inserted.rows_affected() > 0 {
            sqlx::query(&format!(
                "UPDATE {} SET reacts_count = reacts_count + 1 WHERE id = ?",
                target.table()
            ))
            .bind(target.id())
            .execute(&mut *tx)
            .await?;

            (inserted.last_insert_rowid(), true)
        } else {
            let existing: Option<(i64,)> = sqlx::query_as(&format!(
                "UPDATE reactions SET kind = ?, reacted_at = ? WHERE user_id = ? AND {} = ? RETURNING id",
                target.column()
            ))
            .bind(kind.as_str())
            .bind(now)
            .bind(user_id)
            .bind(target.id())
            .fetch_optional(&mut *tx)
            .await?;

            match existing {
                Some((id,)) => (id, false),
                None => return Ok(None),
            }
        };

        let reaction = sqlx::query_as::<_, Reaction>("SELECT * FROM reactions WHERE id = ?")
            .bind(reaction_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some((reaction, created)))
    }

    /// Per-kind counts for the target; `None` when it does not exist.
    pub async fn summary(&self, target: ReactionTarget) -> AppResult<Option<ReactionsSummary>> {
        let sql = format!(
            "SELECT {} FROM {} t WHERE t.id = ?",
            ReactionsSummary::columns(target.column(), "t"),
            target.table()
        );

        let summary = sqlx::query_as::<_, ReactionsSummary>(&sql)
            .bind(target.id())
            .fetch_optional(&self.pool)
            .await?;
        Ok(summary)
    }

    /// Removes the caller's reaction and decrements the target's counter.
    pub async fn delete(&self, user_id: i64, id: i64) -> AppResult<bool> {
        let mut tx = self.pool.begin().await?;

        let reaction = sqlx::query_as::<_, Reaction>(
            "DELETE FROM reactions WHERE id = ? AND user_id = ? RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(reaction) = reaction else {
            return Ok(false);
        };
        let target = reaction.target()?;

        sqlx::query(&format!(
            "UPDATE {} SET reacts_count = MAX(reacts_count - 1, 0) WHERE id = ?",
            target.table()
        ))
        .bind(target.id())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }
}
