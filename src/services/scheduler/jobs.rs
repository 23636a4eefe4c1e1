//! Task lifecycle jobs.
//!
//! Each job is a function of the datastore and `now`. A job runs in one
//! transaction: either every selected task transitions or none does. Emails
//! are queued only after the commit, so a rolled back batch sends nothing.
//! Every update re-checks the status filter, which makes reruns and races
//! with user requests harmless.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::config::DbPool;
use crate::services::notification::{Email, NotificationDispatcher};

#[derive(Debug, FromRow)]
struct DueTask {
    id: i64,
    description: String,
    email: String,
}

/// `pending` tasks that are incomplete past their deadline become `expired`.
pub async fn expire_overdue_tasks(
    db: &DbPool,
    notifier: &NotificationDispatcher,
    now: DateTime<Utc>,
) -> Result<u64, sqlx::Error> {
    let mut tx = db.begin().await?;

    let due = sqlx::query_as::<_, DueTask>(
        r#"
        SELECT t.id, t.description, u.email
        FROM tasks t
        JOIN users u ON u.id = t.user_id
        WHERE t.deadline < ? AND t.complete = FALSE AND t.status = 'pending'
        ORDER BY t.id
        "#,
    )
    .bind(now)
    .fetch_all(&mut *tx)
    .await?;

    let mut outbox = Vec::with_capacity(due.len());
    for task in due {
        let result = sqlx::query(
            r#"
            UPDATE tasks SET status = 'expired', updated_at = ?
            WHERE id = ? AND complete = FALSE AND status = 'pending'
            "#,
        )
        .bind(now)
        .bind(task.id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() > 0 {
            outbox.push(Email::deadline_missed(&task.email, task.id, &task.description));
        }
    }

    tx.commit().await?;

    let transitioned = outbox.len() as u64;
    for email in outbox {
        notifier.enqueue(email);
    }
    Ok(transitioned)
}

/// Completed `pending` (or status-less) tasks still inside their deadline become `accomplished`.
pub async fn mark_accomplished_tasks(
    db: &DbPool,
    notifier: &NotificationDispatcher,
    now: DateTime<Utc>,
) -> Result<u64, sqlx::Error> {
    let mut tx = db.begin().await?;

    let due = sqlx::query_as::<_, DueTask>(
        r#"
        SELECT t.id, t.description, u.email
        FROM tasks t
        JOIN users u ON u.id = t.user_id
        WHERE t.deadline > ? AND t.complete = TRUE
          AND (t.status IS NULL OR t.status = 'pending')
        ORDER BY t.id
        "#,
    )
    .bind(now)
    .fetch_all(&mut *tx)
    .await?;

    let mut outbox = Vec::with_capacity(due.len());
    for task in due {
        let result = sqlx::query(
            r#"
            UPDATE tasks SET status = 'accomplished', updated_at = ?
            WHERE id = ? AND complete = TRUE AND (status IS NULL OR status = 'pending')
            "#,
        )
        .bind(now)
        .bind(task.id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() > 0 {
            outbox.push(Email::task_accomplished(&task.email, task.id, &task.description));
        }
    }

    tx.commit().await?;

    let transitioned = outbox.len() as u64;
    for email in outbox {
        notifier.enqueue(email);
    }
    Ok(transitioned)
}
