use chrono::Utc;

use super::model::Expense;
use super::planner::SpendingPlan;
use super::schema::CreateExpenseRequest;
use crate::config::DbPool;
use crate::error::AppResult;
use crate::modules::common::{PageQuery, Paginated};

pub struct ExpenseCrud {
    pool: DbPool,
}

impl ExpenseCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: i64,
        req: &CreateExpenseRequest,
        plan: SpendingPlan,
    ) -> AppResult<Expense> {
        let created_at = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO expenses (user_id, income, days_until_next_income, savings_percentage,
                                  feasible_budget, savings_budget, summary, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(req.income)
        .bind(req.days_until_next_income)
        .bind(req.savings_percentage)
        .bind(plan.feasible_budget)
        .bind(plan.savings_budget)
        .bind(&plan.summary)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(Expense {
            id: result.last_insert_rowid(),
            user_id,
            income: req.income,
            days_until_next_income: req.days_until_next_income,
            savings_percentage: req.savings_percentage,
            feasible_budget: plan.feasible_budget,
            savings_budget: plan.savings_budget,
            summary: plan.summary,
            created_at,
        })
    }

    pub async fn find(&self, user_id: i64, id: i64) -> AppResult<Option<Expense>> {
        let expense =
            sqlx::query_as::<_, Expense>("SELECT * FROM expenses WHERE id = ? AND user_id = ?")
                .bind(id)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(expense)
    }

    pub async fn list(&self, user_id: i64, page: PageQuery) -> AppResult<Paginated<Expense>> {
        let expenses = sqlx::query_as::<_, Expense>(
            "SELECT * FROM expenses WHERE user_id = ? ORDER BY id DESC LIMIT ? OFFSET ?",
        )
        .bind(user_id)
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM expenses WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(Paginated::new(expenses, page, total))
    }

    pub async fn delete(&self, user_id: i64, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_all(&self, user_id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM expenses WHERE user_id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
