use chrono::Utc;

use super::model::Market;
use super::schema::{CreateMarketRequest, MarketSearch, UpdateMarketRequest};
use crate::config::DbPool;
use crate::error::AppResult;
use crate::modules::common::{like_pattern, PageQuery, Paginated};

const SEARCH_FILTER: &str = r#"
    WHERE developer_id = ?
      AND (? IS NULL OR LOWER(trade) LIKE ? ESCAPE '\')
      AND (? IS NULL OR LOWER(trade_union) LIKE ? ESCAPE '\')
      AND (? IS NULL OR LOWER(taxes) LIKE ? ESCAPE '\')
"#;

pub struct MarketCrud {
    pool: DbPool,
}

impl MarketCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, developer_id: i64, req: &CreateMarketRequest) -> AppResult<Market> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO markets (developer_id, section, trade, traders, sales_per_day, taxes, trade_union, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(developer_id)
        .bind(req.section)
        .bind(req.trade.trim())
        .bind(req.traders)
        .bind(req.sales_per_day)
        .bind(req.taxes.trim())
        .bind(req.union.trim())
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        tracing::info!(
            section = req.section,
            trade = %req.trade,
            traders = req.traders,
            "market section developed"
        );

        Ok(Market {
            id: result.last_insert_rowid(),
            developer_id,
            section: req.section,
            trade: req.trade.trim().to_string(),
            traders: req.traders,
            sales_per_day: req.sales_per_day,
            taxes: req.taxes.trim().to_string(),
            trade_union: req.union.trim().to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn find(&self, developer_id: i64, id: i64) -> AppResult<Option<Market>> {
        let market = sqlx::query_as::<_, Market>("SELECT * FROM markets WHERE id = ? AND developer_id = ?")
            .bind(id)
            .bind(developer_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(market)
    }

    pub async fn list(&self, developer_id: i64, page: PageQuery) -> AppResult<Paginated<Market>> {
        self.search(developer_id, &MarketSearch::default(), page).await
    }

    /// Every supplied filter must match (case-insensitive substring).
    pub async fn search(
        &self,
        developer_id: i64,
        search: &MarketSearch,
        page: PageQuery,
    ) -> AppResult<Paginated<Market>> {
        let trade = search.trade.as_deref().map(like_pattern);
        let union = search.union.as_deref().map(like_pattern);
        let taxes = search.taxes.as_deref().map(like_pattern);

        let markets = sqlx::query_as::<_, Market>(&format!(
            "SELECT * FROM markets {} ORDER BY section, id LIMIT ? OFFSET ?",
            SEARCH_FILTER
        ))
        .bind(developer_id)
        .bind(&trade)
        .bind(&trade)
        .bind(&union)
        .bind(&union)
        .bind(&taxes)
        .bind(&taxes)
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let (total,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM markets {}", SEARCH_FILTER))
            .bind(developer_id)
            .bind(&trade)
            .bind(&trade)
            .bind(&union)
            .bind(&union)
            .bind(&taxes)
            .bind(&taxes)
            .fetch_one(&self.pool)
            .await?;

        Ok(Paginated::new(markets, page, total))
    }

    pub async fn find_by_section(&self, developer_id: i64, section: i64) -> AppResult<Vec<Market>> {
        let markets = sqlx::query_as::<_, Market>(
            "SELECT * FROM markets WHERE developer_id = ? AND section = ? ORDER BY id",
        )
        .bind(developer_id)
        .bind(section)
        .fetch_all(&self.pool)
        .await?;
        Ok(markets)
    }

    pub async fn update(
        &self,
        developer_id: i64,
        id: i64,
        req: &UpdateMarketRequest,
    ) -> AppResult<Option<Market>> {
        let result = sqlx::query(
            r#"
            UPDATE markets SET
                section = COALESCE(?, section),
                trade = COALESCE(?, trade),
                traders = COALESCE(?, traders),
                sales_per_day = COALESCE(?, sales_per_day),
                taxes = COALESCE(?, taxes),
                trade_union = COALESCE(?, trade_union),
                updated_at = ?
            WHERE id = ? AND developer_id = ?
            "#,
        )
        .bind(req.section)
        .bind(req.trade.as_deref().map(str::trim))
        .bind(req.traders)
        .bind(req.sales_per_day)
        .bind(req.taxes.as_deref().map(str::trim))
        .bind(req.union.as_deref().map(str::trim))
        .bind(Utc::now())
        .bind(id)
        .bind(developer_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find(developer_id, id).await
    }

    pub async fn delete(&self, developer_id: i64, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM markets WHERE id = ? AND developer_id = ?")
            .bind(id)
            .bind(developer_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_all(&self, developer_id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM markets WHERE developer_id = ?")
            .bind(developer_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
