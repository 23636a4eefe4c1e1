use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppResult;

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Failure,
}

/// `{status, message, data}` wrapper shared by every resource endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn done(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data: None,
        }
    }

    /// Soft failure: a missing row on read, update or delete.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Failure,
            message: message.into(),
            data: None,
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

pub const MAX_PAGE_LIMIT: i64 = 100;

/// Highest page whose offset still fits in an `i64` at the largest limit.
pub const MAX_PAGE: i64 = i64::MAX / MAX_PAGE_LIMIT;

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

// Query parameters accepted by every list endpoint
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    #[validate(range(min = 1, max = MAX_PAGE, message = "page is out of range"))]
    pub page: i64,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = MAX_PAGE_LIMIT, message = "limit must be between 1 and 100"))]
    pub limit: i64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl PageQuery {
    /// Validated copy; rejects out-of-range paging before any query runs.
    pub fn checked(self) -> AppResult<Self> {
        self.validate()?;
        Ok(self)
    }

    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.limit).max(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
}

#[derive(Debug, Serialize)]
pub struct Paginated<T: Serialize> {
    pub items: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T: Serialize> Paginated<T> {
    pub fn new(items: Vec<T>, page: PageQuery, total: i64) -> Self {
        Self {
            items,
            pagination: PaginationMeta {
                page: page.page,
                limit: page.limit,
                total,
            },
        }
    }
}

/// Wraps a search term for a case-insensitive `LIKE` match.
pub fn like_pattern(term: &str) -> String {
    let escaped = term
        .trim()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped.to_lowercase())
}
