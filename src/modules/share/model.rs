use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use std::str::FromStr;

use crate::error::AppError;

/// Optional mood attached to a share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareKind {
    Love,
    Angry,
    Laugh,
    Wow,
    Sad,
}

impl ShareKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Love => "love",
            Self::Angry => "angry",
            Self::Laugh => "laugh",
            Self::Wow => "wow",
            Self::Sad => "sad",
        }
    }
}

impl FromStr for ShareKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "love" => Ok(Self::Love),
            "angry" => Ok(Self::Angry),
            "laugh" => Ok(Self::Laugh),
            "wow" => Ok(Self::Wow),
            "sad" => Ok(Self::Sad),
            _ => Err(AppError::Validation(format!(
                "invalid share kind '{}', expected one of love, angry, laugh, wow, sad",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Share {
    pub id: i64,
    pub user_id: i64,
    pub blog_id: i64,
    pub content: String,
    pub kind: Option<String>,
    pub shared_at: DateTime<Utc>,
}
