use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;

use crate::error::AppError;

/// Fixed set of reactions a user can leave on a blog or comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Love,
    Angry,
    Laugh,
    Wow,
    Sad,
}

impl ReactionKind {
    pub const ALL: [ReactionKind; 6] = [
        Self::Like,
        Self::Love,
        Self::Angry,
        Self::Laugh,
        Self::Wow,
        Self::Sad,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Love => "love",
            Self::Angry => "angry",
            Self::Laugh => "laugh",
            Self::Wow => "wow",
            Self::Sad => "sad",
        }
    }
}

impl FromStr for ReactionKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "invalid reaction '{}', expected one of like, love, angry, laugh, wow, sad",
                    s
                ))
            })
    }
}

/// Which row a reaction points at. Exactly one per reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionTarget {
    Blog(i64),
    Comment(i64),
}

impl ReactionTarget {
    pub fn from_ids(blog_id: Option<i64>, comment_id: Option<i64>) -> Result<Self, AppError> {
        match (blog_id, comment_id) {
            (Some(id), None) => Ok(Self::Blog(id)),
            (None, Some(id)) => Ok(Self::Comment(id)),
            _ => Err(AppError::Validation(
                "exactly one of blog_id or comment_id is required".to_string(),
            )),
        }
    }

    /// Table holding the target and its denormalised `reacts_count`.
    pub fn table(&self) -> &'static str {
        match self {
            Self::Blog(_) => "blogs",
            Self::Comment(_) => "comments",
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            Self::Blog(_) => "blog_id",
            Self::Comment(_) => "comment_id",
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Self::Blog(id) | Self::Comment(id) => *id,
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reaction {
    pub id: i64,
    pub user_id: i64,
    pub blog_id: Option<i64>,
    pub comment_id: Option<i64>,
    pub kind: String,
    pub reacted_at: DateTime<Utc>,
}

impl Reaction {
    pub fn target(&self) -> Result<ReactionTarget, AppError> {
        ReactionTarget::from_ids(self.blog_id, self.comment_id)
            .map_err(|_| AppError::Internal(format!("reaction {} has no single target", self.id)))
    }
}

/// Per-kind counts; every kind is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromRow, Serialize)]
pub struct ReactionsSummary {
    #[sqlx(rename = "react_like")]
    pub like: i64,
    #[sqlx(rename = "react_love")]
    pub love: i64,
    #[sqlx(rename = "react_angry")]
    pub angry: i64,
    #[sqlx(rename = "react_laugh")]
    pub laugh: i64,
    #[sqlx(rename = "react_wow")]
    pub wow: i64,
    #[sqlx(rename = "react_sad")]
    pub sad: i64,
}

impl ReactionsSummary {
    /// Select-list fragment producing the summary columns for rows of `alias`.
    pub fn columns(target_column: &str, alias: &str) -> String {
        ReactionKind::ALL
            .iter()
            .map(|kind| {
                format!(
                    "(SELECT COUNT(*) FROM reactions r WHERE r.{col} = {alias}.id AND r.kind = '{kind}') AS react_{kind}",
                    col = target_column,
                    alias = alias,
                    kind = kind.as_str()
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn total(&self) -> i64 {
        self.like + self.love + self.angry + self.laugh + self.wow + self.sad
    }
}
