use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ColorEntry {
    pub id: Uuid,
    pub user_id: String,
    pub date: NaiveDate,
    pub color_hex: String,
    pub mood: Option<String>,
    pub mood_score: i32,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for `daily_colors`; `id` and `created_at` are assigned on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewColorEntry {
    pub user_id: String,
    pub date: NaiveDate,
    pub color_hex: String,
    pub mood: String,
    pub mood_score: i32,
    pub description: Option<String>,
}

/// Label-only projection used for cross-user aggregation. Never carries `user_id`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MoodRow {
    pub mood: Option<String>,
}
