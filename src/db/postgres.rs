use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::store::EntryStore;
use crate::error::AppResult;
use crate::models::color_entry::{ColorEntry, MoodRow, NewColorEntry};

#[derive(Clone)]
pub struct PgEntryStore {
    db: PgPool,
}

impl PgEntryStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntryStore for PgEntryStore {
    async fn insert(&self, entry: NewColorEntry) -> AppResult<ColorEntry> {
        let stored = sqlx::query_as::<_, ColorEntry>(
            r#"
            INSERT INTO daily_colors (id, user_id, date, color_hex, mood, mood_score, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&entry.user_id)
        .bind(entry.date)
        .bind(&entry.color_hex)
        .bind(&entry.mood)
        .bind(entry.mood_score)
        .bind(&entry.description)
        .fetch_one(&self.db)
        .await?;

        Ok(stored)
    }

    async fn query_by_user(&self, user_id: &str, limit: i64) -> AppResult<Vec<ColorEntry>> {
        let entries = sqlx::query_as::<_, ColorEntry>(
            r#"
            SELECT * FROM daily_colors
            WHERE user_id = $1
            ORDER BY date DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        Ok(entries)
    }

    async fn query_by_user_and_date_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<ColorEntry>> {
        let entries = sqlx::query_as::<_, ColorEntry>(
            r#"
            SELECT * FROM daily_colors
            WHERE user_id = $1 AND date BETWEEN $2 AND $3
            ORDER BY date ASC
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.db)
        .await?;

        Ok(entries)
    }

    async fn query_by_user_and_date(
        &self,
        user_id: &str,
        date: NaiveDate,
        limit: i64,
    ) -> AppResult<Vec<ColorEntry>> {
        let entries = sqlx::query_as::<_, ColorEntry>(
            "SELECT * FROM daily_colors WHERE user_id = $1 AND date = $2 LIMIT $3",
        )
        .bind(user_id)
        .bind(date)
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        Ok(entries)
    }

    async fn query_moods_by_date(&self, date: NaiveDate) -> AppResult<Vec<MoodRow>> {
        let rows = sqlx::query_as::<_, MoodRow>("SELECT mood FROM daily_colors WHERE date = $1")
            .bind(date)
            .fetch_all(&self.db)
            .await?;

        Ok(rows)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.db)
            .await?;
        Ok(())
    }
}
