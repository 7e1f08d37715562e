//! In-process `EntryStore` used by tests in place of Postgres.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::db::store::EntryStore;
use crate::error::{AppError, AppResult};
use crate::models::color_entry::{ColorEntry, MoodRow, NewColorEntry};

#[derive(Default)]
pub struct MemoryEntryStore {
    rows: Mutex<Vec<ColorEntry>>,
}

impl MemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a row directly, bypassing `insert`, so tests can set any date or mood.
    pub async fn push(&self, user_id: &str, date: NaiveDate, mood: Option<&str>) -> ColorEntry {
        let entry = ColorEntry {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            date,
            color_hex: "#808080".into(),
            mood: mood.map(String::from),
            mood_score: 50,
            description: None,
            created_at: Utc::now(),
        };
        self.rows.lock().await.push(entry.clone());
        entry
    }

    pub async fn len(&self) -> usize {
        self.rows.lock().await.len()
    }
}

#[async_trait]
impl EntryStore for MemoryEntryStore {
    async fn insert(&self, entry: NewColorEntry) -> AppResult<ColorEntry> {
        let stored = ColorEntry {
            id: Uuid::new_v4(),
            user_id: entry.user_id,
            date: entry.date,
            color_hex: entry.color_hex,
            mood: Some(entry.mood),
            mood_score: entry.mood_score,
            description: entry.description,
            created_at: Utc::now(),
        };
        self.rows.lock().await.push(stored.clone());
        Ok(stored)
    }

    async fn query_by_user(&self, user_id: &str, limit: i64) -> AppResult<Vec<ColorEntry>> {
        let rows = self.rows.lock().await;
        let mut entries: Vec<ColorEntry> =
            rows.iter().filter(|e| e.user_id == user_id).cloned().collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries.truncate(limit.max(0) as usize);
        Ok(entries)
    }

    async fn query_by_user_and_date_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<ColorEntry>> {
        let rows = self.rows.lock().await;
        let mut entries: Vec<ColorEntry> = rows
            .iter()
            .filter(|e| e.user_id == user_id && e.date >= start && e.date <= end)
            .cloned()
            .collect();
        entries.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(entries)
    }

    async fn query_by_user_and_date(
        &self,
        user_id: &str,
        date: NaiveDate,
        limit: i64,
    ) -> AppResult<Vec<ColorEntry>> {
        let rows = self.rows.lock().await;
        Ok(rows
            .iter()
            .filter(|e| e.user_id == user_id && e.date == date)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn query_moods_by_date(&self, date: NaiveDate) -> AppResult<Vec<MoodRow>> {
        let rows = self.rows.lock().await;
        Ok(rows
            .iter()
            .filter(|e| e.date == date)
            .map(|e| MoodRow { mood: e.mood.clone() })
            .collect())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Store whose every call fails, for exercising the degraded paths.
pub struct FailingEntryStore;

fn unreachable_store() -> AppError {
    AppError::Internal(anyhow::anyhow!("connection refused"))
}

#[async_trait]
impl EntryStore for FailingEntryStore {
    async fn insert(&self, _entry: NewColorEntry) -> AppResult<ColorEntry> {
        Err(unreachable_store())
    }

    async fn query_by_user(&self, _user_id: &str, _limit: i64) -> AppResult<Vec<ColorEntry>> {
        Err(unreachable_store())
    }

    async fn query_by_user_and_date_range(
        &self,
        _user_id: &str,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> AppResult<Vec<ColorEntry>> {
        Err(unreachable_store())
    }

    async fn query_by_user_and_date(
        &self,
        _user_id: &str,
        _date: NaiveDate,
        _limit: i64,
    ) -> AppResult<Vec<ColorEntry>> {
        Err(unreachable_store())
    }

    async fn query_moods_by_date(&self, _date: NaiveDate) -> AppResult<Vec<MoodRow>> {
        Err(unreachable_store())
    }

    async fn ping(&self) -> AppResult<()> {
        Err(unreachable_store())
    }
}
