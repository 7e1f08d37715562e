use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::AppResult;
use crate::models::color_entry::{ColorEntry, MoodRow, NewColorEntry};

/// Persistence for daily color entries.
///
/// Implementations do not enforce one entry per (user, date); readers must
/// tolerate duplicates. An unconfigured store is represented by the caller
/// holding no `EntryStore` at all, never by an implementation that returns
/// empty results.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Insert an entry and return the stored row.
    async fn insert(&self, entry: NewColorEntry) -> AppResult<ColorEntry>;

    /// Entries for `user_id`, newest date first, at most `limit` rows.
    async fn query_by_user(&self, user_id: &str, limit: i64) -> AppResult<Vec<ColorEntry>>;

    /// Entries for `user_id` with `start <= date <= end`, oldest first.
    async fn query_by_user_and_date_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<ColorEntry>>;

    /// Entries for `user_id` on `date` in the store's native order, at most `limit` rows.
    async fn query_by_user_and_date(
        &self,
        user_id: &str,
        date: NaiveDate,
        limit: i64,
    ) -> AppResult<Vec<ColorEntry>>;

    /// Mood labels of every entry on `date`, across all users.
    async fn query_moods_by_date(&self, date: NaiveDate) -> AppResult<Vec<MoodRow>>;

    async fn ping(&self) -> AppResult<()>;
}
