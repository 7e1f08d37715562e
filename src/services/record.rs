//! Save-on-analysis and read/report operations over the optional entry store.
//!
//! Every operation here degrades instead of failing: an unconfigured store
//! makes reads empty and the save a no-op, and store errors are logged at the
//! call site. Only [`RecordService::record_analysis`] and
//! [`RecordService::community_mood_today`] report failures, as tagged values.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::db::store::EntryStore;
use crate::models::analysis::AnalysisResult;
use crate::models::color_entry::{ColorEntry, NewColorEntry};
use crate::services::color;
use crate::services::mood_stats::{self, MoodStatistics, DEFAULT_MOOD};

pub const DEFAULT_RECENT_LIMIT: i64 = 30;
pub const DEFAULT_STATS_DAYS: i64 = 30;

/// Result of the best-effort persistence step that follows an analysis.
#[derive(Debug, Clone)]
pub enum PersistOutcome {
    Saved(ColorEntry),
    /// No store is configured; nothing was attempted.
    Skipped,
    Failed(String),
}

/// Tagged result for reads that must distinguish "no data" from "could not read".
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Outcome<T> {
    Success(T),
    Failure { error: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommunityMood {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub stats: MoodStatistics,
}

#[derive(Clone)]
pub struct RecordService {
    store: Option<Arc<dyn EntryStore>>,
}

impl RecordService {
    pub fn new(store: Option<Arc<dyn EntryStore>>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> Option<&Arc<dyn EntryStore>> {
        self.store.as_ref()
    }

    pub async fn record_analysis(&self, user_id: &str, analysis: &AnalysisResult) -> PersistOutcome {
        let Some(store) = self.store.as_ref() else {
            return PersistOutcome::Skipped;
        };

        let entry = build_entry(user_id, analysis, today());
        match store.insert(entry).await {
            Ok(stored) => PersistOutcome::Saved(stored),
            Err(e) => PersistOutcome::Failed(e.to_string()),
        }
    }

    /// Most recent entries for a user, newest first.
    pub async fn list_recent(&self, user_id: &str, limit: i64) -> Vec<ColorEntry> {
        let Some(store) = self.store.as_ref() else {
            return Vec::new();
        };

        match store.query_by_user(user_id, limit).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!(user_id = %user_id, error = %e, "Error fetching user colors");
                Vec::new()
            }
        }
    }

    pub async fn get_by_date(&self, user_id: &str, date: NaiveDate) -> Option<ColorEntry> {
        let store = self.store.as_ref()?;

        match store.query_by_user_and_date(user_id, date, 1).await {
            Ok(entries) => entries.into_iter().next(),
            Err(e) => {
                tracing::error!(user_id = %user_id, %date, error = %e, "Error fetching color by date");
                None
            }
        }
    }

    /// Entries with `start <= date <= end`, oldest first.
    pub async fn get_by_date_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<ColorEntry> {
        let Some(store) = self.store.as_ref() else {
            return Vec::new();
        };

        match store.query_by_user_and_date_range(user_id, start, end).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!(
                    user_id = %user_id,
                    %start,
                    %end,
                    error = %e,
                    "Error fetching colors by date range"
                );
                Vec::new()
            }
        }
    }

    /// Mood distribution over the user's last `days` entries.
    ///
    /// `days` caps the number of rows, not the calendar span: a user with gaps
    /// gets their last `days` entries however far back they reach.
    pub async fn mood_stats(&self, user_id: &str, days: i64) -> MoodStatistics {
        let entries = self.list_recent(user_id, days).await;
        mood_stats::aggregate(&entries)
    }

    /// Anonymous mood distribution across all users for the server's current date.
    pub async fn community_mood_today(&self) -> Outcome<CommunityMood> {
        let Some(store) = self.store.as_ref() else {
            return Outcome::Failure {
                error: "Database not configured".into(),
            };
        };

        let date = today();
        match store.query_moods_by_date(date).await {
            Ok(rows) => Outcome::Success(CommunityMood {
                date,
                stats: mood_stats::aggregate(&rows),
            }),
            Err(e) => {
                tracing::error!(%date, error = %e, "Error getting community mood");
                Outcome::Failure {
                    error: e.to_string(),
                }
            }
        }
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn build_entry(user_id: &str, analysis: &AnalysisResult, date: NaiveDate) -> NewColorEntry {
    let mood = analysis
        .emotion
        .clone()
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| DEFAULT_MOOD.to_string());

    NewColorEntry {
        user_id: user_id.to_string(),
        date,
        color_hex: color::encode(color::normalize_hue(analysis.hue)),
        mood,
        mood_score: parse_mood_score(analysis.confidence.as_deref()),
        description: analysis.summary.clone(),
    }
}

/// Turn a confidence like `"85.9%"` into `85`. The fraction is truncated, not rounded.
///
/// A missing confidence scores 0; so does one that does not parse, with a warning.
pub fn parse_mood_score(confidence: Option<&str>) -> i32 {
    let raw = confidence.unwrap_or("0%");
    match raw.trim().trim_end_matches('%').trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value.trunc() as i32,
        _ => {
            tracing::warn!(confidence = %raw, "Unparsable confidence, scoring 0");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::{FailingEntryStore, MemoryEntryStore};
    use chrono::Duration;

    fn analysis(emotion: Option<&str>, confidence: &str, hue: Option<f64>) -> AnalysisResult {
        AnalysisResult {
            emotion: emotion.map(String::from),
            confidence: Some(confidence.into()),
            hue,
            summary: Some("A good day".into()),
            ..Default::default()
        }
    }

    fn service_with(store: Arc<MemoryEntryStore>) -> RecordService {
        RecordService::new(Some(store as Arc<dyn EntryStore>))
    }

    // ── parse_mood_score ─────────────────────────────────────────────────

    #[test]
    fn test_mood_score_truncates() {
        assert_eq!(parse_mood_score(Some("85.3%")), 85);
        assert_eq!(parse_mood_score(Some("85.9%")), 85);
        assert_eq!(parse_mood_score(Some("100%")), 100);
        assert_eq!(parse_mood_score(Some("0.99%")), 0);
    }

    #[test]
    fn test_mood_score_without_percent_sign() {
        assert_eq!(parse_mood_score(Some("42")), 42);
    }

    #[test]
    fn test_mood_score_missing_or_garbage() {
        assert_eq!(parse_mood_score(None), 0);
        assert_eq!(parse_mood_score(Some("high")), 0);
        assert_eq!(parse_mood_score(Some("")), 0);
    }

    // ── build_entry ──────────────────────────────────────────────────────

    #[test]
    fn test_build_entry_defaults_emotion() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let entry = build_entry("u1", &analysis(None, "70%", None), date);
        assert_eq!(entry.mood, "Neutral");
        assert_eq!(entry.color_hex, "#808080");
        assert_eq!(entry.mood_score, 70);
        assert_eq!(entry.date, date);
        assert_eq!(entry.description.as_deref(), Some("A good day"));
    }

    #[test]
    fn test_build_entry_encodes_hue() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let entry = build_entry("u1", &analysis(Some("Happy"), "91.2%", Some(390.0)), date);
        assert_eq!(entry.mood, "Happy");
        assert_eq!(entry.color_hex, "#f1a559");
        assert_eq!(entry.mood_score, 91);
    }

    // ── save path ────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_record_analysis_persists_today() {
        let store = Arc::new(MemoryEntryStore::new());
        let service = service_with(store.clone());

        let outcome = service
            .record_analysis("u1", &analysis(Some("Happy"), "85.9%", Some(0.0)))
            .await;

        match outcome {
            PersistOutcome::Saved(entry) => {
                assert_eq!(entry.user_id, "u1");
                assert_eq!(entry.date, Utc::now().date_naive());
                assert_eq!(entry.mood.as_deref(), Some("Happy"));
                assert_eq!(entry.mood_score, 85);
                assert_eq!(entry.color_hex, "#f15959");
            }
            other => panic!("expected Saved, got {:?}", other),
        }
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_record_analysis_without_store_is_skipped() {
        let service = RecordService::new(None);
        let outcome = service
            .record_analysis("u1", &analysis(Some("Happy"), "85%", None))
            .await;
        assert!(matches!(outcome, PersistOutcome::Skipped));
    }

    #[tokio::test]
    async fn test_record_analysis_failure_is_tagged() {
        let service = RecordService::new(Some(Arc::new(FailingEntryStore)));
        let outcome = service
            .record_analysis("u1", &analysis(Some("Happy"), "85%", None))
            .await;
        match outcome {
            PersistOutcome::Failed(message) => assert!(message.contains("connection refused")),
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_duplicate_same_day_inserts_are_kept() {
        let store = Arc::new(MemoryEntryStore::new());
        let service = service_with(store.clone());
        let a = analysis(Some("Sad"), "60%", None);

        service.record_analysis("u1", &a).await;
        service.record_analysis("u1", &a).await;

        assert_eq!(store.len().await, 2);
        let stats = service.mood_stats("u1", DEFAULT_STATS_DAYS).await;
        assert_eq!(stats.total_entries, 2);
        assert_eq!(stats.mood_counts.get("Sad"), Some(&2));
    }

    // ── read path ────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_reads_without_store_are_empty() {
        let service = RecordService::new(None);
        let day = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

        assert!(service.list_recent("u1", 30).await.is_empty());
        assert!(service.get_by_date("u1", day).await.is_none());
        assert!(service.get_by_date_range("u1", day, day).await.is_empty());
        assert_eq!(service.mood_stats("u1", 30).await, MoodStatistics::default());
    }

    #[tokio::test]
    async fn test_reads_on_store_failure_are_empty() {
        let service = RecordService::new(Some(Arc::new(FailingEntryStore)));
        let day = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

        assert!(service.list_recent("u1", 30).await.is_empty());
        assert!(service.get_by_date("u1", day).await.is_none());
        assert!(service.get_by_date_range("u1", day, day).await.is_empty());
        assert_eq!(service.mood_stats("u1", 30).await.total_entries, 0);
    }

    #[tokio::test]
    async fn test_list_recent_orders_desc_and_limits() {
        let store = Arc::new(MemoryEntryStore::new());
        let base = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        for offset in [2, 0, 4, 1, 3] {
            store.push("u1", base + Duration::days(offset), Some("Calm")).await;
        }
        store.push("u2", base + Duration::days(9), Some("Calm")).await;
        let service = service_with(store);

        let recent = service.list_recent("u1", 3).await;
        let dates: Vec<NaiveDate> = recent.iter().map(|e| e.date).collect();
        assert_eq!(
            dates,
            vec![
                base + Duration::days(4),
                base + Duration::days(3),
                base + Duration::days(2),
            ]
        );
        assert!(recent.iter().all(|e| e.user_id == "u1"));
    }

    #[tokio::test]
    async fn test_get_by_date_returns_first_of_duplicates() {
        let store = Arc::new(MemoryEntryStore::new());
        let day = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        let first = store.push("u1", day, Some("Happy")).await;
        store.push("u1", day, Some("Sad")).await;
        let service = service_with(store);

        let found = service.get_by_date("u1", day).await.unwrap();
        assert_eq!(found.id, first.id);
        assert!(service
            .get_by_date("u1", day + Duration::days(1))
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_date_range_is_inclusive_and_ascending() {
        let store = Arc::new(MemoryEntryStore::new());
        let base = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        for offset in [5, 1, 3, 0, 6] {
            store.push("u1", base + Duration::days(offset), Some("Calm")).await;
        }
        let service = service_with(store);

        let entries = service
            .get_by_date_range("u1", base + Duration::days(1), base + Duration::days(5))
            .await;
        let dates: Vec<NaiveDate> = entries.iter().map(|e| e.date).collect();
        assert_eq!(
            dates,
            vec![
                base + Duration::days(1),
                base + Duration::days(3),
                base + Duration::days(5),
            ]
        );
    }

    #[tokio::test]
    async fn test_mood_stats_counts_rows_not_calendar_days() {
        let store = Arc::new(MemoryEntryStore::new());
        let base = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        // three entries spread over sixty days
        store.push("u1", base, Some("Sad")).await;
        store.push("u1", base + Duration::days(30), Some("Happy")).await;
        store.push("u1", base + Duration::days(60), Some("Happy")).await;
        let service = service_with(store);

        let stats = service.mood_stats("u1", 2).await;
        assert_eq!(stats.total_entries, 2);
        assert_eq!(stats.mood_counts.get("Happy"), Some(&2));
        assert!(stats.mood_counts.get("Sad").is_none());
    }

    // ── community ────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_community_mood_today_aggregates_all_users() {
        let store = Arc::new(MemoryEntryStore::new());
        let today = Utc::now().date_naive();
        store.push("alice", today, Some("Happy")).await;
        store.push("bob", today, Some("Happy")).await;
        store.push("carol", today - Duration::days(1), Some("Sad")).await;
        let service = service_with(store);

        let Outcome::Success(community) = service.community_mood_today().await else {
            panic!("expected success");
        };
        assert_eq!(community.date, today);
        assert_eq!(community.stats.total_entries, 2);
        assert_eq!(community.stats.mood_counts.get("Happy"), Some(&2));
        assert_eq!(community.stats.mood_percentages.get("Happy"), Some(&100.0));

        let json = serde_json::to_string(&community).unwrap();
        assert!(!json.contains("alice"));
        assert!(!json.contains("bob"));
        assert!(!json.contains("user_id"));
    }

    #[tokio::test]
    async fn test_community_mood_today_empty_is_not_failure() {
        let service = service_with(Arc::new(MemoryEntryStore::new()));
        let Outcome::Success(community) = service.community_mood_today().await else {
            panic!("expected success");
        };
        let json = serde_json::to_value(&community).unwrap();
        assert_eq!(json["total_entries"], 0);
        assert_eq!(json["mood_counts"], serde_json::json!({}));
        assert_eq!(json["mood_percentages"], serde_json::json!({}));
        assert_eq!(json["date"], today().to_string());
    }

    #[tokio::test]
    async fn test_community_mood_today_without_store_is_failure() {
        let service = RecordService::new(None);
        let outcome = service.community_mood_today().await;
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Database not configured" }));
    }

    #[tokio::test]
    async fn test_community_mood_today_store_failure_carries_error() {
        let service = RecordService::new(Some(Arc::new(FailingEntryStore)));
        match service.community_mood_today().await {
            Outcome::Failure { error } => assert!(error.contains("connection refused")),
            Outcome::Success(_) => panic!("expected failure"),
        }
    }
}
