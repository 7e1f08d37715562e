use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::dto::StatsQuery;
use crate::error::AppResult;
use crate::services::mood_stats::MoodStatistics;
use crate::services::record::{CommunityMood, Outcome};
use crate::AppState;

pub async fn get_mood_stats(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<StatsQuery>,
) -> AppResult<Json<MoodStatistics>> {
    let days = query.days()?;

    let stats = state.records.mood_stats(&user_id, days).await;
    Ok(Json(stats))
}

/// Today's mood distribution across every user. Only labels are read.
pub async fn get_community_mood_today(State(state): State<AppState>) -> Json<Outcome<CommunityMood>> {
    Json(state.records.community_mood_today().await)
}
