use axum::{extract::State, Json};
use validator::Validate;

use crate::dto::{
    CalibrateRequest, CalibrateResponse, CalibrationResult, PredictRequest, PredictTextRequest,
};
use crate::error::AppResult;
use crate::models::analysis::AnalysisResult;
use crate::services::record::PersistOutcome;
use crate::AppState;

const CALIBRATION_SAMPLES: [&str; 6] = [
    "My dog died",
    "I got a promotion",
    "I'm anxious about exams",
    "This is disgusting",
    "Wow, that's amazing!",
    "I'm looking forward to tomorrow",
];

/// Classify a journal entry and, when a user is given, save it as today's color.
///
/// Saving is best-effort: whatever happens to it, the caller gets the analysis.
pub async fn predict(
    State(state): State<AppState>,
    Json(body): Json<PredictRequest>,
) -> AppResult<Json<AnalysisResult>> {
    body.validate()?;

    let result = state.classifier.analyze_lines(&body.lines).await?;

    if let Some(user_id) = body.user_id.as_deref().filter(|id| !id.is_empty()) {
        match state.records.record_analysis(user_id, &result).await {
            PersistOutcome::Saved(entry) => {
                tracing::info!(user_id = %user_id, entry_id = %entry.id, "Saved daily color");
            }
            PersistOutcome::Skipped => {
                tracing::debug!(user_id = %user_id, "Entry store not configured, skipping save");
            }
            PersistOutcome::Failed(e) => {
                tracing::error!(user_id = %user_id, error = %e, "Failed to save daily color");
            }
        }
    }

    Ok(Json(result))
}

pub async fn predict_text(
    State(state): State<AppState>,
    Json(body): Json<PredictTextRequest>,
) -> AppResult<Json<AnalysisResult>> {
    let result = state.classifier.analyze_text(&body.text).await?;
    Ok(Json(result))
}

pub async fn calibrate(
    State(state): State<AppState>,
    Json(body): Json<CalibrateRequest>,
) -> AppResult<Json<CalibrateResponse>> {
    let results = classify_all(&state, body.texts).await?;
    Ok(Json(CalibrateResponse { results }))
}

pub async fn calibrate_sample(State(state): State<AppState>) -> AppResult<Json<CalibrateResponse>> {
    let texts = CALIBRATION_SAMPLES.iter().map(|s| s.to_string()).collect();
    let results = classify_all(&state, texts).await?;
    Ok(Json(CalibrateResponse { results }))
}

async fn classify_all(state: &AppState, texts: Vec<String>) -> AppResult<Vec<CalibrationResult>> {
    let mut results = Vec::with_capacity(texts.len());
    for text in texts {
        let prediction = state.classifier.analyze_text(&text).await?;
        results.push(CalibrationResult { text, prediction });
    }
    Ok(results)
}
