//! # daycolor-api — Request/Response DTOs
//!
//! Conventions:
//! - `*Request`  → deserialized from client JSON body
//! - `*Query`    → deserialized from query params
//! - `*Response` → serialized to client JSON
//! - Body validation is expressed via `validator` derive macros; query
//!   params are checked by helper impls returning `AppError::Validation`

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppError;
use crate::models::analysis::AnalysisResult;
use crate::models::color_entry::ColorEntry;
use crate::services::record::{DEFAULT_RECENT_LIMIT, DEFAULT_STATS_DAYS};

const MAX_WINDOW: i64 = 1000;

// ============================================================================
// Analysis
// ============================================================================

/// POST /predict
#[derive(Debug, Deserialize, Validate)]
pub struct PredictRequest {
    #[validate(length(min = 1, message = "At least one line is required"))]
    pub lines: Vec<String>,

    /// When present, the analysis is also saved as today's color for this user
    pub user_id: Option<String>,
}

/// POST /predict_text
#[derive(Debug, Deserialize)]
pub struct PredictTextRequest {
    pub text: String,
}

/// POST /calibrate
#[derive(Debug, Deserialize)]
pub struct CalibrateRequest {
    #[serde(default)]
    pub texts: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CalibrationResult {
    pub text: String,
    pub prediction: AnalysisResult,
}

/// POST /calibrate and GET /calibrate_sample
#[derive(Debug, Serialize)]
pub struct CalibrateResponse {
    pub results: Vec<CalibrationResult>,
}

// ============================================================================
// Colors
// ============================================================================

/// GET /colors/{user_id}
#[derive(Debug, Deserialize)]
pub struct ColorsQuery {
    /// Default: 30, range: 1-MAX_WINDOW
    pub limit: Option<i64>,
}

impl ColorsQuery {
    pub fn limit(&self) -> Result<i64, AppError> {
        window("limit", self.limit, DEFAULT_RECENT_LIMIT)
    }
}

/// GET /colors/{user_id}/range — both bounds inclusive, `YYYY-MM-DD`
#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

impl DateRangeQuery {
    pub fn dates(&self) -> Result<(NaiveDate, NaiveDate), AppError> {
        Ok((parse_date(&self.start_date)?, parse_date(&self.end_date)?))
    }
}

#[derive(Debug, Serialize)]
pub struct ColorsResponse {
    pub colors: Vec<ColorEntry>,
}

/// `color` is null when nothing was recorded that day
#[derive(Debug, Serialize)]
pub struct ColorResponse {
    pub color: Option<ColorEntry>,
}

// ============================================================================
// Stats
// ============================================================================

/// GET /stats/{user_id}
#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    /// Number of most recent entries to aggregate (rows, not calendar days).
    /// Default: 30, range: 1-MAX_WINDOW
    pub days: Option<i64>,
}

impl StatsQuery {
    pub fn days(&self) -> Result<i64, AppError> {
        window("days", self.days, DEFAULT_STATS_DAYS)
    }
}

// ============================================================================
// Reflections
// ============================================================================

/// POST /summarize
#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub reflections: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

// ============================================================================
// Validation helpers
// ============================================================================

/// Row-count window for list and stats queries, defaulted and bounds-checked
fn window(name: &str, value: Option<i64>, default: i64) -> Result<i64, AppError> {
    let value = value.unwrap_or(default);
    if !(1..=MAX_WINDOW).contains(&value) {
        return Err(AppError::Validation(format!(
            "{} must be 1-{}",
            name, MAX_WINDOW
        )));
    }
    Ok(value)
}

/// Parse a `YYYY-MM-DD` path or query value
pub fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", raw)))
}
