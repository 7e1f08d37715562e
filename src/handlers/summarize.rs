use axum::Json;

use crate::dto::{SummarizeRequest, SummarizeResponse};
use crate::services::summary;

pub async fn summarize_reflections(Json(body): Json<SummarizeRequest>) -> Json<SummarizeResponse> {
    Json(SummarizeResponse {
        summary: summary::summarize(&body.reflections),
    })
}
