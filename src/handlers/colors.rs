use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::dto::{parse_date, ColorResponse, ColorsQuery, ColorsResponse, DateRangeQuery};
use crate::error::AppResult;
use crate::AppState;

pub async fn list_colors(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<ColorsQuery>,
) -> AppResult<Json<ColorsResponse>> {
    let limit = query.limit()?;

    let colors = state.records.list_recent(&user_id, limit).await;
    Ok(Json(ColorsResponse { colors }))
}

pub async fn get_color_by_date(
    State(state): State<AppState>,
    Path((user_id, date)): Path<(String, String)>,
) -> AppResult<Json<ColorResponse>> {
    let date = parse_date(&date)?;

    let color = state.records.get_by_date(&user_id, date).await;
    Ok(Json(ColorResponse { color }))
}

pub async fn list_colors_in_range(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<DateRangeQuery>,
) -> AppResult<Json<ColorsResponse>> {
    let (start, end) = query.dates()?;

    let colors = state.records.get_by_date_range(&user_id, start, end).await;
    Ok(Json(ColorsResponse { colors }))
}
