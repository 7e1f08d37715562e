use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::AppState;

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "daycolor-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Ready unless a configured store fails to answer. Running without a store is
/// a supported mode, reported as `disabled`.
pub async fn readyz(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let Some(store) = state.records.store() else {
        return (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "checks": { "database": "disabled" },
            })),
        );
    };

    match store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "checks": { "database": "ok" },
            })),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "not_ready",
                    "checks": { "database": "failed" },
                })),
            )
        }
    }
}
