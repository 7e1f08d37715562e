use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::handlers;
use crate::AppState;

pub fn build_router(state: AppState, config: &Config) -> Router {
    let analysis_routes = Router::new()
        .route("/predict", post(handlers::analysis::predict))
        .route("/predict_text", post(handlers::analysis::predict_text))
        .route("/calibrate", post(handlers::analysis::calibrate))
        .route("/calibrate_sample", get(handlers::analysis::calibrate_sample))
        .route("/summarize", post(handlers::summarize::summarize_reflections));

    let record_routes = Router::new()
        .route("/colors/:user_id", get(handlers::colors::list_colors))
        .route(
            "/colors/:user_id/date/:date",
            get(handlers::colors::get_color_by_date),
        )
        .route(
            "/colors/:user_id/range",
            get(handlers::colors::list_colors_in_range),
        )
        .route("/stats/:user_id", get(handlers::stats::get_mood_stats))
        .route(
            "/community/mood-today",
            get(handlers::stats::get_community_mood_today),
        );

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .merge(analysis_routes)
        .merge(record_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors_layer(&config.cors_origins)),
        )
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    if origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(hv) => Some(hv),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(allowed)
}
