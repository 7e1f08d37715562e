use std::sync::Arc;

mod config;
mod db;
mod dto;
mod error;
mod handlers;
mod models;
mod routes;
mod services;

use config::Config;
use db::postgres::PgEntryStore;
use db::store::EntryStore;
use services::classifier::{EmotionClassifier, HttpClassifier};
use services::record::RecordService;

#[derive(Clone)]
pub struct AppState {
    pub records: RecordService,
    pub classifier: Arc<dyn EmotionClassifier>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "daycolor_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Config::from_env();

    let store = connect_store(&config).await;
    let classifier = HttpClassifier::new(&config.classifier_url, config.classifier_timeout_secs)?;

    let state = AppState {
        records: RecordService::new(store),
        classifier: Arc::new(classifier),
    };

    let app = routes::build_router(state, &config);

    let addr = config.listen_addr();
    tracing::info!(classifier = %config.classifier_url, "Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Connect and migrate the entry store. Any failure leaves the service running
/// without persistence rather than refusing to start.
async fn connect_store(config: &Config) -> Option<Arc<dyn EntryStore>> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Database features disabled.");
        return None;
    };

    let db = match db::create_pool(database_url, config.db_max_connections).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect to database. Database features disabled.");
            return None;
        }
    };

    if let Err(e) = sqlx::migrate!("./migrations").run(&db).await {
        tracing::error!(error = %e, "Failed to run database migrations. Database features disabled.");
        return None;
    }

    tracing::info!("Database connected, migrations applied");
    Some(Arc::new(PgEntryStore::new(db)))
}
