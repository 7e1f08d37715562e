use std::time::Duration;

use async_trait::async_trait;

use crate::error::{AppError, AppResult};
use crate::models::analysis::AnalysisResult;

/// Upstream emotion classifier. Its model is opaque to this service.
#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    /// Classify a journal entry given as separate lines.
    async fn analyze_lines(&self, lines: &[String]) -> AppResult<AnalysisResult>;

    async fn analyze_text(&self, text: &str) -> AppResult<AnalysisResult>;
}

/// Classifier reached over HTTP.
pub struct HttpClassifier {
    client: reqwest::Client,
    base_url: String,
}

impl HttpClassifier {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    async fn post(&self, path: &str, body: serde_json::Value) -> AppResult<AnalysisResult> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Classifier(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Classifier(format!("{} returned {}: {}", url, status, body)));
        }

        response
            .json::<AnalysisResult>()
            .await
            .map_err(|e| AppError::Classifier(format!("invalid response from {}: {}", url, e)))
    }
}

#[async_trait]
impl EmotionClassifier for HttpClassifier {
    async fn analyze_lines(&self, lines: &[String]) -> AppResult<AnalysisResult> {
        self.post("analyze_lines", serde_json::json!({ "lines": lines }))
            .await
    }

    async fn analyze_text(&self, text: &str) -> AppResult<AnalysisResult> {
        self.post("analyze_text", serde_json::json!({ "text": text }))
            .await
    }
}
