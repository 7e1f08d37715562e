use serde::{Deserialize, Serialize};

/// Output of the upstream emotion classifier.
///
/// Every field is optional because the classifier is opaque to this service.
/// Fields this service does not interpret are kept in `extra` so the API can
/// echo the classifier's response unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub emotion: Option<String>,
    /// Percentage-formatted string, e.g. `"85.3%"`.
    #[serde(default)]
    pub confidence: Option<String>,
    /// Degrees on the HSL wheel; `None` when there is no color signal.
    #[serde(default)]
    pub hue: Option<f64>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
