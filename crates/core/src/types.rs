use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_RELEVANCE: f64 = 50.0;

pub const POSITIVE_FILL: &str = "#10B981";
pub const NEUTRAL_FILL: &str = "#9CA3AF";
pub const NEGATIVE_FILL: &str = "#EF4444";
pub const OTHER_FILL: &str = "#6B7280";

/// The fixed display schema every webhook reply is normalized into.
///
/// `description` is serialized as `detailedDescription` so a serialized
/// record normalizes back into itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub title: String,
    pub thumbnail_url: String,
    pub summary: String,
    #[serde(rename = "detailedDescription", alias = "description")]
    pub description: String,
    pub key_points: Vec<String>,
    pub topics: Vec<Topic>,
    pub insights: Vec<String>,
    pub sentiment: Vec<SentimentSlice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    /// 0-100
    pub relevance: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Topic {
    pub fn new(name: impl Into<String>, relevance: f64) -> Self {
        Self {
            name: name.into(),
            relevance,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSlice {
    pub name: String,
    pub value: f64,
    pub fill: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SentimentSlice {
    /// A slice colored with the canonical fill for its name.
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        let name = name.into();
        let fill = default_fill(&name).to_string();
        Self {
            name,
            value,
            fill,
            extra: Map::new(),
        }
    }
}

/// Canonical chart color for a sentiment bucket.
pub fn default_fill(name: &str) -> &'static str {
    match name.to_ascii_lowercase().as_str() {
        "positive" => POSITIVE_FILL,
        "neutral" => NEUTRAL_FILL,
        "negative" => NEGATIVE_FILL,
        _ => OTHER_FILL,
    }
}

/// Positive/Neutral/Negative, all zero.
pub fn default_sentiment() -> Vec<SentimentSlice> {
    vec![
        SentimentSlice::new("Positive", 0.0),
        SentimentSlice::new("Neutral", 0.0),
        SentimentSlice::new("Negative", 0.0),
    ]
}
