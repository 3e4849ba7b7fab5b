//! Maps whatever JSON the analysis webhook returns onto [`AnalysisRecord`].
//!
//! Workflow engines disagree on key names and envelopes, so every target
//! field is resolved by probing an ordered list of candidate keys. The
//! mapping is total: any input, including `null` and scalars, produces a
//! fully populated record.

use serde_json::{Map, Value};
use tracing::debug;

use crate::types::{
    AnalysisRecord, DEFAULT_RELEVANCE, SentimentSlice, Topic, default_fill, default_sentiment,
};

pub const TITLE_KEYS: &[&str] = &["title", "videoTitle", "video_title"];
pub const THUMBNAIL_KEYS: &[&str] = &["thumbnailUrl", "thumbnail"];
pub const SUMMARY_KEYS: &[&str] = &["summary", "videoSummary", "tldr", "shortSummary"];
// `description` is left out on purpose: it usually carries the platform's own
// video description (links, timestamps) rather than the analysis.
pub const DESCRIPTION_KEYS: &[&str] = &[
    "detailedDescription",
    "article",
    "fullText",
    "text",
    "analysis",
    "longSummary",
];
pub const KEY_POINT_KEYS: &[&str] = &["keyPoints", "mainPoints", "points", "key_points"];
pub const TOPIC_KEYS: &[&str] = &["topics", "videoTopics", "tags", "keywords"];
pub const INSIGHT_KEYS: &[&str] = &["insights", "strategicInsights", "keyInsights"];
pub const SENTIMENT_KEYS: &[&str] = &["sentiment", "sentimentAnalysis"];

pub const DEFAULT_TITLE: &str = "Analyzed Video";
pub const DEFAULT_THUMBNAIL: &str = "https://picsum.photos/800/450";
pub const DEFAULT_SUMMARY: &str = "No summary available.";
pub const UNKNOWN_TOPIC: &str = "Unknown";

/// Normalize a raw webhook reply into an [`AnalysisRecord`].
pub fn normalize(raw: &Value) -> AnalysisRecord {
    let data = unwrap_body(unwrap_envelope(raw));

    let summary = first_string(&data, SUMMARY_KEYS).unwrap_or(DEFAULT_SUMMARY);
    let description = first_string(&data, DESCRIPTION_KEYS).unwrap_or(summary);

    let record = AnalysisRecord {
        title: first_string(&data, TITLE_KEYS)
            .unwrap_or(DEFAULT_TITLE)
            .to_string(),
        thumbnail_url: first_string(&data, THUMBNAIL_KEYS)
            .unwrap_or(DEFAULT_THUMBNAIL)
            .to_string(),
        summary: summary.to_string(),
        description: description.to_string(),
        key_points: string_list(first_present(&data, KEY_POINT_KEYS)),
        topics: topics(first_present(&data, TOPIC_KEYS)),
        insights: string_list(first_present(&data, INSIGHT_KEYS)),
        sentiment: sentiment(first_present(&data, SENTIMENT_KEYS)),
    };

    debug!(
        title = %record.title,
        key_points = record.key_points.len(),
        topics = record.topics.len(),
        insights = record.insights.len(),
        "normalized webhook response"
    );

    record
}

/// Take the first element of an array reply. Anything that is still not an
/// object afterwards is treated as an empty object.
fn unwrap_envelope(raw: &Value) -> Map<String, Value> {
    let inner = match raw {
        Value::Array(items) => items.first(),
        other => Some(other),
    };

    match inner {
        Some(Value::Object(map)) => map.clone(),
        _ => Map::new(),
    }
}

/// Lift a nested `body` object to the top level when the top level has
/// neither `title` nor `summary`. Body fields win on conflict.
fn unwrap_body(mut data: Map<String, Value>) -> Map<String, Value> {
    if first_present(&data, &["title", "summary"]).is_some() {
        return data;
    }

    if let Some(Value::Object(body)) = data.get("body").cloned() {
        debug!(fields = body.len(), "merging nested body envelope");
        data.extend(body);
    }

    data
}

/// Whether a value counts as supplied. `null`, `false`, `0`, blank strings
/// and empty collections do not.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// First candidate key whose value is present.
pub fn first_present<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| map.get(*key))
        .find(|value| is_present(value))
}

/// First candidate key holding a non-blank string. Non-string values are
/// skipped rather than stringified.
pub fn first_string<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| map.get(*key))
        .filter_map(Value::as_str)
        .find(|s| !s.trim().is_empty())
}

/// Coerce key points / insights into a list of strings.
///
/// Arrays keep string entries verbatim and render other entries as compact
/// JSON. A single string is split into lines with blank lines dropped.
pub fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        Some(Value::String(text)) => text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

pub fn topics(value: Option<&Value>) -> Vec<Topic> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::String(name) => Some(Topic::new(name.clone(), DEFAULT_RELEVANCE)),
            Value::Object(entry) => Some(topic_from_object(entry)),
            Value::Null => None,
            _ => Some(Topic::new(UNKNOWN_TOPIC, DEFAULT_RELEVANCE)),
        })
        .collect()
}

/// A string `name` is taken verbatim, even when blank, so a bare-string
/// entry re-normalizes to the same topic.
fn topic_from_object(entry: &Map<String, Value>) -> Topic {
    let name = entry
        .get("name")
        .and_then(Value::as_str)
        .or_else(|| first_string(entry, &["label"]))
        .unwrap_or(UNKNOWN_TOPIC);
    let relevance = entry
        .get("relevance")
        .and_then(Value::as_f64)
        .filter(|r| r.is_finite())
        .map(|r| r.clamp(0.0, 100.0))
        .unwrap_or(DEFAULT_RELEVANCE);

    let extra = entry
        .iter()
        .filter(|(key, _)| !matches!(key.as_str(), "name" | "relevance"))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Topic {
        name: name.to_string(),
        relevance,
        extra,
    }
}

/// All-or-nothing: one malformed slice discards the whole list in favour of
/// the zeroed default.
pub fn sentiment(value: Option<&Value>) -> Vec<SentimentSlice> {
    let slices = match value {
        Some(Value::Array(items)) if !items.is_empty() => {
            items.iter().map(slice_from_value).collect::<Option<Vec<_>>>()
        }
        _ => None,
    };

    slices.unwrap_or_else(|| {
        debug!("sentiment missing or malformed, using zeroed default");
        default_sentiment()
    })
}

fn slice_from_value(value: &Value) -> Option<SentimentSlice> {
    let entry = value.as_object()?;
    let name = entry
        .get("name")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())?;
    let value = entry.get("value").and_then(Value::as_f64)?;

    let fill = entry
        .get("fill")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| default_fill(name));

    let extra = entry
        .iter()
        .filter(|(key, _)| !matches!(key.as_str(), "name" | "value" | "fill"))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Some(SentimentSlice {
        name: name.to_string(),
        value,
        fill: fill.to_string(),
        extra,
    })
}
