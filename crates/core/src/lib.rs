//! Clipsight Core Library
//!
//! Forwards a video link to a user-configured analysis webhook and normalizes
//! whatever JSON comes back into a fixed report schema.

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod normalize;
pub mod sample;
pub mod types;

// Re-export commonly used items at crate root
pub use client::{AnalysisClient, SAMPLE_DELAY};
pub use config::{CONFIG_KEY, ConfigStore, Configuration, DEFAULT_ENDPOINT_URL};
pub use error::{ClipsightError, Result};
pub use format::{format_record_readable, relevance_bar};
pub use normalize::normalize;
pub use sample::sample_record;
pub use types::{AnalysisRecord, SentimentSlice, Topic, default_sentiment};
