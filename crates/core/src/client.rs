use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    config::Configuration,
    error::{ClipsightError, Result},
    normalize::normalize,
    sample::sample_record,
    types::AnalysisRecord,
};

/// Artificial latency in sample mode so the loading state is still visible.
pub const SAMPLE_DELAY: Duration = Duration::from_millis(500);

/// Sends a video link to the configured webhook and normalizes the reply.
pub struct AnalysisClient {
    http: reqwest::Client,
    sample_delay: Duration,
}

impl Default for AnalysisClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            sample_delay: SAMPLE_DELAY,
        }
    }

    pub fn with_sample_delay(mut self, delay: Duration) -> Self {
        self.sample_delay = delay;
        self
    }

    /// Analyze `link` according to `config`.
    ///
    /// Exactly one POST is made per call outside sample mode; there are no
    /// retries and no timeout beyond the transport default.
    pub async fn analyze(&self, link: &str, config: &Configuration) -> Result<AnalysisRecord> {
        if config.use_sample_data {
            debug!(link, "sample mode, skipping webhook");
            tokio::time::sleep(self.sample_delay).await;
            return Ok(sample_record());
        }

        let endpoint = config.endpoint_url.trim();
        if endpoint.is_empty() {
            return Err(ClipsightError::Configuration);
        }

        debug!(endpoint, link, "posting link to webhook");
        let response = self
            .http
            .post(endpoint)
            .header("Content-Type", "application/json")
            .json(&serde_json::json!({ "url": link }))
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClipsightError::Transport {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| ClipsightError::Network { source })?;

        let raw = serde_json::from_str::<Value>(&body).unwrap_or_else(|e| {
            warn!(error = %e, "webhook returned a non-JSON body, using defaults");
            Value::Null
        });
        debug!(response = %raw, "raw webhook response");

        Ok(normalize(&raw))
    }
}

/// A malformed endpoint never reaches the network, so it is not reported
/// as a connectivity problem.
fn request_error(source: reqwest::Error) -> ClipsightError {
    if source.is_builder() {
        ClipsightError::Unknown {
            reason: source.to_string(),
        }
    } else {
        ClipsightError::Network { source }
    }
}
