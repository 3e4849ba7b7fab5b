use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipsightError {
    #[error("Webhook URL is missing. Please configure it in settings.")]
    Configuration,

    #[error("Webhook failed with status: {status}")]
    Transport { status: u16 },

    #[error(
        "Network Error: Could not connect to the webhook. Check CORS settings on your webhook or disable AdBlockers. ({source})"
    )]
    Network {
        #[source]
        source: reqwest::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to connect to analysis service: {reason}")]
    Unknown { reason: String },
}

pub type Result<T> = std::result::Result<T, ClipsightError>;
