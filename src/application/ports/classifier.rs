//! Intent classification port interface

use async_trait::async_trait;
use thiserror::Error;

/// Classification transport errors.
///
/// These cover the model being unreachable or unusable. Output that
/// arrives but fails the strict command parse is a separate failure owned
/// by the use case, so adapters stay dumb transports.
#[derive(Debug, Clone, Error)]
pub enum ClassificationError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty classification response")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for intent classification
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    /// Classify a transcribed utterance into a command.
    ///
    /// Returns the model's raw text output verbatim; the caller applies
    /// the strict parse boundary.
    async fn classify(&self, transcription: &str) -> Result<String, ClassificationError>;
}
