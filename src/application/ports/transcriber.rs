//! Transcription port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{AudioData, VocabularyHint};

/// Transcription errors
#[derive(Debug, Clone, Error)]
pub enum TranscriptionError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty transcription response")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for audio transcription
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe audio data to text.
    ///
    /// # Arguments
    /// * `audio` - The audio data to transcribe
    /// * `hint` - Domain-vocabulary hint biasing recognition
    ///
    /// # Returns
    /// The transcribed text, passed through as-is (no confidence
    /// filtering), or an error. The first failure aborts the caller's
    /// pipeline; nothing is retried.
    async fn transcribe(
        &self,
        audio: &AudioData,
        hint: &VocabularyHint,
    ) -> Result<String, TranscriptionError>;
}
