//! Whisper API transcriber adapter

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{Transcriber, TranscriptionError};
use crate::domain::{AudioData, VocabularyHint};

use super::DEFAULT_BASE_URL;

/// Whisper model to use
const DEFAULT_MODEL: &str = "whisper-1";

// Response types for the transcriptions endpoint

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: Option<String>,
}

/// OpenAI Whisper API transcriber
pub struct WhisperTranscriber {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl WhisperTranscriber {
    /// Create a new Whisper transcriber with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL)
    }

    /// Create a new Whisper transcriber with a custom model
    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Point the adapter at a different API host (testing, proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the API URL
    fn api_url(&self) -> String {
        format!("{}/audio/transcriptions", self.base_url)
    }

    /// Build the multipart upload form
    fn build_form(
        &self,
        audio: &AudioData,
        hint: &VocabularyHint,
    ) -> Result<reqwest::multipart::Form, TranscriptionError> {
        let file = reqwest::multipart::Part::bytes(audio.data().to_vec())
            .file_name(audio.filename().to_string())
            .mime_str(audio.mime_type().as_str())
            .map_err(|e| TranscriptionError::RequestFailed(e.to_string()))?;

        Ok(reqwest::multipart::Form::new()
            .text("model", self.model.clone())
            .text("language", "en")
            .text("response_format", "json")
            .text("prompt", hint.content().to_string())
            .part("file", file))
    }
}

#[async_trait]
impl Transcriber for WhisperTranscriber {
    async fn transcribe(
        &self,
        audio: &AudioData,
        hint: &VocabularyHint,
    ) -> Result<String, TranscriptionError> {
        let url = self.api_url();
        let form = self.build_form(audio, hint)?;

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::RequestFailed(e.to_string()))?;

        let status = response.status();

        // Handle HTTP errors
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(TranscriptionError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TranscriptionError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TranscriptionError::ApiError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        // Parse response
        let response: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::ParseError(e.to_string()))?;

        // Garbled or partial text passes through as-is; only a missing or
        // blank transcript is rejected.
        let text = response.text.ok_or(TranscriptionError::EmptyResponse)?;
        if text.trim().is_empty() {
            return Err(TranscriptionError::EmptyResponse);
        }

        Ok(text)
    }
}
