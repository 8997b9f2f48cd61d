//! Chat completions intent-classifier adapter

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ClassificationError, IntentClassifier};
use crate::domain::ClassifierInstruction;

use super::DEFAULT_BASE_URL;

/// Chat model to use
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

// Request types for the chat completions endpoint

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

// Response types for the chat completions endpoint

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// OpenAI chat completions intent classifier
pub struct ChatIntentClassifier {
    api_key: String,
    model: String,
    base_url: String,
    instruction: ClassifierInstruction,
    client: reqwest::Client,
}

impl ChatIntentClassifier {
    /// Create a new classifier with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL)
    }

    /// Create a new classifier with a custom model
    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            instruction: ClassifierInstruction::default(),
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
        format!("{}/chat/completions", self.base_url)
    }

    /// Build the request body
    fn build_request(&self, transcription: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: self.instruction.content().to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: transcription.to_string(),
                },
            ],
        }
    }

    /// Extract the assistant message from the response
    fn extract_content(response: ChatCompletionResponse) -> Option<String> {
        response
            .choices?
            .into_iter()
            .next()?
            .message?
            .content
    }
}

#[async_trait]
impl IntentClassifier for ChatIntentClassifier {
    async fn classify(&self, transcription: &str) -> Result<String, ClassificationError> {
        let url = self.api_url();
        let body = self.build_request(transcription);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClassificationError::RequestFailed(e.to_string()))?;

        let status = response.status();

        // Handle HTTP errors
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ClassificationError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ClassificationError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClassificationError::ApiError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        // Parse response
        let response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ClassificationError::ParseError(e.to_string()))?;

        // Return the model text verbatim; the caller owns the strict
        // command parse, so nothing is trimmed or coerced here.
        Self::extract_content(response).ok_or(ClassificationError::EmptyResponse)
    }
}
