//! OpenAI adapter tests against a mocked API host

use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use voice_clock::application::ports::{
    ClassificationError, IntentClassifier, Transcriber, TranscriptionError,
};
use voice_clock::domain::{AudioData, AudioMimeType, VocabularyHint};
use voice_clock::infrastructure::{ChatIntentClassifier, WhisperTranscriber};

fn audio() -> AudioData {
    AudioData::new(vec![1, 2, 3, 4], AudioMimeType::Webm, "cmd.webm")
}

async fn mock_api() -> MockServer {
    MockServer::start().await
}

#[tokio::test]
async fn whisper_returns_transcription_text() {
    let server = mock_api().await;
    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "text": "set a timer for five minutes thirty seconds"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let transcriber = WhisperTranscriber::new("test-key").with_base_url(server.uri());
    let text = transcriber
        .transcribe(&audio(), &VocabularyHint::default())
        .await
        .unwrap();

    assert_eq!(text, "set a timer for five minutes thirty seconds");
}

#[tokio::test]
async fn whisper_form_carries_model_and_hint() {
    let server = mock_api().await;
    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .and(body_string_contains("whisper-1"))
        .and(body_string_contains("smart clock"))
        .and(body_string_contains("cmd.webm"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"text": "set an alarm for one pm"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let transcriber = WhisperTranscriber::new("test-key").with_base_url(server.uri());
    let result = transcriber
        .transcribe(&audio(), &VocabularyHint::default())
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn whisper_maps_unauthorized_to_invalid_api_key() {
    let server = mock_api().await;
    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let transcriber = WhisperTranscriber::new("bad-key").with_base_url(server.uri());
    let result = transcriber
        .transcribe(&audio(), &VocabularyHint::default())
        .await;

    assert!(matches!(result, Err(TranscriptionError::InvalidApiKey)));
}

#[tokio::test]
async fn whisper_maps_too_many_requests_to_rate_limited() {
    let server = mock_api().await;
    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let transcriber = WhisperTranscriber::new("test-key").with_base_url(server.uri());
    let result = transcriber
        .transcribe(&audio(), &VocabularyHint::default())
        .await;

    assert!(matches!(result, Err(TranscriptionError::RateLimited)));
}

#[tokio::test]
async fn whisper_surfaces_server_errors_with_body() {
    let server = mock_api().await;
    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let transcriber = WhisperTranscriber::new("test-key").with_base_url(server.uri());
    let result = transcriber
        .transcribe(&audio(), &VocabularyHint::default())
        .await;

    match result {
        Err(TranscriptionError::ApiError(message)) => {
            assert!(message.contains("500"));
            assert!(message.contains("upstream exploded"));
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn whisper_rejects_blank_transcript() {
    let server = mock_api().await;
    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"text": "  "})))
        .mount(&server)
        .await;

    let transcriber = WhisperTranscriber::new("test-key").with_base_url(server.uri());
    let result = transcriber
        .transcribe(&audio(), &VocabularyHint::default())
        .await;

    assert!(matches!(result, Err(TranscriptionError::EmptyResponse)));
}

#[tokio::test]
async fn chat_returns_assistant_content_verbatim() {
    let server = mock_api().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_string_contains("gpt-3.5-turbo"))
        .and(body_string_contains("smart clock"))
        .and(body_string_contains("set an alarm for nine forty five pm"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": "{\"mode\":\"alarm\",\"time_hour\":21,\"time_min\":45}"
                }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let classifier = ChatIntentClassifier::new("test-key").with_base_url(server.uri());
    let raw = classifier
        .classify("set an alarm for nine forty five pm")
        .await
        .unwrap();

    assert_eq!(raw, r#"{"mode":"alarm","time_hour":21,"time_min":45}"#);
}

#[tokio::test]
async fn chat_maps_unauthorized_to_invalid_api_key() {
    let server = mock_api().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let classifier = ChatIntentClassifier::new("bad-key").with_base_url(server.uri());
    let result = classifier.classify("set a timer for one minute").await;

    assert!(matches!(result, Err(ClassificationError::InvalidApiKey)));
}

#[tokio::test]
async fn chat_rejects_response_without_choices() {
    let server = mock_api().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})))
        .mount(&server)
        .await;

    let classifier = ChatIntentClassifier::new("test-key").with_base_url(server.uri());
    let result = classifier.classify("set a timer for one minute").await;

    assert!(matches!(result, Err(ClassificationError::EmptyResponse)));
}

#[tokio::test]
async fn chat_surfaces_server_errors_with_body() {
    let server = mock_api().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let classifier = ChatIntentClassifier::new("test-key").with_base_url(server.uri());
    let result = classifier.classify("set a timer for one minute").await;

    match result {
        Err(ClassificationError::ApiError(message)) => {
            assert!(message.contains("503"));
            assert!(message.contains("overloaded"));
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}
