//! HTTP routes and request handler

use std::path::Path;
use std::sync::Arc;

use axum::extract::multipart::{Multipart, MultipartError};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use thiserror::Error;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::application::{PipelineError, VoiceCommandUseCase};
use crate::domain::{AudioData, AudioMimeType, Command};

use super::ws::ws_upgrade;

/// Multipart field the client uploads the recording under
const AUDIO_FIELD: &str = "file";

/// Shared server state. The pipeline carries the listener registry, so
/// both the request handler and the WebSocket route reach it through here
/// rather than through any ambient global.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<VoiceCommandUseCase>,
}

/// Build the application router
pub fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/transcribe", post(transcribe))
        .route("/ws", get(ws_upgrade))
        .fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Successful response body for `POST /transcribe`
#[derive(Debug, Serialize)]
pub struct TranscribeResponse {
    pub transcription: String,
    #[serde(rename = "parsedCommand")]
    pub parsed_command: Command,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors surfaced to the HTTP caller
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no audio uploaded")]
    NoAudio,

    #[error("invalid multipart request: {0}")]
    Multipart(#[from] MultipartError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NoAudio | Self::Multipart(_) => StatusCode::BAD_REQUEST,
            Self::Pipeline(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "pipeline failed");
        }
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// `POST /transcribe` - process one audio submission.
///
/// Pulls the `file` field out of the multipart body, runs the pipeline
/// (transcribe, classify, broadcast) and mirrors the broadcast payload in
/// the response. A missing or empty upload is rejected before any
/// upstream call is made.
async fn transcribe(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<TranscribeResponse>, ApiError> {
    let mut audio = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(AUDIO_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or("recording").to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await?;
        let mime_type = AudioMimeType::guess(content_type.as_deref(), &filename);
        audio = Some(AudioData::new(data.to_vec(), mime_type, filename));
        break;
    }

    let audio = audio.filter(|a| !a.is_empty()).ok_or(ApiError::NoAudio)?;
    tracing::info!(
        file = %audio.filename(),
        mime = %audio.mime_type(),
        size = %audio.human_readable_size(),
        "audio submission received"
    );

    let output = state.pipeline.execute(audio).await?;

    Ok(Json(TranscribeResponse {
        transcription: output.transcription,
        parsed_command: output.command,
    }))
}
