//! VoiceClock server entry point

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use voice_clock::application::{CommandBroadcaster, VoiceCommandUseCase};
use voice_clock::infrastructure::{ChatIntentClassifier, WhisperTranscriber};
use voice_clock::server::{router, AppState, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let transcriber = WhisperTranscriber::with_model(&cli.api_key, &cli.whisper_model)
        .with_base_url(&cli.openai_base_url);
    let classifier = ChatIntentClassifier::with_model(&cli.api_key, &cli.chat_model)
        .with_base_url(&cli.openai_base_url);

    let pipeline = VoiceCommandUseCase::new(
        Box::new(transcriber),
        Box::new(classifier),
        CommandBroadcaster::new(),
    );
    let state = AppState {
        pipeline: Arc::new(pipeline),
    };

    let app = router(state, &cli.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, static_dir = %cli.static_dir.display(), "voice-clock listening");
    axum::serve(listener, app)
        .await
        .context("server terminated unexpectedly")?;

    Ok(())
}
