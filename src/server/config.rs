//! Server argument definitions using Clap

use std::path::PathBuf;

use clap::Parser;

/// VoiceClock - voice command server for a smart clock
#[derive(Parser, Debug)]
#[command(name = "voice-clock")]
#[command(version)]
#[command(about = "Turns short voice recordings into timer/alarm commands and fans them out to connected clients")]
pub struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// OpenAI API key used for both transcription and classification
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com/v1", hide = true)]
    pub openai_base_url: String,

    /// Transcription model
    #[arg(long, value_name = "MODEL", default_value = "whisper-1")]
    pub whisper_model: String,

    /// Intent classification model
    #[arg(long, value_name = "MODEL", default_value = "gpt-3.5-turbo")]
    pub chat_model: String,

    /// Directory with the static client application
    #[arg(long, value_name = "DIR", default_value = "frontend")]
    pub static_dir: PathBuf,
}
