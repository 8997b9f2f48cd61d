//! OpenAI API adapters

mod chat;
mod whisper;

pub use chat::ChatIntentClassifier;
pub use whisper::WhisperTranscriber;

/// Default API host for both adapters
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
