//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the OpenAI transcription and chat APIs.

pub mod openai;

// Re-export adapters
pub use openai::{ChatIntentClassifier, WhisperTranscriber};
