//! Domain layer - Core business logic
//!
//! Contains value objects and domain errors.
//! This layer has no dependencies on external systems.

pub mod audio;
pub mod command;
pub mod error;
pub mod prompt;

// Re-export common types
pub use audio::{AudioData, AudioMimeType};
pub use command::Command;
pub use error::CommandParseError;
pub use prompt::{ClassifierInstruction, VocabularyHint};
