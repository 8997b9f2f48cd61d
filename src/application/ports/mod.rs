//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod classifier;
pub mod transcriber;

// Re-export common types
pub use classifier::{ClassificationError, IntentClassifier};
pub use transcriber::{Transcriber, TranscriptionError};
