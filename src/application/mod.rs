//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod broadcaster;
pub mod pipeline;
pub mod ports;

// Re-export use cases
pub use broadcaster::CommandBroadcaster;
pub use pipeline::{PipelineError, VoiceCommandOutput, VoiceCommandUseCase};
