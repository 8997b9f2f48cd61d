//! HTTP transport - router, request handler, WebSocket fan-out

pub mod config;
pub mod routes;
pub mod ws;

// Re-export common types
pub use config::Cli;
pub use routes::{router, ApiError, AppState, TranscribeResponse};
