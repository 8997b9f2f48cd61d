//! VoiceClock - voice command server for a smart clock
//!
//! Accepts a short voice recording over HTTP, transcribes it with the
//! OpenAI Whisper API, extracts a timer/alarm intent with a chat model,
//! and fans the structured command out to connected WebSocket listeners
//! while mirroring it in the HTTP response.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Command model, audio submission, prompt contracts, errors
//! - **Application**: The pipeline use case, port interfaces (traits), and
//!   the listener registry used for fan-out
//! - **Infrastructure**: OpenAI adapter implementations (Whisper, chat)
//! - **Server**: Axum router, request handler, and WebSocket endpoint

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod server;
