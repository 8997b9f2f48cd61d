//! Domain error types

use thiserror::Error;

/// Error when classifier output fails the strict command parse.
///
/// Each variant names what deviated from the documented command shapes.
/// Deviations are never coerced into the error command; the caller decides
/// how to surface them.
#[derive(Debug, Clone, Error)]
pub enum CommandParseError {
    #[error("output is not a valid JSON command object: {0}")]
    Syntax(String),

    #[error("unknown command mode: \"{0}\"")]
    UnknownMode(String),

    #[error("missing field \"{field}\" for mode \"{mode}\"")]
    MissingField {
        mode: &'static str,
        field: &'static str,
    },

    #[error("unexpected field \"{field}\" for mode \"{mode}\"")]
    UnexpectedField {
        mode: &'static str,
        field: &'static str,
    },

    #[error("field \"{field}\" value {value} is out of range (max {max})")]
    OutOfRange {
        field: &'static str,
        value: u8,
        max: u8,
    },
}
