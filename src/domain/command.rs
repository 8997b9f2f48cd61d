//! Voice command value object

use serde::{Deserialize, Serialize};

use crate::domain::error::CommandParseError;

/// Maximum hour value (24-hour clock).
const HOUR_MAX: u8 = 23;
/// Maximum minute/second value.
const SIXTY_MAX: u8 = 59;

/// A classified voice command for the clock.
///
/// Serializes to the wire shapes the clock firmware expects:
/// `{"mode":"timer","time_hour":H,"time_min":M,"time_sec":S}`,
/// `{"mode":"alarm","time_hour":H,"time_min":M}` and `{"mode":"error"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Command {
    /// Duration-based countdown request.
    Timer {
        time_hour: u8,
        time_min: u8,
        time_sec: u8,
    },
    /// Clock-time request, hour in 24-hour format.
    Alarm { time_hour: u8, time_min: u8 },
    /// The utterance was not a timer or alarm request.
    Error,
}

/// Intermediate shape for the strict parse. `deny_unknown_fields` rejects
/// any key outside the documented contract before mode-specific checks run.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCommand {
    mode: String,
    time_hour: Option<u8>,
    time_min: Option<u8>,
    time_sec: Option<u8>,
}

impl Command {
    /// Strictly parse classifier output into a command.
    ///
    /// Only surrounding whitespace is tolerated. Commentary, markdown
    /// fences, unknown fields, missing fields, fields a mode does not
    /// carry, and out-of-range values are all parse failures. A correctly
    /// shaped `{"mode":"error"}` is a successful parse of [`Command::Error`].
    pub fn parse(raw: &str) -> Result<Self, CommandParseError> {
        let raw: RawCommand = serde_json::from_str(raw.trim())
            .map_err(|e| CommandParseError::Syntax(e.to_string()))?;

        match raw.mode.as_str() {
            "timer" => {
                let time_hour = require(raw.time_hour, "timer", "time_hour")?;
                let time_min = require(raw.time_min, "timer", "time_min")?;
                let time_sec = require(raw.time_sec, "timer", "time_sec")?;
                check_range("time_hour", time_hour, HOUR_MAX)?;
                check_range("time_min", time_min, SIXTY_MAX)?;
                check_range("time_sec", time_sec, SIXTY_MAX)?;
                Ok(Self::Timer {
                    time_hour,
                    time_min,
                    time_sec,
                })
            }
            "alarm" => {
                let time_hour = require(raw.time_hour, "alarm", "time_hour")?;
                let time_min = require(raw.time_min, "alarm", "time_min")?;
                forbid(raw.time_sec, "alarm", "time_sec")?;
                check_range("time_hour", time_hour, HOUR_MAX)?;
                check_range("time_min", time_min, SIXTY_MAX)?;
                Ok(Self::Alarm {
                    time_hour,
                    time_min,
                })
            }
            "error" => {
                forbid(raw.time_hour, "error", "time_hour")?;
                forbid(raw.time_min, "error", "time_min")?;
                forbid(raw.time_sec, "error", "time_sec")?;
                Ok(Self::Error)
            }
            other => Err(CommandParseError::UnknownMode(other.to_string())),
        }
    }

    /// Short label for logging.
    pub const fn mode(&self) -> &'static str {
        match self {
            Self::Timer { .. } => "timer",
            Self::Alarm { .. } => "alarm",
            Self::Error => "error",
        }
    }
}

fn require(
    value: Option<u8>,
    mode: &'static str,
    field: &'static str,
) -> Result<u8, CommandParseError> {
    value.ok_or(CommandParseError::MissingField { mode, field })
}

fn forbid(
    value: Option<u8>,
    mode: &'static str,
    field: &'static str,
) -> Result<(), CommandParseError> {
    if value.is_some() {
        return Err(CommandParseError::UnexpectedField { mode, field });
    }
    Ok(())
}

fn check_range(field: &'static str, value: u8, max: u8) -> Result<(), CommandParseError> {
    if value > max {
        return Err(CommandParseError::OutOfRange { field, value, max });
    }
    Ok(())
}
