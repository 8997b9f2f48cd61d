//! Prompt contracts for the two upstream models

/// Vocabulary hint sent to the transcription API. Biases recognition
/// toward clock vocabulary so short commands come back intact.
const DEFAULT_HINT: &str = "the received audio is meant to be a command for a smart clock, \
which can contain words such as alarm, timer, and other clock and time terms and numbers";

/// Domain-vocabulary hint for the transcriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyHint {
    content: String,
}

impl VocabularyHint {
    /// Build a hint with custom content
    pub fn custom(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Get the hint content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Default for VocabularyHint {
    fn default() -> Self {
        Self {
            content: DEFAULT_HINT.to_string(),
        }
    }
}

/// System instruction implementing the intent-classification contract.
///
/// The worked examples and the "JSON only" requirement pin the model to the
/// three wire shapes; [`crate::domain::Command::parse`] enforces the same
/// contract on the way back in.
const CLASSIFIER_INSTRUCTION: &str = r#"You are the command parser for a smart clock. Convert the transcribed voice command you receive into exactly one JSON object, with no other text.

There are two recognized command families:

1. Timer (a countdown from a stated duration). Respond with:
{"mode": "timer", "time_hour": xx, "time_min": yy, "time_sec": zz}
where xx, yy and zz are the hours, minutes and seconds implied by the stated duration; components the speaker does not mention are 0.
Example: "set a timer for five minutes thirty seconds" -> {"mode":"timer","time_hour":0,"time_min":5,"time_sec":30}
Example: "set a timer for one hour forty five minutes" -> {"mode":"timer","time_hour":1,"time_min":45,"time_sec":0}

2. Alarm (a clock time). Respond with:
{"mode": "alarm", "time_hour": xx, "time_min": yy}
where xx is the hour in 24-hour clock format after resolving AM/PM and relative phrasing, and yy is the minute.
Example: "set an alarm for one pm today" -> {"mode":"alarm","time_hour":13,"time_min":0}
Example: "set an alarm for nine forty five pm" -> {"mode":"alarm","time_hour":21,"time_min":45}

If the input is not a timer or alarm request, respond with:
{"mode": "error"}
Example: "what is the weather like today?" -> {"mode":"error"}

Your output must be only the JSON object in one of the three formats above. Do not add commentary, markdown, code fences, explanations, or any fields beyond those specified."#;

/// Value object carrying the classifier system prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierInstruction {
    content: String,
}

impl ClassifierInstruction {
    /// Get the instruction content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Default for ClassifierInstruction {
    fn default() -> Self {
        Self {
            content: CLASSIFIER_INSTRUCTION.to_string(),
        }
    }
}
