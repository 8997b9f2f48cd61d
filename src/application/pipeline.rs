//! Voice command use case

use thiserror::Error;

use crate::domain::{AudioData, Command, CommandParseError, VocabularyHint};

use super::broadcaster::CommandBroadcaster;
use super::ports::{ClassificationError, IntentClassifier, Transcriber, TranscriptionError};

/// Errors from the voice command pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Transcription failed: {0}")]
    Transcription(#[from] TranscriptionError),

    #[error("Classification failed: {0}")]
    Classification(#[from] ClassificationError),

    #[error("Classifier returned a malformed command: {0}")]
    MalformedCommand(#[from] CommandParseError),
}

/// Output from one processed submission
#[derive(Debug, Clone)]
pub struct VoiceCommandOutput {
    /// The raw transcription text
    pub transcription: String,
    /// The classified command
    pub command: Command,
}

/// Orchestrates one audio submission end to end:
/// transcribe, classify, strict-parse, broadcast.
///
/// The broadcast sits after the strict parse, so a failure anywhere in the
/// pipeline means no listener ever sees a command for that submission. A
/// successfully parsed `{"mode":"error"}` is a normal result and is
/// broadcast like any other command.
pub struct VoiceCommandUseCase {
    transcriber: Box<dyn Transcriber>,
    classifier: Box<dyn IntentClassifier>,
    broadcaster: CommandBroadcaster,
    hint: VocabularyHint,
}

impl VoiceCommandUseCase {
    /// Create a new use case instance
    pub fn new(
        transcriber: Box<dyn Transcriber>,
        classifier: Box<dyn IntentClassifier>,
        broadcaster: CommandBroadcaster,
    ) -> Self {
        Self {
            transcriber,
            classifier,
            broadcaster,
            hint: VocabularyHint::default(),
        }
    }

    /// Replace the default transcription vocabulary hint
    pub fn with_hint(mut self, hint: VocabularyHint) -> Self {
        self.hint = hint;
        self
    }

    /// The listener registry this pipeline broadcasts into
    pub fn broadcaster(&self) -> &CommandBroadcaster {
        &self.broadcaster
    }

    /// Process one audio submission.
    pub async fn execute(&self, audio: AudioData) -> Result<VoiceCommandOutput, PipelineError> {
        let transcription = self.transcriber.transcribe(&audio, &self.hint).await?;
        drop(audio);
        tracing::debug!(text = %transcription, "transcription received");

        let raw = self.classifier.classify(&transcription).await?;
        let command = Command::parse(&raw)?;

        let delivered = self.broadcaster.broadcast(&command);
        tracing::info!(mode = command.mode(), listeners = delivered, "voice command broadcast");

        Ok(VoiceCommandOutput {
            transcription,
            command,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::broadcast::error::TryRecvError;

    struct MockTranscriber {
        result: Result<String, TranscriptionError>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Transcriber for MockTranscriber {
        async fn transcribe(
            &self,
            _audio: &AudioData,
            _hint: &VocabularyHint,
        ) -> Result<String, TranscriptionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    struct MockClassifier {
        result: Result<String, ClassificationError>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl IntentClassifier for MockClassifier {
        async fn classify(&self, _transcription: &str) -> Result<String, ClassificationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn audio() -> AudioData {
        AudioData::new(vec![0u8; 16], Default::default(), "cmd.webm")
    }

    fn use_case(
        transcription: Result<String, TranscriptionError>,
        classification: Result<String, ClassificationError>,
    ) -> (VoiceCommandUseCase, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let t_calls = Arc::new(AtomicUsize::new(0));
        let c_calls = Arc::new(AtomicUsize::new(0));
        let use_case = VoiceCommandUseCase::new(
            Box::new(MockTranscriber {
                result: transcription,
                calls: Arc::clone(&t_calls),
            }),
            Box::new(MockClassifier {
                result: classification,
                calls: Arc::clone(&c_calls),
            }),
            CommandBroadcaster::new(),
        );
        (use_case, t_calls, c_calls)
    }

    #[tokio::test]
    async fn timer_command_flows_through() {
        let (use_case, _, _) = use_case(
            Ok("set a timer for five minutes thirty seconds".into()),
            Ok(r#"{"mode":"timer","time_hour":0,"time_min":5,"time_sec":30}"#.into()),
        );
        let mut rx = use_case.broadcaster().subscribe();

        let output = use_case.execute(audio()).await.unwrap();

        assert_eq!(
            output.transcription,
            "set a timer for five minutes thirty seconds"
        );
        assert_eq!(
            output.command,
            Command::Timer {
                time_hour: 0,
                time_min: 5,
                time_sec: 30
            }
        );
        // the broadcast carries the same command the caller gets back
        assert_eq!(rx.try_recv().unwrap(), output.command);
    }

    #[tokio::test]
    async fn recognized_non_command_is_success_and_broadcast() {
        let (use_case, _, _) = use_case(
            Ok("what is the weather like today?".into()),
            Ok(r#"{"mode":"error"}"#.into()),
        );
        let mut rx = use_case.broadcaster().subscribe();

        let output = use_case.execute(audio()).await.unwrap();

        assert_eq!(output.command, Command::Error);
        assert_eq!(rx.try_recv().unwrap(), Command::Error);
    }

    #[tokio::test]
    async fn transcription_failure_aborts_before_classifier() {
        let (use_case, t_calls, c_calls) = use_case(
            Err(TranscriptionError::RequestFailed("timed out".into())),
            Ok(r#"{"mode":"error"}"#.into()),
        );
        let mut rx = use_case.broadcaster().subscribe();

        let result = use_case.execute(audio()).await;

        assert!(matches!(result, Err(PipelineError::Transcription(_))));
        assert_eq!(t_calls.load(Ordering::SeqCst), 1);
        assert_eq!(c_calls.load(Ordering::SeqCst), 0);
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test]
    async fn classification_transport_failure_is_not_broadcast() {
        let (use_case, _, _) = use_case(
            Ok("set an alarm for nine".into()),
            Err(ClassificationError::ApiError("HTTP 503".into())),
        );
        let mut rx = use_case.broadcaster().subscribe();

        let result = use_case.execute(audio()).await;

        assert!(matches!(result, Err(PipelineError::Classification(_))));
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test]
    async fn malformed_classifier_output_is_not_coerced_or_broadcast() {
        let (use_case, _, _) = use_case(
            Ok("set an alarm for nine forty five pm".into()),
            Ok("I think you want an alarm at 21:45!".into()),
        );
        let mut rx = use_case.broadcaster().subscribe();

        let result = use_case.execute(audio()).await;

        assert!(matches!(result, Err(PipelineError::MalformedCommand(_))));
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }
}
