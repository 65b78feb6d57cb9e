//! Voice dictation
//!
//! Wraps the platform speech-recognition capability behind a trait. A
//! dictation session is one activation-to-first-transcript cycle, run as a
//! single-shot async task with a hard timeout. Only one session may listen
//! at a time.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tokio::time::timeout;

/// Hard cap on a listening session.
pub const DICTATION_TIMEOUT: Duration = Duration::from_secs(15);

/// Dictation session failures.
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("speech recognition is not available on this platform")]
    Unavailable,
    #[error("the session ended without a transcript")]
    NoTranscript,
    #[error("no transcript within {0:?}")]
    TimedOut(Duration),
    #[error("recognizer failed: {0}")]
    Engine(String),
}

/// Where the current dictation session stands.
#[derive(Clone, PartialEq, Debug)]
pub enum DictationState {
    Idle,
    Listening,
    Completed,
    Failed(String),
}

/// Whether a new session may start. Starting while one is listening would
/// double-listen, so callers must check this first.
pub fn can_begin(state: &DictationState) -> bool {
    !matches!(state, DictationState::Listening)
}

/// A platform speech-recognition capability.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Listen until the first transcript utterance and return it.
    async fn listen_once(&self, locale: &str) -> Result<String, SpeechError>;
}

/// Recognizer backed by an external speech-to-text command.
///
/// The command is invoked as `<program> --locale <tag>` and must print the
/// transcript on its first stdout line.
pub struct CommandRecognizer {
    program: String,
}

impl CommandRecognizer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Probe for the capability. Returns `None` when no recognizer command
    /// is configured.
    pub fn from_env() -> Option<Self> {
        let program = std::env::var("INTERNMITRA_STT_CMD").ok()?;
        if program.is_empty() {
            return None;
        }
        Some(Self::new(program))
    }
}

#[async_trait]
impl SpeechRecognizer for CommandRecognizer {
    async fn listen_once(&self, locale: &str) -> Result<String, SpeechError> {
        let mut child = Command::new(&self.program)
            .arg("--locale")
            .arg(locale)
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| SpeechError::Engine(e.to_string()))?;

        let stdout = child.stdout.take().ok_or(SpeechError::NoTranscript)?;
        let mut lines = BufReader::new(stdout).lines();
        let first_line = lines
            .next_line()
            .await
            .map_err(|e| SpeechError::Engine(e.to_string()))?
            .unwrap_or_default();

        // The session ends at the first utterance; stop the recognizer.
        let _ = child.kill().await;

        let transcript = first_line.trim().to_string();
        if transcript.is_empty() {
            return Err(SpeechError::NoTranscript);
        }
        Ok(transcript)
    }
}

/// Run one dictation session, bounded by [`DICTATION_TIMEOUT`].
pub async fn dictate(
    recognizer: &dyn SpeechRecognizer,
    locale: &str,
) -> Result<String, SpeechError> {
    dictate_with_timeout(recognizer, locale, DICTATION_TIMEOUT).await
}

async fn dictate_with_timeout(
    recognizer: &dyn SpeechRecognizer,
    locale: &str,
    limit: Duration,
) -> Result<String, SpeechError> {
    match timeout(limit, recognizer.listen_once(locale)).await {
        Ok(result) => result,
        Err(_) => Err(SpeechError::TimedOut(limit)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedRecognizer {
        transcript: &'static str,
    }

    #[async_trait]
    impl SpeechRecognizer for CannedRecognizer {
        async fn listen_once(&self, _locale: &str) -> Result<String, SpeechError> {
            Ok(self.transcript.to_string())
        }
    }

    /// Never produces a result, like a microphone session that hears nothing.
    struct SilentRecognizer;

    #[async_trait]
    impl SpeechRecognizer for SilentRecognizer {
        async fn listen_once(&self, _locale: &str) -> Result<String, SpeechError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_first_transcript_is_returned() {
        let recognizer = CannedRecognizer {
            transcript: "machine learning",
        };
        let transcript = dictate(&recognizer, "en-US").await.unwrap();
        assert_eq!(transcript, "machine learning");
    }

    #[tokio::test]
    async fn test_silent_session_times_out() {
        let limit = Duration::from_millis(10);
        let err = dictate_with_timeout(&SilentRecognizer, "hi-IN", limit)
            .await
            .unwrap_err();
        assert!(matches!(err, SpeechError::TimedOut(_)));
    }

    #[test]
    fn test_listening_blocks_a_second_session() {
        assert!(can_begin(&DictationState::Idle));
        assert!(!can_begin(&DictationState::Listening));
        assert!(can_begin(&DictationState::Completed));
        assert!(can_begin(&DictationState::Failed("timeout".to_string())));
    }

    #[test]
    fn test_probe_without_configured_command() {
        std::env::remove_var("INTERNMITRA_STT_CMD");
        assert!(CommandRecognizer::from_env().is_none());
    }
}
