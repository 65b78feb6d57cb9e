//! Card actions: share and save.
//!
//! Share delegates to a platform share facility when one is present; save
//! is an acknowledgment only, with real document generation left to a
//! collaborator library.

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Sharing not supported")]
    ShareUnsupported,
    #[error("share failed: {0}")]
    ShareFailed(String),
}

/// A platform share facility, probed before use.
#[async_trait]
pub trait ShareTarget: Send + Sync {
    async fn share(&self, title: &str, text: &str) -> Result<(), ActionError>;
}

/// Share bridge backed by an external command, invoked as
/// `<program> <title> <text>`.
pub struct CommandShare {
    program: String,
}

impl CommandShare {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Probe for the capability. Returns `None` when no share command is
    /// configured.
    pub fn from_env() -> Option<Self> {
        let program = std::env::var("INTERNMITRA_SHARE_CMD").ok()?;
        if program.is_empty() {
            return None;
        }
        Some(Self::new(program))
    }
}

#[async_trait]
impl ShareTarget for CommandShare {
    async fn share(&self, title: &str, text: &str) -> Result<(), ActionError> {
        let status = Command::new(&self.program)
            .arg(title)
            .arg(text)
            .status()
            .await
            .map_err(|e| ActionError::ShareFailed(e.to_string()))?;
        if !status.success() {
            return Err(ActionError::ShareFailed(format!(
                "share command exited with {status}"
            )));
        }
        Ok(())
    }
}

/// The fixed share text for a recommendation: `(title, body)`.
pub fn share_summary(title: &str, qualification: &str) -> (String, String) {
    (
        "Internship Recommendation".to_string(),
        format!("Check out this internship: {title} requiring {qualification}"),
    )
}

/// Share one recommendation through the platform facility, if any.
pub async fn share_recommendation(
    target: Option<&dyn ShareTarget>,
    title: &str,
    qualification: &str,
) -> Result<(), ActionError> {
    let target = target.ok_or(ActionError::ShareUnsupported)?;
    let (summary_title, text) = share_summary(title, qualification);
    target.share(&summary_title, &text).await
}

/// Acknowledge a save request. No document is produced here.
pub fn save_pdf(title: &str, qualification: &str, stipend: f64) -> String {
    tracing::info!("save requested for '{title}' ({qualification}, stipend {stipend})");
    format!("PDF saved for {title}")
}
