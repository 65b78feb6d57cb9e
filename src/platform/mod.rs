//! Platform lifecycle glue
//!
//! Install-prompt deferral and the one-shot background worker, both attempted
//! once at load.

use std::sync::Arc;

use crate::api::RecommendClient;

/// A deferred platform install prompt.
///
/// Captured once at startup with its default behavior suppressed; kept
/// around for a later user-triggered install action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstallPrompt {
    program: String,
}

impl InstallPrompt {
    /// Trigger the retained prompt.
    pub async fn install(&self) {
        match tokio::process::Command::new(&self.program).status().await {
            Ok(status) if status.success() => tracing::info!("install prompt completed"),
            Ok(status) => tracing::warn!("install prompt exited with {status}"),
            Err(e) => tracing::warn!("install prompt failed to start: {e}"),
        }
    }
}

/// Probe for an installable-application facility and defer its prompt.
pub fn defer_install_prompt() -> Option<InstallPrompt> {
    let program = std::env::var("INTERNMITRA_INSTALL_CMD").ok()?;
    if program.is_empty() {
        return None;
    }
    tracing::debug!("install prompt deferred");
    Some(InstallPrompt { program })
}

/// Background worker body: probe service health and log the outcome.
///
/// Fire-and-forget; failures never surface to the user.
pub async fn background_worker(client: Arc<RecommendClient>) {
    match client.health().await {
        Ok(()) => tracing::info!("recommendation service reachable"),
        Err(e) => tracing::warn!("recommendation service health probe failed: {e}"),
    }
}
