//! Root Dioxus application component
//!
//! Holds the shared signals and the capability handles probed once at
//! startup.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::actions::{CommandShare, ShareTarget};
use crate::api::{ErrorKind, RecommendClient, RecommendConfig};
use crate::i18n::Language;
use crate::platform::{self, InstallPrompt};
use crate::speech::{CommandRecognizer, DictationState, SpeechRecognizer};
use crate::types::recommendation::RecommendationItem;
use crate::ui::Layout;

/// Where the current submission stands. Guards the submit control: only one
/// request may be in flight at a time.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SubmissionState {
    Idle,
    InFlight,
    Done,
}

/// What the output region shows. Written only when a response resolves, so
/// previous valid results stay visible while a later request is in flight.
#[derive(Clone, PartialEq, Debug)]
pub enum OutputState {
    Empty,
    Results(Vec<RecommendationItem>),
    Error(ErrorKind),
}

/// Global application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<RecommendClient>,
    pub recognizer: Option<Arc<dyn SpeechRecognizer>>,
    pub share: Option<Arc<dyn ShareTarget>>,
    pub install_prompt: Option<InstallPrompt>,
    pub language: Signal<Language>,
    pub submission: Signal<SubmissionState>,
    pub output: Signal<OutputState>,
    pub dictation: Signal<DictationState>,
    pub notice: Signal<Option<String>>,
}

impl AppState {
    pub fn new() -> Self {
        let recognizer = CommandRecognizer::from_env();
        let share = CommandShare::from_env();
        tracing::info!(
            speech = recognizer.is_some(),
            share = share.is_some(),
            "platform capability probe"
        );
        Self {
            client: Arc::new(RecommendClient::new(RecommendConfig::default())),
            recognizer: recognizer.map(|r| Arc::new(r) as Arc<dyn SpeechRecognizer>),
            share: share.map(|s| Arc::new(s) as Arc<dyn ShareTarget>),
            install_prompt: platform::defer_install_prompt(),
            language: Signal::new(Language::English),
            submission: Signal::new(SubmissionState::Idle),
            output: Signal::new(OutputState::Empty),
            dictation: Signal::new(DictationState::Idle),
            notice: Signal::new(None),
        }
    }
}

#[component]
pub fn App() -> Element {
    let app_state = use_context_provider(AppState::new);

    // One registration attempt at load, fire and forget.
    let client = app_state.client.clone();
    use_future(move || platform::background_worker(client.clone()));

    rsx! {
        Layout {}
    }
}
