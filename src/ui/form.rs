//! Input form: qualification, branch, pincode, and interest text with
//! voice dictation.

use dioxus::prelude::*;

use crate::app::{AppState, OutputState, SubmissionState};
use crate::i18n::labels;
use crate::speech::{self, DictationState, SpeechError};
use crate::types::recommendation::{FormInput, BRANCHES, QUALIFICATIONS};

#[component]
pub fn RecommendationForm() -> Element {
    let app_state = use_context::<AppState>();
    let language = app_state.language;
    let text = labels(language());

    let mut qualification = use_signal(|| QUALIFICATIONS[0].to_string());
    let mut branch = use_signal(|| BRANCHES[0].to_string());
    let mut pincode = use_signal(String::new);
    let mut interest = use_signal(String::new);

    let mut submission = app_state.submission;
    let mut dictation = app_state.dictation;
    let mut notice = app_state.notice;

    let in_flight = matches!(*submission.read(), SubmissionState::InFlight);
    let listening = matches!(*dictation.read(), DictationState::Listening);

    let handle_submit = {
        let app_state = app_state.clone();
        move |_| {
            // Only one submission at a time.
            if matches!(*submission.read(), SubmissionState::InFlight) {
                return;
            }

            let input =
                match FormInput::new(&qualification(), &branch(), &pincode(), &interest()) {
                    Ok(input) => input,
                    Err(e) => {
                        notice.set(Some(e.to_string()));
                        return;
                    }
                };

            tracing::info!("submitting for pincode {}", input.pincode);
            submission.set(SubmissionState::InFlight);

            let client = app_state.client.clone();
            let mut submission = submission;
            let mut output = app_state.output;
            spawn(async move {
                match client.submit(&input).await {
                    Ok(items) => output.set(OutputState::Results(items)),
                    Err(e) => {
                        tracing::error!("submission failed ({:?}): {e}", e.kind());
                        output.set(OutputState::Error(e.kind()));
                    }
                }
                submission.set(SubmissionState::Done);
            });
        }
    };

    let handle_dictate = {
        let app_state = app_state.clone();
        move |_| {
            // A session is already listening; a second one would double-listen.
            if !speech::can_begin(&dictation.read()) {
                tracing::debug!("dictation already listening, ignoring");
                return;
            }

            let Some(recognizer) = app_state.recognizer.clone() else {
                notice.set(Some(SpeechError::Unavailable.to_string()));
                return;
            };

            let locale = language().locale_tag();
            dictation.set(DictationState::Listening);

            let mut dictation = dictation;
            let mut interest = interest;
            spawn(async move {
                match speech::dictate(recognizer.as_ref(), locale).await {
                    Ok(transcript) => {
                        tracing::info!("dictation completed ({locale})");
                        interest.set(transcript);
                        dictation.set(DictationState::Completed);
                    }
                    Err(e) => {
                        // The field stays unchanged; no retry.
                        tracing::warn!("dictation failed: {e}");
                        dictation.set(DictationState::Failed(e.to_string()));
                    }
                }
            });
        }
    };

    rsx! {
        div {
            class: "input-form",

            div { class: "field",
                label { id: "qual-label", r#for: "qualification", "{text.qualification}" }
                select {
                    id: "qualification",
                    value: "{qualification}",
                    onchange: move |evt| qualification.set(evt.value()),
                    for choice in QUALIFICATIONS {
                        option { value: "{choice}", "{choice}" }
                    }
                }
            }

            div { class: "field",
                label { id: "branch-label", r#for: "branch", "{text.branch}" }
                select {
                    id: "branch",
                    value: "{branch}",
                    onchange: move |evt| branch.set(evt.value()),
                    for choice in BRANCHES {
                        option { value: "{choice}", "{choice}" }
                    }
                }
            }

            div { class: "field",
                label { id: "pin-label", r#for: "pincode", "{text.pincode}" }
                input {
                    id: "pincode",
                    r#type: "number",
                    value: "{pincode}",
                    oninput: move |evt| pincode.set(evt.value()),
                }
            }

            div { class: "field",
                label { id: "emoji-label", r#for: "emoji", "{text.interest}" }
                div { class: "interest-row",
                    input {
                        id: "emoji",
                        r#type: "text",
                        value: "{interest}",
                        oninput: move |evt| interest.set(evt.value()),
                    }
                    button {
                        id: "voice-btn",
                        class: "voice-btn",
                        title: "Speak",
                        disabled: listening,
                        onclick: handle_dictate,
                        if listening { "…" } else { "🎤" }
                    }
                }
            }

            button {
                id: "submit-btn",
                class: "submit-btn",
                disabled: in_flight,
                onclick: handle_submit,
                "{text.submit}"
            }
        }
    }
}
