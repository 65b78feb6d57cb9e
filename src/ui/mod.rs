//! UI components for InternMitra
//!
//! This module contains all user interface components built with Dioxus.

pub mod form;
pub mod results;

use dioxus::prelude::*;

use crate::app::AppState;
use crate::i18n::labels;
use form::RecommendationForm;
use results::ResultsPanel;

/// Main Application Layout
#[component]
pub fn Layout() -> Element {
    let app_state = use_context::<AppState>();
    let mut language = app_state.language;
    let mut notice = app_state.notice;

    let text = labels(language());

    let notice_banner = match notice() {
        Some(message) => rsx! {
            div { class: "notice",
                span { "{message}" }
                button {
                    class: "notice-dismiss",
                    onclick: move |_| notice.set(None),
                    "✕"
                }
            }
        },
        None => rsx! {},
    };

    rsx! {
        div {
            class: "app",

            link { rel: "stylesheet", href: "assets/styles.css" }

            header {
                class: "app-header",
                h1 { id: "title", "{text.title}" }
                button {
                    id: "lang-toggle",
                    class: "lang-toggle",
                    onclick: move |_| language.set(language().toggled()),
                    "{text.toggle}"
                }
            }

            {notice_banner}

            main {
                class: "app-main",
                RecommendationForm {}
                ResultsPanel {}
            }
        }
    }
}
