//! Output region: recommendation cards, or the single error line.

use dioxus::prelude::*;

use crate::actions;
use crate::app::{AppState, OutputState};
use crate::types::recommendation::RecommendationItem;

/// The one user-visible failure message. Transport and response failures
/// both collapse to it.
pub const ERROR_MESSAGE: &str = "Error fetching recommendations.";

/// Heading shown above the card list, also for an empty list.
pub const RESULTS_HEADING: &str = "Recommendations";

/// Placeholder when the service sent no distance for an item.
pub const DISTANCE_PLACEHOLDER: &str = "N/A";

/// Display strings for one presentation card.
#[derive(Clone, PartialEq, Debug)]
pub struct CardView {
    pub title: String,
    pub qualification: String,
    pub branch: String,
    pub pincode: String,
    pub stipend: String,
    pub distance: String,
    pub score: String,
}

impl CardView {
    /// Format one item for display. Distance and score are fixed at two
    /// decimal places; the stipend is shown as received, currency-prefixed.
    pub fn from_item(item: &RecommendationItem) -> Self {
        Self {
            title: item.title.clone(),
            qualification: item.required_qualification.clone(),
            branch: item.required_branch.clone(),
            pincode: item.pincode.to_string(),
            stipend: format!("₹{}", item.stipend),
            distance: match item.distance_km {
                Some(km) => format!("{km:.2} km"),
                None => DISTANCE_PLACEHOLDER.to_string(),
            },
            score: format!("{:.2}", item.score),
        }
    }
}

#[component]
pub fn ResultsPanel() -> Element {
    let app_state = use_context::<AppState>();
    let output = app_state.output;

    // Full replace on every state change, never an incremental diff.
    let body = match &*output.read() {
        OutputState::Empty => rsx! {},
        OutputState::Results(items) => rsx! {
            h2 { "{RESULTS_HEADING}" }
            for (idx, item) in items.iter().enumerate() {
                RecommendationCard { key: "{idx}", item: item.clone() }
            }
        },
        OutputState::Error(_) => rsx! {
            p { class: "error", "{ERROR_MESSAGE}" }
        },
    };

    rsx! {
        section {
            id: "output",
            class: "output",
            {body}
        }
    }
}

#[component]
fn RecommendationCard(item: RecommendationItem) -> Element {
    let app_state = use_context::<AppState>();
    let mut notice = app_state.notice;
    let card = CardView::from_item(&item);

    let handle_share = {
        let app_state = app_state.clone();
        let title = item.title.clone();
        let qualification = item.required_qualification.clone();
        move |_| {
            let share = app_state.share.clone();
            let title = title.clone();
            let qualification = qualification.clone();
            let mut notice = notice;
            spawn(async move {
                if let Err(e) =
                    actions::share_recommendation(share.as_deref(), &title, &qualification).await
                {
                    notice.set(Some(e.to_string()));
                }
            });
        }
    };

    let handle_save = {
        let title = item.title.clone();
        let qualification = item.required_qualification.clone();
        let stipend = item.stipend;
        move |_| {
            notice.set(Some(actions::save_pdf(&title, &qualification, stipend)));
        }
    };

    rsx! {
        div { class: "recommendation-card",
            div { class: "recommendation-title", "{card.title}" }
            div { class: "recommendation-details",
                div { "Qualification: {card.qualification}" }
                div { "Branch: {card.branch}" }
                div { "Pincode: {card.pincode}" }
                div { "Stipend: {card.stipend}" }
                div { "Distance: {card.distance}" }
                div { "Score: {card.score}" }
            }
            div { class: "card-actions",
                button { class: "share-btn", onclick: handle_share, "Share" }
                button { class: "save-btn", onclick: handle_save, "Save PDF" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> RecommendationItem {
        RecommendationItem {
            title: "AI Intern".to_string(),
            required_qualification: "B.Tech".to_string(),
            required_branch: "Computer Science".to_string(),
            pincode: 110001,
            stipend: 5000.0,
            distance_km: Some(2.345),
            score: 0.8765,
        }
    }

    #[test]
    fn test_card_formatting() {
        let card = CardView::from_item(&sample_item());
        assert_eq!(card.title, "AI Intern");
        assert_eq!(card.qualification, "B.Tech");
        assert_eq!(card.branch, "Computer Science");
        assert_eq!(card.pincode, "110001");
        assert_eq!(card.stipend, "₹5000");
        assert_eq!(card.distance, "2.35 km");
        assert_eq!(card.score, "0.88");
    }

    #[test]
    fn test_missing_distance_renders_placeholder() {
        let card = CardView::from_item(&RecommendationItem {
            distance_km: None,
            ..sample_item()
        });
        assert_eq!(card.distance, "N/A");
    }

    #[test]
    fn test_fractional_stipend_shown_as_received() {
        let card = CardView::from_item(&RecommendationItem {
            stipend: 7500.5,
            ..sample_item()
        });
        assert_eq!(card.stipend, "₹7500.5");
    }

    #[test]
    fn test_cards_follow_item_order() {
        let mut second = sample_item();
        second.title = "Data Entry Intern".to_string();
        second.score = 0.51;
        let items = vec![sample_item(), second];

        let cards: Vec<CardView> = items.iter().map(CardView::from_item).collect();

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "AI Intern");
        assert_eq!(cards[1].title, "Data Entry Intern");
    }

    #[test]
    fn test_empty_result_produces_no_cards() {
        let items: Vec<RecommendationItem> = Vec::new();
        let cards: Vec<CardView> = items.iter().map(CardView::from_item).collect();
        assert!(cards.is_empty());
    }
}
