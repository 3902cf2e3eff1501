use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{Route, common::storage::BrowserStore};
use landing::render::{SubmissionCard, SubmissionsView};

#[derive(Clone, PartialEq, Props)]
struct SubmissionCardViewProps {
    card: SubmissionCard,
}

#[component]
fn SubmissionCardView(props: SubmissionCardViewProps) -> Element {
    let card = &props.card;
    let last = card.message_lines.len().saturating_sub(1);

    rsx! {
        div { class: "submission-card card",
            div { class: "submission-header",
                div {
                    h3 { "{card.name}" }
                    span { class: "submission-email", "{card.email}" }
                }
                span { class: "submission-index", "#{card.index}" }
            }
            if let Some(subject) = &card.subject {
                p {
                    strong { "Subject: " }
                    "{subject}"
                }
            }
            p { class: "submission-message",
                for (i , line) in card.message_lines.iter().enumerate() {
                    "{line}"
                    if i < last {
                        br {}
                    }
                }
            }
            p { class: "submission-meta", "Submitted on {card.submitted_at}" }
        }
    }
}

// read once on mount; the page only changes when it is visited again
#[component]
pub fn Submissions() -> Element {
    let view = use_hook(|| SubmissionsView::load(&BrowserStore));

    let body = match view {
        SubmissionsView::Empty => rsx! {
            div { class: "no-submissions",
                p { "No submissions yet." }
                Link { to: Route::Contact {}, class: "btn btn-primary", "Send the first message" }
            }
        },
        SubmissionsView::Cards(cards) => rsx! {
            for card in cards {
                SubmissionCardView { key: "{card.index}", card: card.clone() }
            }
        },
    };

    rsx! {
        section { id: "submissions",
            div { class: "container contact-wrapper",
                h1 { class: "section-title", "Submissions" }
                div { id: "submissionsContainer", {body} }
            }
        }
    }
}
