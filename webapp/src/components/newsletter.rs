use dioxus::prelude::*;
use gloo_timers::callback::Timeout;

use landing::newsletter::{CLEAR_AFTER_MS, NewsletterOutcome};

// local-only newsletter signup: validates the address and says thanks
#[component]
pub fn NewsletterBox() -> Element {
    let mut email = use_signal(String::new);
    let mut outcome = use_signal(|| None::<NewsletterOutcome>);
    let mut clear_timer = use_signal(|| None::<Timeout>);

    let subscribe = move |evt: FormEvent| {
        evt.prevent_default();

        let result = NewsletterOutcome::check(&email.peek());
        outcome.set(Some(result));

        if result.is_success() {
            email.set(String::new());
            clear_timer.set(Some(Timeout::new(CLEAR_AFTER_MS, move || {
                outcome.set(None)
            })));
        }
    };

    let shown = outcome().map(|result| (result.color(), result.message()));

    rsx! {
        div { class: "newsletter-box",
            h2 { class: "section-title", "Stay in the loop" }
            p { "One email a month with new work and what we learned building it." }
            form { class: "newsletter-form", novalidate: true, onsubmit: subscribe,
                input {
                    id: "newsletterEmail",
                    class: "form-input",
                    r#type: "email",
                    placeholder: "you@example.com",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                button { class: "btn btn-primary", r#type: "submit", "Subscribe" }
            }
            p { id: "newsletterMessage", class: "newsletter-message",
                if let Some((color, message)) = shown {
                    span { style: "color: {color};", "{message}" }
                }
            }
        }
    }
}
