use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{Route, components::contact_form::ContactFormBox};
use landing::form::FormConfig;

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { id: "contact",
            div { class: "container contact-wrapper",
                h1 { class: "section-title", "Contact us" }
                p { "Tell us a little about your project and we will be in touch." }

                ContactFormBox { config: FormConfig::CONTACT_PAGE }

                p { class: "submission-meta",
                    Link { to: Route::Submissions {}, "View previous submissions" }
                }
            }
        }
    }
}
