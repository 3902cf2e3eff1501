use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{Route, components::reveal::Reveal};

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: "about",
            div { class: "container",
                Reveal {
                    h1 { class: "section-title", "About Lumen" }
                    p {
                        "Lumen started as two freelancers sharing a desk. Today we are a studio of "
                        "designers and engineers working with founders, nonprofits and local businesses."
                    }
                    p {
                        "We keep teams small, ship early and stay around after launch to see what "
                        "actually works."
                    }
                }
                Reveal { animation: "fade-left",
                    h2 { "Work with us" }
                    p {
                        "Have something in mind? "
                        Link { to: Route::Contact {}, "Send us a message" }
                        " and we will get back to you within a day."
                    }
                }
            }
        }
    }
}
