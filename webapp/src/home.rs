use dioxus::prelude::*;

use crate::{
    common::SCROLL,
    components::{
        carousel::TestimonialSlider,
        contact_form::ContactFormBox,
        navigation::SectionAnchor,
        newsletter::NewsletterBox,
        portfolio::PortfolioGrid,
        reveal::{Counter, Reveal},
    },
};
use landing::form::FormConfig;

const SERVICES: [(&str, &str, &str); 3] = [
    (
        "fa-pen-ruler",
        "Design",
        "Interfaces and identities that are easy to use and hard to forget.",
    ),
    (
        "fa-code",
        "Development",
        "Fast, accessible sites built to be maintained long after launch.",
    ),
    (
        "fa-chart-line",
        "Growth",
        "Measured experiments that turn visitors into customers.",
    ),
];

#[component]
pub fn Home() -> Element {
    let parallax = use_memo(|| SCROLL.read().parallax.style());

    rsx! {
        section { id: "home", class: "hero",
            div { class: "container",
                div { class: "hero-content", style: "{parallax}",
                    h1 { class: "hero-title", "We build websites people remember" }
                    p { class: "hero-subtitle",
                        "Lumen is a small studio for design, development and everything between."
                    }
                    div { class: "hero-actions",
                        SectionAnchor { href: "#portfolio", class: "btn btn-primary", "See our work" }
                        SectionAnchor { href: "#contact", class: "btn btn-outline", "Get in touch" }
                    }
                }
            }
            SectionAnchor { href: "#services", class: "scroll-indicator",
                i { class: "fa fa-chevron-down" }
            }
        }

        section { id: "services",
            div { class: "container",
                h2 { class: "section-title", "What we do" }
                div { class: "services-grid",
                    for (icon , title , text) in SERVICES {
                        Reveal { key: "{title}", class: "card service-card",
                            i { class: "fa {icon}" }
                            h3 { "{title}" }
                            p { "{text}" }
                        }
                    }
                }
                div { class: "counters-grid",
                    Counter { target: 120, label: "Projects shipped", suffix: "+" }
                    Counter { target: 85, label: "Happy clients" }
                    Counter { target: 12, label: "Years in business" }
                }
            }
        }

        section { id: "about", class: "section-alt",
            div { class: "container",
                Reveal { animation: "fade-left",
                    h2 { class: "section-title", "About us" }
                    p {
                        "We are designers and engineers who like small teams and short feedback loops. "
                        "Every project gets the same people from the first sketch to the last deploy."
                    }
                }
            }
        }

        section { id: "portfolio",
            div { class: "container",
                h2 { class: "section-title", "Selected work" }
                PortfolioGrid {}
            }
        }

        section { id: "testimonials", class: "section-alt",
            div { class: "container",
                h2 { class: "section-title", "What clients say" }
                TestimonialSlider {}
            }
        }

        section { id: "newsletter",
            div { class: "container", NewsletterBox {} }
        }

        section { id: "contact", class: "section-alt",
            div { class: "container contact-wrapper",
                h2 { class: "section-title", "Start a project" }
                ContactFormBox { config: FormConfig::HOME_SECTION }
            }
        }
    }
}
