use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use landing::portfolio::{FADE_IN_DELAY_MS, FADE_OUT_DELAY_MS, Filter, ItemPhase, begin_filter};

struct Project {
    title: &'static str,
    category: &'static str,
    summary: &'static str,
}

static PROJECTS: [Project; 6] = [
    Project {
        title: "Brightloop",
        category: "web",
        summary: "Marketing site and onboarding flow",
    },
    Project {
        title: "Northwind Coffee",
        category: "brand",
        summary: "Identity, packaging and signage",
    },
    Project {
        title: "Fieldnote",
        category: "app",
        summary: "Offline-first note taking for field crews",
    },
    Project {
        title: "Harbor Health",
        category: "web",
        summary: "Patient portal redesign",
    },
    Project {
        title: "Kiln & Co",
        category: "brand",
        summary: "Logo system for a ceramics studio",
    },
    Project {
        title: "Tidewater",
        category: "app",
        summary: "Tide and weather tracker",
    },
];

const FILTERS: [(&str, &str); 4] = [
    ("all", "All"),
    ("web", "Web"),
    ("brand", "Branding"),
    ("app", "Apps"),
];

#[component]
pub fn PortfolioGrid() -> Element {
    let mut filter = use_signal(Filter::default);
    let mut phases = use_signal(|| vec![ItemPhase::Shown; PROJECTS.len()]);

    // bumped on every click so that delayed updates from an older click are dropped
    let mut generation = use_signal(|| 0u32);

    let apply = move |value: &'static str| {
        let next = Filter::parse(value);
        let categories: Vec<&str> = PROJECTS.iter().map(|project| project.category).collect();

        let next_phases = begin_filter(&next, &categories, &phases.peek());
        phases.set(next_phases);
        filter.set(next);

        *generation.write() += 1;
        let current = *generation.peek();

        for (delay, pending) in [
            (FADE_IN_DELAY_MS, ItemPhase::Entering),
            (FADE_OUT_DELAY_MS, ItemPhase::Leaving),
        ] {
            spawn(async move {
                TimeoutFuture::new(delay).await;

                if *generation.peek() != current {
                    return;
                }

                phases.with_mut(|phases| {
                    for phase in phases.iter_mut().filter(|phase| **phase == pending) {
                        *phase = phase.settle();
                    }
                });
            });
        }
    };

    let active = filter.read().as_str().to_owned();
    let items: Vec<(&Project, String)> = PROJECTS
        .iter()
        .zip(phases.read().iter())
        .map(|(project, phase)| (project, phase.style()))
        .collect();

    rsx! {
        div { class: "filter-buttons",
            for (value , label) in FILTERS {
                button {
                    key: "{value}",
                    class: if active == value { "filter-btn active" } else { "filter-btn" },
                    "data-filter": value,
                    onclick: move |_| {
                        let mut apply = apply;
                        apply(value)
                    },
                    "{label}"
                }
            }
        }

        div { class: "portfolio-grid",
            for (project , style) in items {
                div {
                    key: "{project.title}",
                    class: "portfolio-item",
                    "data-category": project.category,
                    style: "{style}",
                    div { class: "portfolio-thumb" }
                    div { class: "portfolio-caption",
                        h3 { "{project.title}" }
                        p { class: "submission-meta", "{project.summary}" }
                    }
                }
            }
        }
    }
}
