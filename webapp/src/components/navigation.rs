use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::debug;

use crate::{
    Route,
    common::{MENU, SCROLL, dom},
    components::theme_toggle::ThemeToggle,
};
use landing::scroll::{SectionFallback, anchor_target, section_fallback};

// in-page sections, in document order
const SECTIONS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("services", "Services"),
    ("about", "About"),
    ("portfolio", "Portfolio"),
    ("testimonials", "Testimonials"),
    ("contact", "Contact"),
];

const PAGES_DROPDOWN: usize = 0;

// scroll to a section on the current page, or fall back to the page that has it
//
// the mobile menu closes either way
pub fn go_to_section(navigator: Navigator, id: &str) {
    if !dom::scroll_to_section(id) {
        match section_fallback(id) {
            Some(SectionFallback::Contact) => {
                navigator.push(Route::Contact {});
            }
            Some(SectionFallback::About) => {
                navigator.push(Route::About {});
            }
            None => debug!(id, "no section to scroll to"),
        }
    }

    MENU.write().close();
}

#[derive(Clone, PartialEq, Props)]
pub struct SectionAnchorProps {
    href: &'static str,
    #[props(default)]
    class: &'static str,
    children: Element,
}

// an in-page "#id" link that scrolls under the header instead of jumping
#[component]
pub fn SectionAnchor(props: SectionAnchorProps) -> Element {
    let href = props.href;
    let navigator = use_navigator();

    rsx! {
        a {
            class: props.class,
            href,
            onclick: move |evt| {
                evt.prevent_default();
                if let Some(id) = anchor_target(href) {
                    go_to_section(navigator, id);
                }
            },
            {props.children}
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct NavSectionLinkProps {
    id: &'static str,
    name: &'static str,
}

#[component]
fn NavSectionLink(props: NavSectionLinkProps) -> Element {
    let id = props.id;
    let name = props.name;
    let navigator = use_navigator();

    let active = use_memo(move || SCROLL.read().is_active(id));

    rsx! {
        li {
            a {
                class: if active() { "active" } else { "" },
                href: "#{id}",
                onclick: move |evt| {
                    evt.prevent_default();
                    go_to_section(navigator, id);
                },
                "{name}"
            }
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let sticky = use_memo(|| SCROLL.read().sticky_header);

    let menu = *MENU.read();
    let dropdown_open = menu.dropdown() == Some(PAGES_DROPDOWN);

    rsx! {
        header {
            id: "header",
            class: if sticky() { "app-header sticky-header" } else { "app-header" },
            // clicks in here never count as outside the menu
            onclick: move |evt| evt.stop_propagation(),

            div { class: "nav-container",
                div { class: "logo",
                    Link { to: Route::Home {}, onclick: move |_| MENU.write().close(), "Lumen" }
                }

                ul { class: if menu.is_open() { "nav-links show" } else { "nav-links" },
                    for (id , name) in SECTIONS {
                        NavSectionLink { key: "{id}", id, name }
                    }

                    li { class: if dropdown_open { "dropdown active" } else { "dropdown" },
                        button {
                            class: "dropdown-toggle",
                            onclick: move |_| MENU.write().toggle_dropdown(PAGES_DROPDOWN),
                            "Pages "
                            i { class: "fa fa-chevron-down" }
                        }
                        ul { class: "dropdown-menu",
                            li {
                                Link {
                                    to: Route::Contact {},
                                    onclick: move |_| MENU.write().close(),
                                    "Contact Form"
                                }
                            }
                            li {
                                Link {
                                    to: Route::Submissions {},
                                    onclick: move |_| MENU.write().close(),
                                    "Submissions"
                                }
                            }
                            li {
                                Link {
                                    to: Route::About {},
                                    onclick: move |_| MENU.write().close(),
                                    "About Us"
                                }
                            }
                        }
                    }
                }

                div { class: "nav-actions",
                    ThemeToggle {}
                    button {
                        class: if menu.is_open() { "menu-toggle active" } else { "menu-toggle" },
                        "aria-label": "Toggle menu",
                        onclick: move |_| MENU.write().toggle(),
                        i { class: "fa fa-bars" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    let show_back_to_top = use_memo(|| SCROLL.read().show_back_to_top);

    rsx! {
        div {
            class: "page",
            onclick: move |_| {
                if MENU.peek().is_open() {
                    MENU.write().close();
                }
            },

            NavBarInner {}

            main { class: "page-content", Outlet::<Route> {} }

            footer { class: "app-footer",
                div { class: "container",
                    p { "Lumen Studio • Design, build and grow" }
                }
            }

            button {
                id: "backToTop",
                class: if show_back_to_top() { "back-to-top show" } else { "back-to-top" },
                "aria-label": "Back to top",
                onclick: move |_| dom::scroll_to(0.0),
                i { class: "fa fa-arrow-up" }
            }
        }
    }
}
