use dioxus::prelude::*;

#[component]
pub fn Loader(hidden: bool) -> Element {
    rsx! {
        div { class: if hidden { "loader-wrapper hidden" } else { "loader-wrapper" },
            div { class: "loader" }
        }
    }
}
