use dioxus::prelude::*;
use tracing::debug;

use crate::common::{THEME, storage::BrowserStore};

#[component]
pub fn ThemeToggle() -> Element {
    let icon = THEME.read().icon_class();

    rsx! {
        button {
            class: "theme-toggle",
            "aria-label": "Toggle dark mode",
            onclick: move |_| {
                let next = THEME.peek().toggled();
                *THEME.write() = next;
                debug!(theme = next.as_str(), "theme toggled");

                // App's effect sets the attribute
                if let Err(err) = next.save(&BrowserStore) {
                    debug!(%err, "theme not persisted");
                }
            },
            i { class: "fa {icon}" }
        }
    }
}
