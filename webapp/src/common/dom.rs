use gloo_console::error as console_error;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions};

use landing::{
    scroll::{Parallax, ScrollSnapshot, SectionTop, section_scroll_target},
    theme::Theme,
};

// thin adapters over the browser dom
//
// nothing here decides anything: it reads geometry for landing::scroll and
// landing::reveal, or applies what they computed.  every lookup is optional, so
// a page without a hero or without sections measures as if they weren't there

fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

fn html_element(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

pub fn install_scroll_listener<F>(mut on_scroll: F)
where
    F: FnMut() + 'static,
{
    let Some(window) = web_sys::window() else {
        return;
    };

    let callback = Closure::<dyn FnMut()>::new(move || on_scroll());

    if let Err(err) =
        window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
    {
        console_error!(format!("Failed to listen for scroll events: {err:?}"));
        return;
    }

    // the listener lives as long as the page does
    callback.forget();
}

pub fn measure_scroll(previous: Parallax) -> ScrollSnapshot {
    let Some(window) = web_sys::window() else {
        return ScrollSnapshot::default();
    };

    let scroll_y = window.scroll_y().unwrap_or_default();

    let Some(document) = window.document() else {
        return ScrollSnapshot::measure(scroll_y, &[], None, previous);
    };

    let mut sections = Vec::new();
    if let Ok(nodes) = document.query_selector_all("section[id]") {
        for i in 0..nodes.length() {
            if let Some(section) = nodes
                .item(i)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            {
                sections.push(SectionTop {
                    id: section.id(),
                    top: f64::from(section.offset_top()),
                });
            }
        }
    }

    let hero_height = html_element(&document, ".hero").map(|hero| f64::from(hero.offset_height()));

    ScrollSnapshot::measure(scroll_y, &sections, hero_height, previous)
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_height().ok())
        .and_then(|height| height.as_f64())
        .unwrap_or_default()
}

pub fn scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);

    window.scroll_to_with_scroll_to_options(&options);
}

// returns false when the section isn't on the current page
pub fn scroll_to_section(id: &str) -> bool {
    let Some(document) = document() else {
        return false;
    };

    let Some(section) = document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return false;
    };

    let header_height = html_element(&document, "header")
        .map(|header| f64::from(header.offset_height()))
        .unwrap_or_default();

    scroll_to(section_scroll_target(
        f64::from(section.offset_top()),
        header_height,
    ));

    true
}

pub fn apply_theme(theme: Theme) {
    let Some(root) = document().and_then(|document| document.document_element()) else {
        return;
    };

    if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
        console_error!(format!("Failed to apply theme: {err:?}"));
    }
}
