#![allow(non_snake_case)]
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;
use gloo_timers::callback::Timeout;

use tracing::Level;

mod common;
use common::{SCROLL, THEME, dom};

mod components;
use components::{loader::Loader, navigation::NavBar};

mod about;
use about::About;

mod contact;
use contact::Contact;

mod home;
use home::Home;

mod submissions;
use submissions::Submissions;

// the loader overlay fades out this long after the app mounts
const LOADER_MS: u32 = 500;

const FONT_AWESOME: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/contact")]
        Contact {},
        #[route("/submissions")]
        Submissions {},
}

#[component]
pub fn App() -> Element {
    let mut loaded = use_signal(|| false);

    // held by the hook so that unmounting cancels it
    use_hook(move || Rc::new(Timeout::new(LOADER_MS, move || loaded.set(true))));

    use_hook(|| {
        dom::install_scroll_listener(|| {
            let snapshot = dom::measure_scroll(SCROLL.peek().parallax);

            if *SCROLL.peek() != snapshot {
                *SCROLL.write() = snapshot;
            }
        })
    });

    // re-runs whenever the theme is toggled
    use_effect(|| dom::apply_theme(*THEME.read()));

    rsx! {
        document::Link { rel: "stylesheet", href: FONT_AWESOME }
        style { "{common::style::LANDING_STYLES}" }
        Loader { hidden: loaded() }
        Router::<Route> { config: RouterConfig::default }
    }
}
