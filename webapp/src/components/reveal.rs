use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::common::{SCROLL, dom};
use landing::reveal::{CountUp, FRAME_MS, Visibility};

// re-measure the element on every scroll until its visibility latch trips
fn use_visibility(initial: Visibility) -> (Signal<Option<Rc<MountedData>>>, Signal<Visibility>) {
    let element = use_signal(|| None::<Rc<MountedData>>);
    let mut visibility = use_signal(|| initial);

    use_effect(move || {
        // subscribe to scrolling
        let _ = SCROLL.read().scroll_y;

        let Some(mounted) = element() else {
            return;
        };
        if visibility.peek().is_seen() {
            return;
        }

        spawn(async move {
            let Ok(rect) = mounted.get_client_rect().await else {
                return;
            };

            let mut next = *visibility.peek();
            if next.observe(rect.origin.y, rect.size.height, dom::viewport_height()) {
                visibility.set(next);
            }
        });
    });

    (element, visibility)
}

#[derive(Clone, PartialEq, Props)]
pub struct RevealProps {
    #[props(default = "fade-up")]
    animation: &'static str,
    #[props(default, into)]
    class: String,
    children: Element,
}

#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let (mut element, visibility) = use_visibility(Visibility::reveal());

    let class = if visibility.read().is_seen() {
        format!("{} aos-animate", props.class)
    } else {
        props.class.clone()
    };

    rsx! {
        div {
            "data-aos": props.animation,
            class: "{class}",
            onmounted: move |evt| element.set(Some(evt.data())),
            {props.children}
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct CounterProps {
    target: u64,
    #[props(into)]
    label: String,
    #[props(default, into)]
    suffix: String,
}

// counts up from zero the first time it is half on screen, and never again
#[component]
pub fn Counter(props: CounterProps) -> Element {
    let target = props.target;
    let (mut element, visibility) = use_visibility(Visibility::counter());
    let mut count = use_signal(|| CountUp::new(target));
    let mut started = use_signal(|| false);

    use_effect(move || {
        if !visibility.read().is_seen() || *started.peek() {
            return;
        }
        started.set(true);

        spawn(async move {
            loop {
                let mut next = *count.peek();
                next.step();
                count.set(next);

                if next.is_done() {
                    break;
                }
                TimeoutFuture::new(FRAME_MS).await;
            }
        });
    });

    let shown = count.read().shown();
    let done = count.read().is_done();

    rsx! {
        div { class: "counter-item",
            span {
                class: if done { "counter counted" } else { "counter" },
                "data-target": "{target}",
                onmounted: move |evt| element.set(Some(evt.data())),
                "{shown}{props.suffix}"
            }
            p { "{props.label}" }
        }
    }
}
