use dioxus::prelude::*;
use gloo_timers::callback::Interval;
use tracing::debug;

use landing::carousel::{AUTOPLAY_MS, Carousel};

#[derive(Clone, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "They rebuilt our site in three weeks and our sign-ups doubled the month after launch.",
        author: "Maya Chen",
        role: "Founder, Brightloop",
    },
    Testimonial {
        quote: "Clear communication, sharp design, and zero surprises on the invoice.",
        author: "Daniel Ortiz",
        role: "Marketing Lead, Northwind",
    },
    Testimonial {
        quote: "The brand refresh finally made us look like the company we already were.",
        author: "Priya Nair",
        role: "CEO, Fieldnote",
    },
];

// the slider's position plus the handle of its auto-advance timer
//
// dropping the Interval cancels it, so stop() is just clearing the handle and
// unmounting the slider stops it too
#[derive(Clone, Copy)]
pub struct CarouselController {
    carousel: Signal<Carousel>,
    timer: Signal<Option<Interval>>,
}

impl CarouselController {
    pub fn start(mut self) {
        if !self.carousel.peek().can_autoplay() {
            return;
        }

        let mut carousel = self.carousel;
        self.timer.set(Some(Interval::new(AUTOPLAY_MS, move || {
            carousel.with_mut(|c| c.next())
        })));
    }

    pub fn stop(mut self) {
        if self.timer.peek().is_some() {
            debug!("testimonial autoplay paused");
        }
        self.timer.set(None);
    }

    pub fn advance(mut self, direction: isize) {
        self.carousel.with_mut(|c| c.advance(direction));
    }

    pub fn show(mut self, index: usize) {
        self.carousel.with_mut(|c| c.show(index));
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.carousel.read().is_active(index)
    }
}

pub fn use_carousel(len: usize) -> CarouselController {
    let carousel = use_signal(|| Carousel::new(len));
    let timer = use_signal(|| None::<Interval>);

    let controller = CarouselController { carousel, timer };

    // nothing is read here, so this runs once after the first render
    use_effect(move || controller.start());

    controller
}

#[component]
pub fn TestimonialSlider() -> Element {
    let controller = use_carousel(TESTIMONIALS.len());

    rsx! {
        div {
            class: "testimonial-slider",
            onmouseenter: move |_| controller.stop(),
            onmouseleave: move |_| controller.start(),

            for (i , testimonial) in TESTIMONIALS.iter().enumerate() {
                div {
                    key: "{i}",
                    class: if controller.is_active(i) { "testimonial-item active" } else { "testimonial-item" },
                    p { class: "testimonial-quote", "“{testimonial.quote}”" }
                    h4 { "{testimonial.author}" }
                    span { class: "submission-meta", "{testimonial.role}" }
                }
            }

            div { class: "testimonial-controls",
                button {
                    class: "btn btn-primary",
                    "aria-label": "Previous testimonial",
                    onclick: move |_| controller.advance(-1),
                    i { class: "fa fa-chevron-left" }
                }
                for (i , number) in (0..TESTIMONIALS.len()).map(|i| (i, i + 1)) {
                    button {
                        key: "{i}",
                        class: if controller.is_active(i) { "dot active" } else { "dot" },
                        "aria-label": "Show testimonial {number}",
                        onclick: move |_| controller.show(i),
                    }
                }
                button {
                    class: "btn btn-primary",
                    "aria-label": "Next testimonial",
                    onclick: move |_| controller.advance(1),
                    i { class: "fa fa-chevron-right" }
                }
            }
        }
    }
}
