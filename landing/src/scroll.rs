// scroll-driven page state
//
// the webapp measures the page on every scroll event and feeds the numbers in
// here; every threshold is a strict comparison against window.scrollY

pub const STICKY_HEADER_AT: f64 = 100.0;
pub const BACK_TO_TOP_AT: f64 = 300.0;

// a section becomes active this far before its top reaches the viewport
pub const ACTIVE_SECTION_OFFSET: f64 = 200.0;

pub const PARALLAX_RATE: f64 = 0.5;

#[derive(Clone, Debug, PartialEq)]
pub struct SectionTop {
    pub id: String,
    pub top: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub translate_y: f64,
    pub opacity: f64,
}

impl Default for Parallax {
    fn default() -> Self {
        Parallax {
            translate_y: 0.0,
            opacity: 1.0,
        }
    }
}

impl Parallax {
    pub fn style(&self) -> String {
        format!(
            "transform: translateY({}px); opacity: {};",
            self.translate_y, self.opacity
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    pub sticky_header: bool,
    pub show_back_to_top: bool,
    pub active_section: Option<String>,
    pub parallax: Parallax,
}

impl ScrollSnapshot {
    // sections must be in document order.  once the hero has scrolled out of
    // view the parallax stops updating and keeps whatever was last applied
    pub fn measure(
        scroll_y: f64,
        sections: &[SectionTop],
        hero_height: Option<f64>,
        previous: Parallax,
    ) -> Self {
        ScrollSnapshot {
            scroll_y,
            sticky_header: scroll_y > STICKY_HEADER_AT,
            show_back_to_top: scroll_y > BACK_TO_TOP_AT,
            active_section: active_section(scroll_y, sections).map(str::to_owned),
            parallax: hero_height
                .and_then(|height| parallax(scroll_y, height))
                .unwrap_or(previous),
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_section.as_deref() == Some(id)
    }
}

pub fn active_section(scroll_y: f64, sections: &[SectionTop]) -> Option<&str> {
    sections
        .iter()
        .filter(|section| scroll_y >= section.top - ACTIVE_SECTION_OFFSET)
        .last()
        .map(|section| section.id.as_str())
}

pub fn parallax(scroll_y: f64, hero_height: f64) -> Option<Parallax> {
    if hero_height <= 0.0 || scroll_y >= hero_height {
        return None;
    }

    Some(Parallax {
        translate_y: scroll_y * PARALLAX_RATE,
        opacity: 1.0 - scroll_y / hero_height,
    })
}

// where window.scrollTo should land so the section clears the fixed header
pub fn section_scroll_target(section_top: f64, header_height: f64) -> f64 {
    section_top - header_height
}

// in-page anchors that have a page of their own when the section isn't there
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionFallback {
    Contact,
    About,
}

pub fn section_fallback(id: &str) -> Option<SectionFallback> {
    match id {
        "contact" => Some(SectionFallback::Contact),
        "about" => Some(SectionFallback::About),
        _ => None,
    }
}

// "#services" -> "services"; a bare "#" is not an anchor we scroll to
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionTop> {
        [("hero", 0.0), ("services", 700.0), ("about", 1400.0)]
            .into_iter()
            .map(|(id, top)| SectionTop {
                id: id.into(),
                top,
            })
            .collect()
    }

    #[test]
    fn thresholds_are_strict() {
        let at = |y| ScrollSnapshot::measure(y, &[], None, Parallax::default());

        assert!(!at(100.0).sticky_header);
        assert!(at(100.5).sticky_header);
        assert!(!at(300.0).show_back_to_top);
        assert!(at(301.0).show_back_to_top);
    }

    #[test]
    fn active_section_uses_offset() {
        let sections = sections();

        assert_eq!(active_section(0.0, &sections), Some("hero"));
        assert_eq!(active_section(499.0, &sections), Some("hero"));
        assert_eq!(active_section(500.0, &sections), Some("services"));
        assert_eq!(active_section(5000.0, &sections), Some("about"));
        assert_eq!(active_section(0.0, &[]), None);
    }

    #[test]
    fn nothing_active_above_first_section() {
        let sections = vec![SectionTop {
            id: "late".into(),
            top: 900.0,
        }];
        assert_eq!(active_section(100.0, &sections), None);
    }

    #[test]
    fn parallax_tracks_scroll_inside_hero() {
        let p = parallax(200.0, 800.0).unwrap();
        assert_eq!(p.translate_y, 100.0);
        assert_eq!(p.opacity, 0.75);

        assert_eq!(parallax(800.0, 800.0), None);
        assert_eq!(parallax(10.0, 0.0), None);
    }

    #[test]
    fn parallax_holds_last_value_past_hero() {
        let previous = Parallax {
            translate_y: 390.0,
            opacity: 0.025,
        };
        let snapshot = ScrollSnapshot::measure(2000.0, &[], Some(800.0), previous);
        assert_eq!(snapshot.parallax, previous);
    }

    #[test]
    fn anchors_and_fallbacks() {
        assert_eq!(anchor_target("#services"), Some("services"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/contact"), None);

        assert_eq!(section_fallback("contact"), Some(SectionFallback::Contact));
        assert_eq!(section_fallback("about"), Some(SectionFallback::About));
        assert_eq!(section_fallback("portfolio"), None);

        assert_eq!(section_scroll_target(700.0, 80.0), 620.0);
    }
}
