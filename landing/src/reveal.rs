// visibility tracking for reveal-on-scroll elements and count-up counters
//
// both work like an IntersectionObserver: an element is "in view" once the
// fraction of its height inside the viewport reaches a threshold.  reveals
// shrink the bottom of the viewport by a margin so they trigger slightly late

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_BOTTOM_MARGIN: f64 = 50.0;

pub const COUNTER_THRESHOLD: f64 = 0.5;

pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const FRAME_MS: u32 = 16;

// fraction of an element's height between the top of the viewport and
// viewport_height - bottom_margin.  top is relative to the viewport, as in
// getBoundingClientRect()
pub fn visible_fraction(top: f64, height: f64, viewport_height: f64, bottom_margin: f64) -> f64 {
    let view_bottom = viewport_height - bottom_margin;

    if height <= 0.0 {
        return if top >= 0.0 && top <= view_bottom { 1.0 } else { 0.0 };
    }

    let visible = (top + height).min(view_bottom) - top.max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

// one-shot visibility latch
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visibility {
    threshold: f64,
    bottom_margin: f64,
    seen: bool,
}

impl Visibility {
    pub fn reveal() -> Self {
        Visibility {
            threshold: REVEAL_THRESHOLD,
            bottom_margin: REVEAL_BOTTOM_MARGIN,
            seen: false,
        }
    }

    pub fn counter() -> Self {
        Visibility {
            threshold: COUNTER_THRESHOLD,
            bottom_margin: 0.0,
            seen: false,
        }
    }

    pub fn is_seen(&self) -> bool {
        self.seen
    }

    // returns true only on the observation that first crosses the threshold
    pub fn observe(&mut self, top: f64, height: f64, viewport_height: f64) -> bool {
        if self.seen {
            return false;
        }

        let fraction = visible_fraction(top, height, viewport_height, self.bottom_margin);
        if fraction > 0.0 && fraction >= self.threshold {
            self.seen = true;
            return true;
        }

        false
    }
}

// count-up animation
//
// each frame adds target / (duration / frame) and shows the floor of the running
// total; the last frame lands exactly on the target
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    target: u64,
    increment: f64,
    current: f64,
    shown: u64,
    done: bool,
}

impl CountUp {
    pub fn new(target: u64) -> Self {
        CountUp {
            target,
            increment: target as f64 / (COUNTER_DURATION_MS / f64::from(FRAME_MS)),
            current: 0.0,
            shown: 0,
            done: false,
        }
    }

    pub fn shown(&self) -> u64 {
        self.shown
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn step(&mut self) -> u64 {
        if self.done {
            return self.shown;
        }

        self.current += self.increment;
        if self.current < self.target as f64 {
            self.shown = self.current.floor() as u64;
        } else {
            self.shown = self.target;
            self.done = true;
        }

        self.shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_of_partially_visible_element() {
        // 100px tall element, top 50px above the fold of an 800px viewport
        assert_eq!(visible_fraction(750.0, 100.0, 800.0, 0.0), 0.5);
        assert_eq!(visible_fraction(-25.0, 100.0, 800.0, 0.0), 0.75);
        assert_eq!(visible_fraction(900.0, 100.0, 800.0, 0.0), 0.0);
        assert_eq!(visible_fraction(10.0, 100.0, 800.0, 0.0), 1.0);
    }

    #[test]
    fn margin_shrinks_the_viewport() {
        assert_eq!(visible_fraction(750.0, 100.0, 800.0, 50.0), 0.0);
        assert_eq!(visible_fraction(700.0, 100.0, 800.0, 50.0), 0.5);
    }

    #[test]
    fn reveal_latches_once() {
        let mut reveal = Visibility::reveal();

        assert!(!reveal.observe(760.0, 100.0, 800.0));
        assert!(reveal.observe(700.0, 100.0, 800.0));
        assert!(reveal.is_seen());

        // scrolled back out of view, still revealed and no second trigger
        assert!(!reveal.observe(2000.0, 100.0, 800.0));
        assert!(reveal.is_seen());
    }

    #[test]
    fn counter_needs_half_visible() {
        let mut counter = Visibility::counter();
        assert!(!counter.observe(760.0, 100.0, 800.0));
        assert!(counter.observe(750.0, 100.0, 800.0));
    }

    #[test]
    fn count_up_ends_on_target() {
        let mut count = CountUp::new(250);
        let mut frames = 0;
        let mut last = 0;

        while !count.is_done() {
            let shown = count.step();
            assert!(shown >= last);
            assert!(shown <= 250);
            last = shown;
            frames += 1;
        }

        assert_eq!(count.shown(), 250);
        assert_eq!(frames, 125);
    }

    #[test]
    fn count_up_of_zero_finishes_immediately() {
        let mut count = CountUp::new(0);
        assert_eq!(count.step(), 0);
        assert!(count.is_done());
    }
}
