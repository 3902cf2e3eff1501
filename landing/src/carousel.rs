// auto-advance period for the testimonial slider
pub const AUTOPLAY_MS: u32 = 5000;

// cyclic position over a fixed number of slides
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Carousel { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // an empty slider has nothing to rotate through
    pub fn can_autoplay(&self) -> bool {
        !self.is_empty()
    }

    pub fn is_active(&self, index: usize) -> bool {
        !self.is_empty() && self.index == index
    }

    // step by direction, wrapping at both ends
    pub fn advance(&mut self, direction: isize) {
        if self.is_empty() {
            return;
        }

        let len = self.len as isize;
        self.index = (self.index as isize + direction).rem_euclid(len) as usize;
    }

    pub fn next(&mut self) {
        self.advance(1);
    }

    pub fn prev(&mut self) {
        self.advance(-1);
    }

    // jump straight to a slide (the dots); out of range is ignored
    pub fn show(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_non_empty_carousel_autoplays() {
        assert!(Carousel::new(3).can_autoplay());
        assert!(!Carousel::new(0).can_autoplay());
    }

    #[test]
    fn wraps_forward_and_back() {
        let mut carousel = Carousel::new(3);

        carousel.prev();
        assert_eq!(carousel.index(), 2);

        carousel.next();
        assert_eq!(carousel.index(), 0);

        carousel.next();
        carousel.next();
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn show_ignores_out_of_range() {
        let mut carousel = Carousel::new(3);
        carousel.show(2);
        assert!(carousel.is_active(2));

        carousel.show(3);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn empty_never_moves() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.index(), 0);
        assert!(!carousel.is_active(0));
    }

    #[test]
    fn single_slide_stays_put() {
        let mut carousel = Carousel::new(1);
        carousel.next();
        assert!(carousel.is_active(0));
    }
}
