// mobile navigation menu
//
// closing the menu always collapses whatever dropdown was open inside it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
    dropdown: Option<usize>,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn dropdown(&self) -> Option<usize> {
        self.dropdown
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open = true;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        self.dropdown = None;
    }

    pub fn toggle_dropdown(&mut self, index: usize) {
        self.dropdown = match self.dropdown {
            Some(current) if current == index => None,
            _ => Some(index),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_and_closes() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn closing_collapses_dropdowns() {
        let mut menu = MenuState::default();
        menu.toggle();
        menu.toggle_dropdown(0);
        assert_eq!(menu.dropdown(), Some(0));

        menu.toggle();
        assert_eq!(menu.dropdown(), None);
    }

    #[test]
    fn dropdown_toggles_per_index() {
        let mut menu = MenuState::default();
        menu.toggle_dropdown(1);
        menu.toggle_dropdown(2);
        assert_eq!(menu.dropdown(), Some(2));
        menu.toggle_dropdown(2);
        assert_eq!(menu.dropdown(), None);
    }
}
