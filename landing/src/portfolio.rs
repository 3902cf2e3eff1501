// portfolio grid filtering
//
// showing an item puts it back in the layout first and fades it in a moment
// later; hiding fades it out first and only drops it from the layout once the
// css transition has finished

pub const FADE_IN_DELAY_MS: u32 = 10;
pub const FADE_OUT_DELAY_MS: u32 = 300;

pub const TRANSITION: &str = "opacity 0.3s ease, transform 0.3s ease";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    pub fn parse(value: &str) -> Self {
        match value {
            "all" => Filter::All,
            other => Filter::Category(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Filter::All => "all",
            Filter::Category(category) => category,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(wanted) => wanted == category,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ItemPhase {
    #[default]
    Shown,
    Entering,
    Leaving,
    Hidden,
}

impl ItemPhase {
    // first half of a filter change
    pub fn begin(self, visible: bool) -> Self {
        match (self, visible) {
            (ItemPhase::Shown, true) => ItemPhase::Shown,
            (_, true) => ItemPhase::Entering,
            (ItemPhase::Hidden, false) => ItemPhase::Hidden,
            (_, false) => ItemPhase::Leaving,
        }
    }

    // second half, once the matching delay has passed
    pub fn settle(self) -> Self {
        match self {
            ItemPhase::Entering => ItemPhase::Shown,
            ItemPhase::Leaving => ItemPhase::Hidden,
            other => other,
        }
    }

    pub fn style(self) -> String {
        let (display, opacity, scale) = match self {
            ItemPhase::Shown => ("block", 1.0, 1.0),
            ItemPhase::Entering | ItemPhase::Leaving => ("block", 0.0, 0.8),
            ItemPhase::Hidden => ("none", 0.0, 0.8),
        };

        format!(
            "display: {display}; opacity: {opacity}; transform: scale({scale}); transition: {TRANSITION};"
        )
    }
}

// apply a filter to every item's category, returning the new phases
pub fn begin_filter(filter: &Filter, categories: &[&str], phases: &[ItemPhase]) -> Vec<ItemPhase> {
    categories
        .iter()
        .zip(phases)
        .map(|(category, phase)| phase.begin(filter.matches(category)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_everything() {
        assert!(Filter::parse("all").matches("web"));
        assert!(Filter::parse("web").matches("web"));
        assert!(!Filter::parse("web").matches("brand"));
        assert_eq!(Filter::parse("brand").as_str(), "brand");
    }

    #[test]
    fn hiding_then_settling() {
        let phases = begin_filter(
            &Filter::parse("web"),
            &["web", "brand"],
            &[ItemPhase::Shown, ItemPhase::Shown],
        );
        assert_eq!(phases, vec![ItemPhase::Shown, ItemPhase::Leaving]);

        let settled: Vec<ItemPhase> = phases.into_iter().map(ItemPhase::settle).collect();
        assert_eq!(settled, vec![ItemPhase::Shown, ItemPhase::Hidden]);
    }

    #[test]
    fn showing_a_hidden_item_fades_in() {
        let phase = ItemPhase::Hidden.begin(true);
        assert_eq!(phase, ItemPhase::Entering);
        assert!(phase.style().starts_with("display: block; opacity: 0;"));
        assert_eq!(phase.settle(), ItemPhase::Shown);
    }

    #[test]
    fn leaving_item_can_come_back() {
        assert_eq!(ItemPhase::Leaving.begin(true), ItemPhase::Entering);
        assert_eq!(ItemPhase::Entering.begin(false), ItemPhase::Leaving);
    }

    #[test]
    fn hidden_style_drops_from_layout() {
        assert!(ItemPhase::Hidden.style().starts_with("display: none;"));
    }
}
