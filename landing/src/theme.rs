use anyhow::Result;

use crate::storage::KeyValueStore;

// stored as the bare string, not json
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    // anything other than "dark" (including nothing at all) is the light theme
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    // font awesome icon on the toggle button: the moon offers dark mode, the
    // sun offers light mode
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Light => "fa-moon",
            Theme::Dark => "fa-sun",
        }
    }

    pub fn load<S>(store: &S) -> Self
    where
        S: KeyValueStore + ?Sized,
    {
        Theme::parse(store.get_item(THEME_KEY).as_deref())
    }

    pub fn save<S>(self, store: &S) -> Result<()>
    where
        S: KeyValueStore + ?Sized,
    {
        store.set_item(THEME_KEY, self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn defaults_to_light() {
        assert_eq!(Theme::load(&MemoryStore::new()), Theme::Light);
        assert_eq!(Theme::parse(Some("solarized")), Theme::Light);
    }

    #[test]
    fn toggle_round_trips_through_storage() {
        let store = MemoryStore::new();

        let theme = Theme::load(&store).toggled();
        theme.save(&store).unwrap();
        assert_eq!(store.get_item(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(Theme::load(&store), Theme::Dark);

        Theme::load(&store).toggled().save(&store).unwrap();
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn icon_follows_theme() {
        assert_eq!(Theme::Light.icon_class(), "fa-moon");
        assert_eq!(Theme::Dark.icon_class(), "fa-sun");
    }
}
