use std::str::FromStr;

use anyhow::{Context, Result};
use strum::{AsRefStr, Display, EnumString};

use crate::storage::KeyValueStore;

pub const THEME_KEY: &str = "theme";
pub const VIEW_MODE_KEY: &str = "viewCode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

/// Display preferences kept next to the link list in the same storage area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    /// `None` until the user picks one; the presentation layer follows the system scheme.
    pub theme: Option<Theme>,
    pub view_mode: ViewMode,
}

impl Preferences {
    pub fn load<S: KeyValueStore>(store: &S) -> Result<Self> {
        let theme = store
            .get(THEME_KEY)
            .context("reading theme preference")?
            .and_then(|raw| parse_slot::<Theme>(THEME_KEY, &raw));
        let view_mode = store
            .get(VIEW_MODE_KEY)
            .context("reading view preference")?
            .and_then(|raw| parse_slot::<ViewMode>(VIEW_MODE_KEY, &raw))
            .unwrap_or_default();
        Ok(Self { theme, view_mode })
    }

    pub fn set_theme<S: KeyValueStore>(&mut self, store: &S, theme: Theme) -> Result<()> {
        store
            .set(THEME_KEY, theme.as_ref())
            .context("saving theme preference")?;
        self.theme = Some(theme);
        Ok(())
    }

    pub fn set_view_mode<S: KeyValueStore>(&mut self, store: &S, mode: ViewMode) -> Result<()> {
        store
            .set(VIEW_MODE_KEY, mode.as_ref())
            .context("saving view preference")?;
        self.view_mode = mode;
        Ok(())
    }
}

fn parse_slot<T: FromStr>(key: &str, raw: &str) -> Option<T> {
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = raw, "ignoring unrecognised preference value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn empty_store_yields_defaults() -> Result<()> {
        let store = MemoryStore::new();
        let prefs = Preferences::load(&store)?;
        assert_eq!(prefs.theme, None);
        assert_eq!(prefs.view_mode, ViewMode::List);
        Ok(())
    }

    #[test]
    fn setters_write_the_browser_compatible_values() -> Result<()> {
        let store = MemoryStore::new();
        let mut prefs = Preferences::default();
        prefs.set_theme(&store, Theme::Dark)?;
        prefs.set_view_mode(&store, ViewMode::Grid)?;

        assert_eq!(store.get("theme")?.as_deref(), Some("dark"));
        assert_eq!(store.get("viewCode")?.as_deref(), Some("grid"));
        assert_eq!(Preferences::load(&store)?, prefs);
        Ok(())
    }

    #[test]
    fn unknown_values_fall_back() -> Result<()> {
        let store = MemoryStore::new();
        store.set("theme", "sepia")?;
        store.set("viewCode", "carousel")?;
        let prefs = Preferences::load(&store)?;
        assert_eq!(prefs.theme, None);
        assert_eq!(prefs.view_mode, ViewMode::List);
        Ok(())
    }

    #[test]
    fn toggle_flips_theme() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().to_string(), "dark");
    }
}
