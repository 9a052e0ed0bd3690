//! Light/dark theme controller.
//!
//! Two states, dark by default. Init reads the persisted preference from the
//! injected store; toggling flips the state, persists the new value, and
//! updates the derived marker-class and toggle-label state the UI binds to.

pub mod store;

pub use store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};

use anyhow::Result;

/// Storage key for the persisted preference.
pub const THEME_KEY: &str = "theme";

/// Class applied to the page body while the light theme is active.
pub const LIGHT_MARKER_CLASS: &str = "light-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// `"light"` selects the light theme; anything else (including no stored
    /// value at all) is dark.
    fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Label for the toggle control; always prompts the opposite switch.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "🌙 Dark",
            Theme::Dark => "🌞 Light",
        }
    }

    fn inverted(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub struct ThemeController<S: PreferenceStore> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Reads the persisted preference and enters the matching state.
    pub fn init(store: S) -> Self {
        let current = Theme::from_stored(store.get(THEME_KEY).as_deref());
        Self { store, current }
    }

    pub fn theme(&self) -> Theme {
        self.current
    }

    /// The marker class the UI should carry, if any.
    pub fn marker_class(&self) -> Option<&'static str> {
        (self.current == Theme::Light).then_some(LIGHT_MARKER_CLASS)
    }

    pub fn toggle_label(&self) -> &'static str {
        self.current.toggle_label()
    }

    /// Flips the theme and persists the new value under [`THEME_KEY`].
    /// The state only changes once the write has succeeded.
    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.current.inverted();
        self.store.set(THEME_KEY, next.as_str())?;
        self.current = next;
        Ok(next)
    }
}
