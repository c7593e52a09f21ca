//! Light/dark theme preference and the switch state that mirrors it.
//!
//! On page load the stored preference is read once and applied to `<body>`;
//! each switch change writes the new preference back. The controller only
//! sees a [`KvStore`], so it runs the same under SSR, WASM, and tests.
//!
//! TRADE-OFFS
//! ==========
//! Only the exact value `"light"` selects the light theme. Anything else,
//! including a missing or corrupted entry, falls back to dark without
//! rewriting storage.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::storage::KvStore;

/// Storage key holding the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Persisted light/dark choice. Anything other than `"light"` reads as dark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    /// Interpret a raw stored value.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Preference implied by the switch position.
    #[must_use]
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::Light } else { Self::Dark }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Text shown next to the theme switch.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light Mode",
            Self::Dark => "Dark Mode",
        }
    }

    #[must_use]
    pub fn is_light(self) -> bool {
        self == Self::Light
    }
}

/// Theme controller state mirrored onto the switch, its label, and `<body>`.
///
/// The switch position is tracked separately from the preference because a
/// page load that resolves to dark leaves the switch at its rendered default
/// instead of forcing it off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub preference: ThemePreference,
    pub switch_checked: bool,
}

impl ThemeState {
    /// Page-ready initialization from the persisted preference.
    pub fn load(store: &impl KvStore) -> Self {
        let preference = ThemePreference::from_stored(store.get_item(THEME_STORAGE_KEY).as_deref());
        // Dark leaves the switch at its unchecked default.
        Self { preference, switch_checked: preference.is_light() }
    }

    /// Apply a user toggle of the switch and persist the result.
    pub fn toggle(&mut self, checked: bool, store: &impl KvStore) {
        self.switch_checked = checked;
        self.preference = ThemePreference::from_checked(checked);
        store.set_item(THEME_STORAGE_KEY, self.preference.as_str());
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.preference.label()
    }

    /// Whether `<body>` should carry the light theme class.
    #[must_use]
    pub fn body_is_light(&self) -> bool {
        self.preference.is_light()
    }
}
