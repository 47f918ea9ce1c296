//! Display theme preference.

use pantry_cache::{Cache, KvStore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};

use crate::settings::ThemeSettings;
use crate::CommerceError;

/// Colour scheme of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon on the toggle button, showing the theme it switches to.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Dark => "\u{2600}\u{fe0f}",
            Theme::Light => "\u{1f319}",
        }
    }

    /// Label on the mobile menu toggle.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Dark => "Light Mode",
            Theme::Light => "Dark Mode",
        }
    }
}

impl FromStr for Theme {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(CommerceError::UnknownTheme(s.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme preference persisted as a plain string, independent of the cart.
#[derive(Debug)]
pub struct ThemeStore<S> {
    cache: Cache<S>,
    settings: ThemeSettings,
}

impl<S: KvStore> ThemeStore<S> {
    pub fn open(store: S, settings: ThemeSettings) -> Self {
        Self {
            cache: Cache::new(store),
            settings,
        }
    }

    /// Stored theme, or the default when absent or unrecognised.
    pub fn current(&self) -> Theme {
        match self.cache.get_raw(&self.settings.storage_key) {
            Ok(Some(raw)) => raw.parse::<Theme>().unwrap_or_else(|_| {
                warn!(value = %raw, "ignoring unrecognised stored theme");
                self.settings.default_theme
            }),
            Ok(None) => self.settings.default_theme,
            Err(e) => {
                warn!(error = %e, "theme preference unreadable");
                self.settings.default_theme
            }
        }
    }

    pub fn set(&self, theme: Theme) -> Result<(), CommerceError> {
        self.cache
            .set_raw(&self.settings.storage_key, theme.as_str())?;
        info!(%theme, "theme changed");
        Ok(())
    }

    /// Switch to the other theme and return it.
    pub fn toggle(&self) -> Result<Theme, CommerceError> {
        let next = self.current().toggled();
        self.set(next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_cache::MemoryStore;

    #[test]
    fn test_default_is_dark() {
        let store = ThemeStore::open(MemoryStore::new(), ThemeSettings::default());
        assert_eq!(store.current(), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists() {
        let kv = MemoryStore::new();
        let store = ThemeStore::open(kv.clone(), ThemeSettings::default());

        assert_eq!(store.toggle().unwrap(), Theme::Light);
        assert_eq!(kv.get("theme").unwrap().as_deref(), Some("light"));
        assert_eq!(store.toggle().unwrap(), Theme::Dark);
    }

    #[test]
    fn test_unrecognised_value_falls_back() {
        let kv = MemoryStore::with_entries([("theme", "sepia")]);
        let store = ThemeStore::open(kv, ThemeSettings::default());
        assert_eq!(store.current(), Theme::Dark);
    }

    #[test]
    fn test_theme_labels() {
        assert_eq!(Theme::Dark.toggle_label(), "Light Mode");
        assert_eq!(Theme::Light.toggle_label(), "Dark Mode");
        assert_eq!("LIGHT".parse::<Theme>().unwrap(), Theme::Light);
        assert!("blue".parse::<Theme>().is_err());
    }
}
