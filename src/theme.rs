//! Light/dark theme resolution, persistence, and toggling.
//!
//! The document root carries a `data-theme` marker that the stylesheet keys
//! on. The chosen value is persisted under a fixed storage key and, when
//! nothing is stored, resolved from the system color-scheme preference.
//!
//! Storage and the marker sit behind [`ThemeStore`] and [`ThemeMarker`] so
//! the controller logic runs without a browser. If the backing store fails
//! on write, the controller keeps the theme in memory for the rest of the
//! session.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::error::FxResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored or displayed value. Anything other than the two
    /// known names is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Persisted key-value slot holding the theme name.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str) -> FxResult<()>;
}

/// The attribute on the document root that the stylesheet reads.
pub trait ThemeMarker {
    fn get(&self) -> Option<String>;
    fn set(&mut self, value: &str) -> FxResult<()>;
}

/// Session-only store used when browser storage is unavailable.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    value: Option<String>,
}

impl ThemeStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, value: &str) -> FxResult<()> {
        self.value = Some(value.to_owned());
        Ok(())
    }
}

/// Pick the theme from a saved value and the system preference.
#[must_use]
pub fn resolve(saved: Option<&str>, prefers_dark: bool) -> Theme {
    if let Some(theme) = saved.and_then(Theme::parse) {
        return theme;
    }
    if prefers_dark { Theme::Dark } else { Theme::Light }
}

/// The theme a toggle click switches to, given the currently displayed marker.
///
/// Reads the marker rather than storage: only an exact `"dark"` flips to
/// light; anything else (absent, unknown) flips to dark.
#[must_use]
pub fn next_from_marker(marker: Option<&str>) -> Theme {
    if marker == Some(Theme::Dark.as_str()) { Theme::Light } else { Theme::Dark }
}

pub struct ThemeController<S: ThemeStore, M: ThemeMarker> {
    store: S,
    fallback: MemoryStore,
    degraded: bool,
    marker: M,
    prefers_dark: bool,
}

impl<S: ThemeStore, M: ThemeMarker> ThemeController<S, M> {
    /// `prefers_dark` is the system preference, sampled once at start-up.
    pub fn new(store: S, marker: M, prefers_dark: bool) -> Self {
        Self { store, fallback: MemoryStore::default(), degraded: false, marker, prefers_dark }
    }

    /// Persisted theme if present, else the system preference.
    #[must_use]
    pub fn get_theme(&self) -> Theme {
        let saved = if self.degraded { self.fallback.load() } else { self.store.load() };
        resolve(saved.as_deref(), self.prefers_dark)
    }

    /// Apply the marker and persist. A failing store switches this
    /// controller to in-memory persistence; only a marker failure is returned.
    pub fn set_theme(&mut self, theme: Theme) -> FxResult<()> {
        self.marker.set(theme.as_str())?;
        if !self.degraded {
            if let Err(err) = self.store.save(theme.as_str()) {
                log::warn!("theme storage unavailable, keeping theme in memory: {err}");
                self.degraded = true;
            }
        }
        if self.degraded {
            self.fallback.save(theme.as_str())?;
        }
        log::debug!("theme set to {}", theme.as_str());
        Ok(())
    }

    /// Apply the resolved theme; run once at page load.
    pub fn init(&mut self) -> FxResult<Theme> {
        let theme = self.get_theme();
        self.set_theme(theme)?;
        Ok(theme)
    }

    /// Flip based on the displayed marker and return the new theme.
    pub fn toggle(&mut self) -> FxResult<Theme> {
        let next = next_from_marker(self.marker.get().as_deref());
        self.set_theme(next)?;
        Ok(next)
    }

    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }
}
