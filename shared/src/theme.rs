//! Light/dark theme preference.
//!
//! The preference is an explicit value rather than whatever classes happen to
//! sit on `<body>`: [`restore`] reads it, [`apply`] projects it onto a class
//! list, [`persist`] writes it back. The browser layer only supplies the two
//! adapters ([`PreferenceStore`] and [`ClassList`]).

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

/// Key under which the preference is persisted in origin-scoped storage.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Body class applied while the dark theme is active.
pub const DARK_CLASS: &str = "dark-mode";

/// Body class applied while the light theme is active.
pub const LIGHT_CLASS: &str = "light-mode";

/// The two supported themes. Anything unrecognized falls back to light.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Light theme, the default when nothing has been stored.
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl ThemePreference {
    /// Interpret a persisted value. Only the exact string `"dark"` selects the
    /// dark theme; absent or unrecognized values yield [`ThemePreference::Light`].
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Derive the preference currently shown by a class list.
    pub fn from_classes<C: ClassList + ?Sized>(classes: &C) -> Self {
        if classes.contains(DARK_CLASS) {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Value written to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether this is the dark theme.
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Class that must be present while this theme is active.
    pub fn active_class(self) -> &'static str {
        match self {
            Self::Light => LIGHT_CLASS,
            Self::Dark => DARK_CLASS,
        }
    }

    /// Class that must be absent while this theme is active.
    pub fn inactive_class(self) -> &'static str {
        self.toggled().active_class()
    }

    /// Font Awesome glyph shown on the toggle: a sun while dark (click to go
    /// light), a moon while light.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fa-moon",
            Self::Dark => "fa-sun",
        }
    }

    /// Accessible label for the toggle control.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }
}

/// Persistent key-value storage scoped to the site origin.
pub trait PreferenceStore {
    /// Read a value, `None` when missing or when storage is unavailable.
    fn load(&self, key: &str) -> Option<String>;

    /// Write a value. Failures (quota, disabled storage) are swallowed.
    fn save(&mut self, key: &str, value: &str);
}

/// A mutable set of CSS classes, typically `document.body.classList`.
pub trait ClassList {
    /// Add `class` if not already present.
    fn add(&mut self, class: &str);

    /// Remove `class` if present.
    fn remove(&mut self, class: &str);

    /// Whether `class` is present.
    fn contains(&self, class: &str) -> bool;
}

/// Read the persisted preference, defaulting to light.
pub fn restore<S: PreferenceStore + ?Sized>(store: &S) -> ThemePreference {
    ThemePreference::from_stored(store.load(THEME_STORAGE_KEY).as_deref())
}

/// Make `pref` the only theme class present on `classes`.
pub fn apply<C: ClassList + ?Sized>(pref: ThemePreference, classes: &mut C) {
    classes.remove(pref.inactive_class());
    classes.add(pref.active_class());
}

/// Write `pref` to `store`.
pub fn persist<S: PreferenceStore + ?Sized>(pref: ThemePreference, store: &mut S) {
    store.save(THEME_STORAGE_KEY, pref.as_str());
}

/// Flip whatever theme `classes` currently shows, then apply and persist the
/// result. Returns the new preference.
pub fn toggle<S, C>(store: &mut S, classes: &mut C) -> ThemePreference
where
    S: PreferenceStore + ?Sized,
    C: ClassList + ?Sized,
{
    let next = ThemePreference::from_classes(classes).toggled();
    apply(next, classes);
    persist(next, store);
    tracing::debug!(theme = next.as_str(), "theme toggled");
    next
}

/// In-memory [`PreferenceStore`], used off the browser and in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.save(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// In-memory [`ClassList`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClassList {
    classes: BTreeSet<String>,
}

impl MemoryClassList {
    /// Empty class list.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClassList for MemoryClassList {
    fn add(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    fn remove(&mut self, class: &str) {
        self.classes.remove(class);
    }

    fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_stored_only_accepts_exact_dark() {
        assert_eq!(ThemePreference::from_stored(Some("dark")), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_stored(Some("light")), ThemePreference::Light);
        assert_eq!(ThemePreference::from_stored(Some("DARK")), ThemePreference::Light);
        assert_eq!(ThemePreference::from_stored(Some("")), ThemePreference::Light);
        assert_eq!(ThemePreference::from_stored(None), ThemePreference::Light);
    }

    #[test]
    fn restore_defaults_to_light_on_empty_store() {
        assert_eq!(restore(&MemoryStore::new()), ThemePreference::Light);
        assert_eq!(
            restore(&MemoryStore::with_entry(THEME_STORAGE_KEY, "dark")),
            ThemePreference::Dark
        );
    }

    #[test]
    fn apply_replaces_the_opposite_class() {
        let mut classes = MemoryClassList::new();
        classes.add(DARK_CLASS);
        classes.add("page-home");

        apply(ThemePreference::Light, &mut classes);

        assert!(classes.contains(LIGHT_CLASS));
        assert!(!classes.contains(DARK_CLASS));
        assert!(classes.contains("page-home"));
    }

    #[test]
    fn icon_tracks_theme() {
        assert_eq!(ThemePreference::Dark.icon_class(), "fa-sun");
        assert_eq!(ThemePreference::Light.icon_class(), "fa-moon");
    }

    #[test]
    fn toggle_flips_applies_and_persists() {
        let mut store = MemoryStore::new();
        let mut classes = MemoryClassList::new();
        apply(restore(&store), &mut classes);

        let next = toggle(&mut store, &mut classes);

        assert_eq!(next, ThemePreference::Dark);
        assert!(classes.contains(DARK_CLASS));
        assert!(!classes.contains(LIGHT_CLASS));
        assert_eq!(store.load(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&ThemePreference::Dark).expect("serialize");
        assert_eq!(json, "\"dark\"");
    }
}
