use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown theme `{0}`")]
pub struct UnknownTheme(pub String);

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☀️",
            Self::Dark => "🌙",
        }
    }

    fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Key-value store holding the persisted preference. Read and write failures
/// are reported as `None` / ignored.
pub trait ThemeStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// Receives the resolved theme as the document-wide marker.
pub trait ThemeTarget {
    fn apply(&self, theme: Theme);
}

/// How a user-initiated theme change reaches the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeSwitch {
    Immediate,
    ViewTransition,
}

impl ThemeSwitch {
    pub fn choose(reduced_motion: bool, transitions_supported: bool) -> Self {
        if transitions_supported && !reduced_motion {
            Self::ViewTransition
        } else {
            Self::Immediate
        }
    }
}

pub fn read_stored_theme(storage: &impl ThemeStorage) -> Option<Theme> {
    storage.read(THEME_KEY)?.parse().ok()
}

pub fn persist_theme(storage: &impl ThemeStorage, theme: Theme) {
    storage.write(THEME_KEY, theme.as_str());
}

/// Resolves the startup theme, applies it to `target` and writes it back to
/// `storage` unless the stored value already matches.
pub fn initialize_theme(
    storage: &impl ThemeStorage,
    prefers_dark: bool,
    target: &impl ThemeTarget,
) -> Theme {
    let stored = read_stored_theme(storage);
    let theme = stored.unwrap_or_else(|| Theme::from_system(prefers_dark));

    target.apply(theme);
    if stored != Some(theme) {
        persist_theme(storage, theme);
    }

    tracing::debug!(
        theme = theme.as_str(),
        from_storage = stored.is_some(),
        "theme initialized"
    );
    theme
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage {
        values: RefCell<HashMap<String, String>>,
        writes: Cell<usize>,
    }

    impl MemoryStorage {
        fn with(key: &str, value: &str) -> Self {
            let storage = Self::default();
            storage
                .values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            storage
        }

        fn stored(&self) -> Option<String> {
            self.values.borrow().get(THEME_KEY).cloned()
        }
    }

    impl ThemeStorage for MemoryStorage {
        fn read(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) {
            self.writes.set(self.writes.get() + 1);
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
    }

    #[derive(Default)]
    struct RecordingTarget {
        applied: RefCell<Vec<Theme>>,
    }

    impl ThemeTarget for RecordingTarget {
        fn apply(&self, theme: Theme) {
            self.applied.borrow_mut().push(theme);
        }
    }

    #[test]
    fn absent_value_follows_dark_system_preference_and_persists_it() {
        let storage = MemoryStorage::default();
        let target = RecordingTarget::default();

        let theme = initialize_theme(&storage, true, &target);

        assert_eq!(theme, Theme::Dark);
        assert_eq!(storage.stored().as_deref(), Some("dark"));
        assert_eq!(*target.applied.borrow(), vec![Theme::Dark]);
    }

    #[test]
    fn absent_value_without_dark_signal_resolves_light() {
        let storage = MemoryStorage::default();
        let theme = initialize_theme(&storage, false, &RecordingTarget::default());

        assert_eq!(theme, Theme::Light);
        assert_eq!(storage.stored().as_deref(), Some("light"));
    }

    #[test]
    fn stored_light_wins_over_dark_system_preference() {
        let storage = MemoryStorage::with(THEME_KEY, "light");
        let target = RecordingTarget::default();

        let theme = initialize_theme(&storage, true, &target);

        assert_eq!(theme, Theme::Light);
        assert_eq!(storage.stored().as_deref(), Some("light"));
        assert_eq!(*target.applied.borrow(), vec![Theme::Light]);
    }

    #[test]
    fn rerunning_with_resolved_value_does_not_write_again() {
        let storage = MemoryStorage::default();
        let target = RecordingTarget::default();

        initialize_theme(&storage, true, &target);
        initialize_theme(&storage, false, &target);

        assert_eq!(storage.writes.get(), 1);
        assert_eq!(storage.stored().as_deref(), Some("dark"));
    }

    #[test]
    fn unrecognized_stored_value_is_treated_as_absent() {
        let storage = MemoryStorage::with(THEME_KEY, "sepia");

        let theme = initialize_theme(&storage, true, &RecordingTarget::default());

        assert_eq!(theme, Theme::Dark);
        assert_eq!(storage.stored().as_deref(), Some("dark"));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(
            "blue".parse::<Theme>(),
            Err(UnknownTheme("blue".to_string()))
        );
    }

    #[test]
    fn toggle_label_names_the_next_theme() {
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn view_transition_needs_support_and_motion() {
        assert_eq!(ThemeSwitch::choose(false, true), ThemeSwitch::ViewTransition);
        assert_eq!(ThemeSwitch::choose(true, true), ThemeSwitch::Immediate);
        assert_eq!(ThemeSwitch::choose(false, false), ThemeSwitch::Immediate);
    }
}
