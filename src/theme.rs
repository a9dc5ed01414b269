use crate::config;
use crate::dom;

pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
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

    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// A stored preference always beats the system setting.
pub fn initial_theme(saved: Option<Theme>, system_prefers_dark: bool) -> Theme {
    saved.unwrap_or_else(|| Theme::from_system(system_prefers_dark))
}

/// Live system changes only apply until the user picks a theme.
pub fn follows_system(saved: Option<Theme>) -> bool {
    saved.is_none()
}

pub fn load_saved() -> Option<Theme> {
    let storage = dom::local_storage()?;
    let value = storage.get_item(config::THEME_STORAGE_KEY).ok().flatten()?;
    let theme = Theme::parse(&value);
    if theme.is_none() {
        log::warn!("Ignoring unknown stored theme {:?}", value);
    }
    theme
}

pub fn save(theme: Theme) {
    match dom::local_storage() {
        Some(storage) => {
            if storage.set_item(config::THEME_STORAGE_KEY, theme.as_str()).is_err() {
                log::warn!("Failed to persist theme preference");
            }
        }
        None => log::warn!("localStorage unavailable, theme kept for this session only"),
    }
}

pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub fn apply(theme: Theme) {
    dom::set_body_class(DARK_MODE_CLASS, theme.is_dark());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_values() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("Dark"), None);
        assert_eq!(Theme::parse(""), None);
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
    }

    #[test]
    fn saved_preference_overrides_system() {
        assert_eq!(initial_theme(Some(Theme::Light), true), Theme::Light);
        assert_eq!(initial_theme(Some(Theme::Dark), false), Theme::Dark);
    }

    #[test]
    fn falls_back_to_system_preference() {
        assert_eq!(initial_theme(None, true), Theme::Dark);
        assert_eq!(initial_theme(None, false), Theme::Light);
    }

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn system_changes_stop_applying_after_explicit_choice() {
        assert!(follows_system(None));
        assert!(!follows_system(Some(Theme::Light)));
    }
}
