//! Light/dark theme flag
//!
//! Purely cosmetic and independent of all game state. The shell maps the
//! flag to a CSS class on `<body>`; nothing is persisted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// CSS class the shell puts on the document body
    pub fn css_class(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_css_class() {
        assert_eq!(Theme::Light.css_class(), "light");
        assert_eq!(Theme::Dark.css_class(), "dark");
        assert!(!Theme::Light.is_dark());
        assert!(Theme::Dark.is_dark());
    }
}
