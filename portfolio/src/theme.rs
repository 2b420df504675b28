//! Light/dark theme state machine.
//!
//! Two states, one transition ([`Theme::toggled`]). The persisted form is the
//! lowercase name (`"dark"` / `"light"`), which is also what the config file
//! accepts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ShellError;

/// Class put on the document root while the dark theme is active.
pub const DARK_MARKER_CLASS: &str = "dark";

/// Active visual mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark palette (the default)
    #[default]
    Dark,
    /// Light palette
    Light,
}

impl Theme {
    /// The opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Value written to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Startup resolution: a recognised stored value wins, anything else
    /// (absent, empty, garbage) falls back to `default`.
    pub fn resolve(stored: Option<&str>, default: Theme) -> Theme {
        match stored {
            Some(raw) => raw.parse::<Theme>().unwrap_or_else(|err| {
                debug!(%err, fallback = %default, "ignoring stored theme");
                default
            }),
            None => default,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(ShellError::UnknownTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_is_identity() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
    }

    #[test]
    fn missing_preference_resolves_to_default() {
        assert_eq!(Theme::resolve(None, Theme::Dark), Theme::Dark);
        assert_eq!(Theme::resolve(None, Theme::Light), Theme::Light);
    }

    #[test]
    fn stored_preference_wins_over_default() {
        assert_eq!(Theme::resolve(Some("light"), Theme::Dark), Theme::Light);
        assert_eq!(Theme::resolve(Some("dark"), Theme::Light), Theme::Dark);
    }

    #[test]
    fn unrecognised_preference_falls_back() {
        assert_eq!(Theme::resolve(Some("blue"), Theme::Dark), Theme::Dark);
        assert_eq!(Theme::resolve(Some(""), Theme::Dark), Theme::Dark);
    }

    #[test]
    fn parse_rejects_unknown_values() {
        let err = "sepia".parse::<Theme>().unwrap_err();
        assert!(matches!(err, ShellError::UnknownTheme(ref v) if v == "sepia"));
    }

    #[test]
    fn storage_form_round_trips_through_display() {
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(Theme::Dark.as_str().parse::<Theme>().unwrap(), Theme::Dark);
    }
}
