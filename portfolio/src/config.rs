//! Static site configuration.
//!
//! The site embeds a small TOML file at compile time. Every table is
//! optional; missing keys take the defaults below.
//!
//! ```toml
//! log_level = "info"
//!
//! [theme]
//! storage_key = "theme"
//! default = "dark"
//!
//! [reveal]
//! threshold = 0.15
//! root_margin = "0px 0px -10% 0px"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShellError};
use crate::theme::Theme;

/// Top-level site settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Max tracing level forwarded to the console (`error` .. `trace`)
    pub log_level: String,
    pub theme: ThemeConfig,
    pub reveal: RevealConfig,
}

/// Theme persistence settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Client-local storage key holding `"dark"` or `"light"`
    pub storage_key: String,
    /// Theme used when nothing (valid) is stored
    pub default: Theme,
}

/// Viewport reveal settings, passed straight to the intersection observer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible fraction that counts as "in view", `0.0..=1.0`
    pub threshold: f64,
    /// CSS margin around the viewport
    pub root_margin: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            theme: ThemeConfig::default(),
            reveal: RevealConfig::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".into(),
            default: Theme::Dark,
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.15,
            root_margin: "0px 0px -10% 0px".into(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.theme.storage_key.trim().is_empty() {
            return Err(ShellError::InvalidConfig(
                "theme.storage_key must not be empty".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ShellError::InvalidConfig(format!(
                "reveal.threshold must be within 0.0..=1.0, got {}",
                self.reveal.threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(SiteConfig::from_toml_str("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            [theme]
            default = "light"
            "#,
        )
        .unwrap();

        assert_eq!(config.theme.default, Theme::Light);
        assert_eq!(config.theme.storage_key, "theme");
        assert_eq!(config.reveal, RevealConfig::default());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn rejects_empty_storage_key() {
        let err = SiteConfig::from_toml_str("[theme]\nstorage_key = \"  \"").unwrap_err();
        assert!(matches!(err, ShellError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_threshold_out_of_range() {
        let err = SiteConfig::from_toml_str("[reveal]\nthreshold = 1.5").unwrap_err();
        assert!(err.to_string().contains("reveal.threshold"));
    }

    #[test]
    fn rejects_unknown_theme_name() {
        let err = SiteConfig::from_toml_str("[theme]\ndefault = \"sepia\"").unwrap_err();
        assert!(matches!(err, ShellError::ConfigParse(_)));
    }

    #[test]
    fn embedded_site_config_is_valid() {
        let config = SiteConfig::from_toml_str(include_str!("../../site/site.toml")).unwrap();
        assert_eq!(config.theme.storage_key, "theme");
        assert_eq!(config.theme.default, Theme::Dark);
    }
}
