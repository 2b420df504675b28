//! Error type shared by the shell, its hosts and the config loader.
//!
//! None of these errors reach the visitor. The shell logs them and carries on
//! with a sensible fallback (default theme, skipped scroll, default config).

use thiserror::Error;

/// Everything that can go wrong while the shell talks to its environment.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Client-local storage could not be opened or read
    #[error("theme storage unavailable: {0}")]
    StorageUnavailable(String),
    /// Writing the theme preference failed (quota, private mode, ...)
    #[error("failed to persist theme preference: {0}")]
    StorageWrite(String),
    /// No window/document, or the document rejected a class list change
    #[error("document unavailable: {0}")]
    DocumentUnavailable(String),
    /// A stored or configured theme value is neither `dark` nor `light`
    #[error("unknown theme `{0}` (expected `dark` or `light`)")]
    UnknownTheme(String),
    /// Config parsed but holds values the site cannot use
    #[error("invalid site config: {0}")]
    InvalidConfig(String),
    /// Config is not valid TOML or does not match the expected shape
    #[error("failed to parse site config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ShellError>;
