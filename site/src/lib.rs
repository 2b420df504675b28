//! Portfolio site, Leptos 0.8 CSR edition.
//!
//! Startup order:
//! 1. mount the page (renders nothing yet)
//! 2. next macrotask: initialize the shell, which resolves and applies the
//!    stored theme and opens the render gate
//! 3. next frame: observe every `data-reveal` element

pub mod browser;
pub mod reveal;
pub mod telemetry;

use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::*;
use portfolio::components::PortfolioShell;
use portfolio::{Shell, SiteConfig};
use tracing::{info, warn};

pub use browser::BrowserHost;

/// Settings embedded at compile time.
pub const SITE_TOML: &str = include_str!("../site.toml");

/// Parse and validate the embedded settings.
pub fn load_config() -> portfolio::Result<SiteConfig> {
    SiteConfig::from_toml_str(SITE_TOML)
}

/// Boot the page in the current window.
pub fn start() {
    let config = load_config();
    let log_level = config
        .as_ref()
        .map(|config| config.log_level.clone())
        .unwrap_or_else(|_| SiteConfig::default().log_level);
    telemetry::init(&log_level);

    let config = config.unwrap_or_else(|err| {
        warn!(error = %err, "site.toml rejected, using defaults");
        SiteConfig::default()
    });

    info!(version = env!("CARGO_PKG_VERSION"), "portfolio starting");

    let host = Arc::new(BrowserHost::new(config.theme.storage_key.clone()));
    let shell = Shell::new(host, config.theme.default);

    let page_shell = shell.clone();
    leptos::mount::mount_to_body(move || view! { <PortfolioShell shell=page_shell /> });

    let reveal_config = config.reveal;
    set_timeout(
        move || {
            shell.initialize();
            request_animation_frame(move || {
                reveal::attach(&reveal_config);
            });
        },
        Duration::ZERO,
    );
}
