//! # portfolio-leptos
//!
//! Single-page personal portfolio built with [Leptos](https://leptos.dev/).
//!
//! The page is one vertical scroll: hero, about, skills, projects, an
//! optional video showcase and contact, under a fixed navigation bar with a
//! persistent light/dark theme toggle.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use portfolio::{MemoryHost, Shell, Theme, content::PORTFOLIO, render_snapshot};
//!
//! let host = Arc::new(MemoryHost::new().with_stored_theme("light"));
//! let shell = Shell::new(host, Theme::Dark);
//! shell.initialize();
//!
//! let html = render_snapshot(&shell, &PORTFOLIO);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Technical Arsenal"));
//! ```
//!
//! ## Architecture
//!
//! - [`shell`] - page state (theme, active section, startup gate) and the
//!   [`DocumentHost`] seam to storage, document root and scrolling
//! - [`theme`] - the two-valued theme and preference resolution
//! - [`reveal`] - entrance schedule and one-shot scroll reveals
//! - [`components`] - Leptos UI components
//! - [`content`] - the static page content
//! - [`config`] - site configuration loaded from TOML
//! - [`styles`] - CSS constants
//!
//! The browser entry point lives in the `portfolio-site` crate; it supplies a
//! browser-backed [`DocumentHost`] and drives initialization.
//!
//! ## Leptos 0.8
//!
//! Components carry no effects of their own, so the whole page can be
//! rendered natively with `RenderHtml`:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let html: String = view! { <PortfolioShell shell=shell /> }.to_html();
//! ```

pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod host;
pub mod reveal;
pub mod shell;
pub mod styles;
pub mod theme;
pub mod types;

pub use config::SiteConfig;
pub use error::{Result, ShellError};
pub use host::MemoryHost;
pub use shell::{DocumentHost, Shell};
pub use theme::Theme;

use components::SnapshotDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::Portfolio;

/// Render the current state of `shell` as a complete HTML document.
///
/// An uninitialized shell yields a document with an empty body.
pub fn render_snapshot(shell: &Shell, portfolio: &'static Portfolio) -> String {
    let doc = view! { <SnapshotDocument shell=shell.clone() portfolio=portfolio /> };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PORTFOLIO;
    use crate::types::SectionId;
    use std::sync::Arc;

    fn shell_with(host: MemoryHost) -> Shell {
        Shell::new(Arc::new(host), Theme::Dark)
    }

    #[test]
    fn nothing_renders_before_initialize() {
        let shell = shell_with(MemoryHost::new());
        let html = render_snapshot(&shell, &PORTFOLIO);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(!html.contains("id=\"home\""));
        assert!(!html.contains("<nav"));
    }

    #[test]
    fn initialized_page_has_every_section_in_order() {
        let shell = shell_with(MemoryHost::new());
        shell.initialize();
        let html = render_snapshot(&shell, &PORTFOLIO);

        let positions: Vec<usize> = SectionId::ALL
            .iter()
            .map(|s| {
                html.find(&format!("id=\"{}\"", s.anchor()))
                    .unwrap_or_else(|| panic!("missing section {}", s.anchor()))
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("<footer"));
    }

    #[test]
    fn root_marker_follows_stored_theme() {
        let dark = shell_with(MemoryHost::new());
        dark.initialize();
        assert!(render_snapshot(&dark, &PORTFOLIO).contains("class=\"dark\""));

        let light = shell_with(MemoryHost::new().with_stored_theme("light"));
        light.initialize();
        let html = render_snapshot(&light, &PORTFOLIO);
        assert!(!html.contains("class=\"dark\""));
        assert!(html.contains("Switch to dark theme"));
    }

    #[test]
    fn videos_section_dropped_without_content() {
        let no_videos: &'static Portfolio = Box::leak(Box::new(Portfolio {
            videos: &[],
            ..PORTFOLIO
        }));
        let shell = shell_with(MemoryHost::new());
        shell.initialize();
        let html = render_snapshot(&shell, no_videos);

        assert!(!html.contains("id=\"videos\""));
        assert!(!html.contains("Scroll to Videos"));
        assert!(html.contains("id=\"contact\""));
    }

    #[test]
    fn footer_shows_host_year() {
        let shell = shell_with(MemoryHost::new().with_year(2026));
        shell.initialize();
        let html = render_snapshot(&shell, &PORTFOLIO);

        assert!(html.contains("© 2026 Perumal Pothan. All rights reserved."));
        assert!(html.contains(">Webcros<"));
    }

    #[test]
    fn page_embeds_styles_and_head() {
        let shell = shell_with(MemoryHost::new());
        shell.initialize();
        let html = render_snapshot(&shell, &PORTFOLIO);

        assert!(html.contains("<style>"));
        assert!(html.contains(".reveal.is-revealed"));
        assert!(html.contains("<title>Perumal Pothan | Game"));
        assert!(html.contains("name=\"description\""));
    }
}
