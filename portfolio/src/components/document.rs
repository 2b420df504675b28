//! Standalone HTML document around the page, used for static snapshots

use leptos::prelude::*;

use super::PortfolioShell;
use crate::shell::Shell;
use crate::theme::DARK_MARKER_CLASS;
use crate::types::Portfolio;

/// Page description for search engines and link previews.
pub const PAGE_DESCRIPTION: &str = "Portfolio of Perumal Pothan - Game Developer and AR/VR Specialist. Unity, C#, VR/AR, and 3D Modeling expert.";

/// The complete HTML document for a snapshot of the shell.
///
/// The root carries the dark marker when the shell's theme is dark, the
/// same way the browser host marks `document.documentElement`.
#[component]
pub fn SnapshotDocument(shell: Shell, portfolio: &'static Portfolio) -> impl IntoView {
    let profile = portfolio.profile;
    let root_class = if shell.current_theme().is_dark() { DARK_MARKER_CLASS } else { "" };
    let title = format!("{} | Game & AR/VR Developer", profile.name);

    view! {
        <html lang="en" class=root_class>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <meta name="description" content=PAGE_DESCRIPTION />
                <title>{title}</title>
            </head>
            <body>
                <PortfolioShell shell=shell portfolio=portfolio />
            </body>
        </html>
    }
}
