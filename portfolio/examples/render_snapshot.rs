//! Render the portfolio to a static HTML file.
//!
//! ```text
//! cargo run -p portfolio-leptos --example render_snapshot -- [light|dark] [out.html]
//! ```

use std::sync::Arc;

use portfolio::content::PORTFOLIO;
use portfolio::types::SectionId;
use portfolio::{MemoryHost, Shell, Theme, render_snapshot};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let theme: Theme = args.next().as_deref().unwrap_or("dark").parse()?;
    let out = args.next().unwrap_or_else(|| "portfolio.html".into());

    let host = MemoryHost::new()
        .with_stored_theme(theme.as_str())
        .with_anchors(SectionId::ALL)
        .with_year(2026);
    let shell = Shell::new(Arc::new(host), Theme::default());
    shell.initialize();

    let html = render_snapshot(&shell, &PORTFOLIO);
    std::fs::write(&out, html)?;
    println!("wrote {} ({} theme)", out, theme);
    Ok(())
}
