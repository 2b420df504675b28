//! Leptos UI components for the portfolio page.
//!
//! # Component Hierarchy
//!
//! ```text
//! PortfolioShell (renders nothing until the shell is initialized)
//! └── PortfolioPage
//!     ├── Nav
//!     │   └── ThemeToggle
//!     ├── Hero
//!     ├── About
//!     ├── Skills
//!     ├── Projects
//!     │   └── TagList
//!     ├── Videos (only with video content)
//!     ├── Contact
//!     └── Footer
//! ```
//!
//! Section blocks are wrapped in [`Reveal`], which only emits markup
//! (`data-reveal`, reveal classes, delay style). Observing the viewport is
//! the entry point's job.
//!
//! # Usage
//!
//! Components are typically used via [`PortfolioShell`], but sections can
//! be rendered on their own:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use portfolio::components::Skills;
//! use portfolio::content::PORTFOLIO;
//!
//! view! { <Skills skills=PORTFOLIO.skills /> }
//! ```

mod about;
mod contact;
mod document;
mod footer;
mod hero;
mod icons;
mod nav;
mod page;
mod projects;
mod reveal;
mod skills;
mod videos;

pub use about::About;
pub use contact::Contact;
pub use document::{PAGE_DESCRIPTION, SnapshotDocument};
pub use footer::Footer;
pub use hero::Hero;
pub use icons::*;
pub use nav::Nav;
pub use page::{PortfolioPage, PortfolioShell};
pub use projects::{Projects, TagList};
pub use reveal::Reveal;
pub use skills::Skills;
pub use videos::{VIDEO_PERMISSIONS, Videos};
