//! Content model for the portfolio page.
//!
//! All content is static: `&'static` data compiled into the binary and
//! rendered in declaration order. Nothing here is created, updated or deleted
//! at runtime.
//!
//! # Example
//!
//! ```rust
//! use portfolio::types::{Project, SectionId};
//!
//! let project = Project {
//!     title: "Tiny Racer",
//!     category: "Arcade Prototype",
//!     description: "Top-down racer with drift physics.",
//!     image: "/img/racer.png",
//!     tags: &["Unity", "C#"],
//! };
//! assert_eq!(project.tags.len(), 2);
//! assert_eq!(SectionId::Projects.anchor(), "projects");
//! ```

use std::fmt;

/// One scrollable block of the page, addressed by in-page navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Videos,
    Contact,
}

impl SectionId {
    /// Fixed navigation order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Videos,
        SectionId::Contact,
    ];

    /// DOM id of the section element and scroll target.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Videos => "videos",
            SectionId::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Videos => "Videos",
            SectionId::Contact => "Contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<SectionId> {
        SectionId::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

/// Accent colour of a skill icon. Each accent has a dark and a light shade
/// in the stylesheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Purple,
    Blue,
    Green,
    Orange,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Purple => "accent-purple",
            Accent::Blue => "accent-blue",
            Accent::Green => "accent-green",
            Accent::Orange => "accent-orange",
        }
    }
}

/// Who the page is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    /// Full name, used in the hero and the footer
    pub name: &'static str,
    /// Short brand mark in the nav bar: `(lead, accent)` rendered as `Pp`
    pub brand: (&'static str, &'static str),
    /// Badge above the name
    pub headline: &'static str,
    /// One-sentence pitch under the name
    pub tagline: &'static str,
    /// About section body text
    pub about: &'static str,
    /// Photo shown next to the about text
    pub photo: &'static str,
}

/// A card in the skills grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    /// SVG path data for the card icon (256x256 viewBox)
    pub icon: &'static str,
    pub accent: Accent,
    pub title: &'static str,
    pub description: &'static str,
}

/// A row in the project showcase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    /// Genre line above the title
    pub category: &'static str,
    pub description: &'static str,
    /// Cover image URL
    pub image: &'static str,
    /// Technology pills, rendered in order
    pub tags: &'static [&'static str],
}

/// Embedded video player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Video {
    pub title: &'static str,
    pub description: &'static str,
    /// External video identifier (YouTube)
    pub video_id: &'static str,
}

impl Video {
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.video_id)
    }
}

/// Outbound profile link with an icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    /// Accessible name, also used as the link title
    pub label: &'static str,
    pub url: &'static str,
    /// SVG path data (256x256 viewBox)
    pub icon: &'static str,
}

/// Direct contact details and outbound links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: &'static str,
    /// Phone number as displayed
    pub phone_display: &'static str,
    /// Phone number as dialed (`+` and digits only)
    pub phone_dial: &'static str,
    /// Video channel linked from the videos header
    pub channel_url: Option<&'static str>,
    pub socials: &'static [SocialLink],
    /// Footer credit: `(label, url)`
    pub credit: Option<(&'static str, &'static str)>,
}

impl ContactInfo {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone_dial)
    }
}

/// Everything the page renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: &'static [Skill],
    pub projects: &'static [Project],
    /// Empty list drops the videos section and its nav entry
    pub videos: &'static [Video],
    pub contact: ContactInfo,
}

impl Portfolio {
    /// Sections that have content, in navigation order.
    pub fn nav_sections(&self) -> Vec<SectionId> {
        SectionId::ALL
            .into_iter()
            .filter(|s| *s != SectionId::Videos || !self.videos.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PORTFOLIO;
    use pretty_assertions::assert_eq;

    #[test]
    fn anchors_are_lowercase_labels() {
        for section in SectionId::ALL {
            assert_eq!(section.anchor(), section.label().to_lowercase());
            assert_eq!(SectionId::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(SectionId::from_anchor("blog"), None);
    }

    #[test]
    fn nav_skips_videos_without_content() {
        let without_videos = Portfolio {
            videos: &[],
            ..PORTFOLIO
        };
        assert_eq!(
            without_videos.nav_sections(),
            vec![
                SectionId::Home,
                SectionId::About,
                SectionId::Skills,
                SectionId::Projects,
                SectionId::Contact,
            ]
        );
        assert_eq!(PORTFOLIO.nav_sections(), SectionId::ALL.to_vec());
    }

    #[test]
    fn contact_links_use_protocol_schemes() {
        let contact = PORTFOLIO.contact;
        assert!(contact.mailto().starts_with("mailto:"));
        assert!(contact.tel().starts_with("tel:+"));
        assert!(!contact.tel().contains(' '));
    }

    #[test]
    fn video_embed_url_uses_identifier() {
        let video = Video {
            title: "t",
            description: "d",
            video_id: "abc123",
        };
        assert_eq!(video.embed_url(), "https://www.youtube.com/embed/abc123");
    }
}
