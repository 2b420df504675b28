//! About section: bio text and portrait

use leptos::prelude::*;

use super::Reveal;
use crate::reveal::RevealKind;
use crate::types::{Profile, SectionId};

#[component]
pub fn About(profile: Profile) -> impl IntoView {
    view! {
        <section id={SectionId::About.anchor()} class="section">
            <div class="container about-grid">
                <Reveal name="about-text" kind=RevealKind::SlideIn>
                    <h2 class="about-title">
                        <span class="about-title-bar"></span>
                        "About Me"
                    </h2>
                    <p class="about-text">{profile.about}</p>
                </Reveal>
                <Reveal name="about-photo" kind=RevealKind::ScaleIn>
                    <div class="about-photo">
                        <img class="about-photo-img" src=profile.photo alt=profile.name loading="lazy" />
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PORTFOLIO;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn bio_slides_and_photo_scales() {
        let html = view! { <About profile=PORTFOLIO.profile /> }.to_html();

        assert!(html.contains("id=\"about\""));
        assert!(html.contains("About Me"));
        assert!(html.contains("data-reveal=\"about-text\""));
        assert!(html.contains("reveal reveal-slide"));
        assert!(html.contains("data-reveal=\"about-photo\""));
        assert!(html.contains("reveal reveal-scale"));
        assert!(html.contains("src=\"/pothan-photo.jpeg\""));
    }
}
