//! Contact call-to-action

use leptos::prelude::*;

use super::{ICON_ENVELOPE, ICON_PHONE, Icon, Reveal};
use crate::reveal::RevealKind;
use crate::types::{ContactInfo, SectionId};

#[component]
pub fn Contact(contact: ContactInfo) -> impl IntoView {
    view! {
        <section id={SectionId::Contact.anchor()} class="section section-alt">
            <div class="container contact-inner">
                <Reveal name="contact" kind=RevealKind::ScaleIn>
                    <h2 class="section-title">"Ready to create something immersive?"</h2>
                    <p class="section-lead">
                        "I am currently open to freelance projects and full-time opportunities in game development and AR/VR. Let's discuss how we can bring your ideas to life."
                    </p>

                    <div class="contact-links">
                        <a class="btn btn-primary" href=contact.mailto()>
                            <Icon path=ICON_ENVELOPE />
                            {contact.email}
                        </a>
                        <a class="btn btn-secondary" href=contact.tel()>
                            <Icon path=ICON_PHONE />
                            {contact.phone_display}
                        </a>
                    </div>

                    <div class="social-links">
                        {contact.socials.iter().map(|social| view! {
                            <a
                                class="social-link"
                                href=social.url
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=social.label
                                title=social.label
                            >
                                <Icon path=social.icon size="24" />
                            </a>
                        }).collect::<Vec<_>>()}
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
    fn direct_links_use_schemes() {
        let html = view! { <Contact contact=PORTFOLIO.contact /> }.to_html();

        assert!(html.contains("id=\"contact\""));
        assert!(html.contains("href=\"mailto:pepoperumal262@gmail.com\""));
        assert!(html.contains("href=\"tel:+919390203414\""));
        assert!(html.contains("+91 9390203414"));
    }

    #[test]
    fn social_links_open_safely() {
        let html = view! { <Contact contact=PORTFOLIO.contact /> }.to_html();

        assert_eq!(html.matches("class=\"social-link\"").count(), PORTFOLIO.contact.socials.len());
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
        assert!(html.contains("aria-label=\"LinkedIn\""));
    }
}
