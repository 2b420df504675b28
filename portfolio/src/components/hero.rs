//! Full-viewport hero with entrance animations

use leptos::prelude::*;

use super::{ICON_CARET_DOWN, ICON_GAME_CONTROLLER, Icon};
use crate::reveal::{HERO_ENTRANCE_MS, SCROLL_HINT_DELAY_MS, entrance_style};
use crate::types::{Profile, SectionId};

#[component]
pub fn Hero(profile: Profile, on_navigate: Callback<SectionId>) -> impl IntoView {
    let [badge_ms, name_ms, tagline_ms, actions_ms] = HERO_ENTRANCE_MS;

    view! {
        <section id={SectionId::Home.anchor()} class="hero">
            // Only the glow matching the active theme is visible
            <div class="hero-glow hero-glow-dark" aria-hidden="true"></div>
            <div class="hero-glow hero-glow-light" aria-hidden="true"></div>

            <div class="hero-content">
                <div class="hero-badge entrance" style=entrance_style(badge_ms)>
                    {profile.headline}
                </div>
                <h1 class="hero-name entrance" style=entrance_style(name_ms)>
                    {profile.name}
                </h1>
                <p class="hero-tagline entrance" style=entrance_style(tagline_ms)>
                    {profile.tagline}
                </p>
                <div class="hero-actions entrance" style=entrance_style(actions_ms)>
                    <button
                        class="btn btn-primary"
                        on:click=move |_| on_navigate.run(SectionId::Projects)
                    >
                        <Icon path=ICON_GAME_CONTROLLER />
                        "View My Work"
                    </button>
                    <button
                        class="btn btn-secondary"
                        on:click=move |_| on_navigate.run(SectionId::Contact)
                    >
                        "Contact Me"
                    </button>
                </div>
            </div>

            <div
                class="scroll-hint entrance entrance-fade"
                style=entrance_style(SCROLL_HINT_DELAY_MS)
                aria-hidden="true"
            >
                <Icon path=ICON_CARET_DOWN size="24" />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PORTFOLIO;
    use leptos::tachys::view::RenderHtml;

    fn render() -> String {
        view! { <Hero profile=PORTFOLIO.profile on_navigate=Callback::new(|_: SectionId| {}) /> }
            .to_html()
    }

    #[test]
    fn shows_identity_and_actions() {
        let html = render();
        assert!(html.contains("id=\"home\""));
        assert!(html.contains("Perumal Pothan"));
        assert!(html.contains("Game Developer &amp; AR/VR Specialist"));
        assert!(html.contains("View My Work"));
        assert!(html.contains("Contact Me"));
    }

    #[test]
    fn entrance_delays_follow_schedule() {
        let html = render();
        let positions: Vec<usize> = HERO_ENTRANCE_MS
            .iter()
            .chain(std::iter::once(&SCROLL_HINT_DELAY_MS))
            .map(|ms| {
                html.find(&format!("--entrance-delay: {}ms", ms))
                    .unwrap_or_else(|| panic!("missing entrance delay {}ms", ms))
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn both_glows_present_for_css_switch() {
        let html = render();
        assert!(html.contains("hero-glow-dark"));
        assert!(html.contains("hero-glow-light"));
    }
}
