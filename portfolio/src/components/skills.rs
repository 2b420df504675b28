//! Skills grid

use leptos::prelude::*;

use super::{Icon, Reveal};
use crate::reveal::{LIST_STAGGER_MS, stagger_delay_ms};
use crate::types::{SectionId, Skill};

/// One card per skill, staggered by list position.
#[component]
pub fn Skills(skills: &'static [Skill]) -> impl IntoView {
    view! {
        <section id={SectionId::Skills.anchor()} class="section section-alt">
            <div class="container">
                <Reveal name="skills-header" class="skills-header">
                    <h2 class="section-title">"Technical Arsenal"</h2>
                    <p class="section-lead">
                        "My expertise spans across game engines, programming languages, and 3D modeling tools."
                    </p>
                </Reveal>

                <div class="skills-grid">
                    {skills.iter().enumerate().map(|(idx, skill)| view! {
                        <Reveal
                            name=format!("skill-{}", idx)
                            delay_ms=stagger_delay_ms(idx, LIST_STAGGER_MS)
                            class="skill-card"
                        >
                            <div class=format!("skill-icon {}", skill.accent.class())>
                                <Icon path=skill.icon size="32" />
                            </div>
                            <h3 class="skill-title">{skill.title}</h3>
                            <p class="skill-description">{skill.description}</p>
                        </Reveal>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ICON_CODE;
    use crate::content::PORTFOLIO;
    use crate::types::Accent;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn one_card_per_skill_in_order() {
        let html = view! { <Skills skills=PORTFOLIO.skills /> }.to_html();

        assert_eq!(html.matches("class=\"skill-title\"").count(), PORTFOLIO.skills.len());
        let positions: Vec<usize> = PORTFOLIO
            .skills
            .iter()
            .filter_map(|s| html.find(&s.title.replace('&', "&amp;")))
            .collect();
        assert_eq!(positions.len(), PORTFOLIO.skills.len());
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn cards_are_staggered() {
        let html = view! { <Skills skills=PORTFOLIO.skills /> }.to_html();
        for idx in 0..PORTFOLIO.skills.len() {
            assert!(html.contains(&format!("data-reveal=\"skill-{}\"", idx)));
            let delay = stagger_delay_ms(idx, LIST_STAGGER_MS);
            assert!(html.contains(&format!("--reveal-delay: {}ms", delay)));
        }
    }

    #[test]
    fn renders_custom_list() {
        static ONE: &[Skill] = &[Skill {
            icon: ICON_CODE,
            accent: Accent::Orange,
            title: "Shaders",
            description: "HLSL and Shader Graph.",
        }];
        let html = view! { <Skills skills=ONE /> }.to_html();

        assert_eq!(html.matches("class=\"skill-title\"").count(), 1);
        assert!(html.contains("skill-icon accent-orange"));
        assert!(html.contains("Shaders"));
    }
}
