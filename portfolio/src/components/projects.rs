//! Featured projects: alternating image/text rows

use leptos::prelude::*;

use super::Reveal;
use crate::types::{Project, SectionId};

#[component]
pub fn Projects(projects: &'static [Project]) -> impl IntoView {
    view! {
        <section id={SectionId::Projects.anchor()} class="section">
            <div class="container">
                <Reveal name="projects-header">
                    <h2 class="section-title">"Featured Projects"</h2>
                </Reveal>

                <div class="project-list">
                    {projects.iter().enumerate().map(|(idx, project)| {
                        // Odd rows put the image on the right
                        let row_class = if idx % 2 == 1 { "project-row reversed" } else { "project-row" };
                        view! {
                            <Reveal name=format!("project-{}", idx) class=row_class>
                                <div class="project-media">
                                    <img src=project.image alt=project.title loading="lazy" />
                                </div>
                                <div class="project-body">
                                    <div class="project-category">{project.category}</div>
                                    <h3 class="project-title">{project.title}</h3>
                                    <p class="project-description">{project.description}</p>
                                    <TagList tags=project.tags />
                                </div>
                            </Reveal>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// Technology pills in the given order.
#[component]
pub fn TagList(tags: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="tag-list">
            {tags.iter().map(|tag| view! { <span class="tag-pill">{*tag}</span> }).collect::<Vec<_>>()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PORTFOLIO;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn rows_alternate_layout() {
        let html = view! { <Projects projects=PORTFOLIO.projects /> }.to_html();

        assert!(html.contains("id=\"projects\""));
        assert_eq!(html.matches("class=\"project-title\"").count(), PORTFOLIO.projects.len());
        assert_eq!(html.matches("project-row reversed").count(), PORTFOLIO.projects.len() / 2);
    }

    #[test]
    fn one_pill_per_tag_in_order() {
        static TAGS: &[&str] = &["Unity", "C#", "Maya"];
        let html = view! { <TagList tags=TAGS /> }.to_html();

        assert_eq!(html.matches("class=\"tag-pill\"").count(), 3);
        let unity = html.find(">Unity<").unwrap_or(usize::MAX);
        let csharp = html.find(">C#<").unwrap_or(usize::MAX);
        let maya = html.find(">Maya<").unwrap_or(usize::MAX);
        assert!(unity < csharp && csharp < maya && maya != usize::MAX);
    }

    #[test]
    fn every_project_lists_its_tags() {
        let html = view! { <Projects projects=PORTFOLIO.projects /> }.to_html();
        let total: usize = PORTFOLIO.projects.iter().map(|p| p.tags.len()).sum();
        assert_eq!(html.matches("class=\"tag-pill\"").count(), total);
    }
}
