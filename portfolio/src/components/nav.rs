//! Fixed navigation bar with the theme toggle

use leptos::prelude::*;

use super::{ICON_MOON, ICON_SUN, Icon};
use crate::theme::Theme;
use crate::types::SectionId;

#[component]
pub fn Nav(
    /// Brand mark: `(lead, accent)`
    brand: (&'static str, &'static str),
    /// Sections that get a nav button, in order
    sections: Vec<SectionId>,
    #[prop(into)] theme: Signal<Theme>,
    /// Last section navigated to (highlight only)
    #[prop(into)]
    active: Signal<SectionId>,
    on_navigate: Callback<SectionId>,
    on_toggle_theme: Callback<()>,
) -> impl IntoView {
    let (lead, accent) = brand;

    view! {
        <nav class="nav">
            <div class="container nav-inner">
                <div class="nav-brand entrance entrance-fade">
                    {lead}
                    <span class="nav-brand-accent">{accent}</span>
                </div>

                <div class="nav-links">
                    {sections.into_iter().map(|section| {
                        let is_active = move || active.get() == section;
                        view! {
                            <button
                                class=move || if is_active() { "nav-link active" } else { "nav-link" }
                                aria-current=move || is_active().then_some("true")
                                aria-label=format!("Scroll to {}", section.label())
                                on:click=move |_| on_navigate.run(section)
                            >
                                {section.label()}
                            </button>
                        }
                    }).collect::<Vec<_>>()}
                    <ThemeToggle theme=theme on_toggle_theme=on_toggle_theme />
                </div>

                // Compact layout: hire button plus toggle
                <button class="nav-hire" on:click=move |_| on_navigate.run(SectionId::Contact)>
                    "HIRE ME"
                </button>
                <div class="nav-compact">
                    <ThemeToggle theme=theme on_toggle_theme=on_toggle_theme />
                </div>
            </div>
        </nav>
    }
}

/// Sun while dark, moon while light.
#[component]
fn ThemeToggle(theme: Signal<Theme>, on_toggle_theme: Callback<()>) -> impl IntoView {
    view! {
        <button
            class="theme-toggle"
            data-role="theme-toggle"
            aria-label=move || {
                if theme.get().is_dark() { "Switch to light theme" } else { "Switch to dark theme" }
            }
            on:click=move |_| on_toggle_theme.run(())
        >
            {move || {
                if theme.get().is_dark() {
                    view! { <Icon path=ICON_SUN size="18" /> }.into_any()
                } else {
                    view! { <Icon path=ICON_MOON size="18" /> }.into_any()
                }
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render(theme: Theme, active: SectionId, sections: Vec<SectionId>) -> String {
        let theme = RwSignal::new(theme);
        let active = RwSignal::new(active);
        view! {
            <Nav
                brand=("P", "p")
                sections=sections
                theme=theme
                active=active
                on_navigate=Callback::new(|_: SectionId| {})
                on_toggle_theme=Callback::new(|_: ()| {})
            />
        }
        .to_html()
    }

    #[test]
    fn one_button_per_section_in_order() {
        let html = render(Theme::Dark, SectionId::Home, SectionId::ALL.to_vec());

        let positions: Vec<usize> = SectionId::ALL
            .iter()
            .map(|s| {
                html.find(&format!("aria-label=\"Scroll to {}\"", s.label()))
                    .unwrap_or_else(|| panic!("missing nav button for {}", s.label()))
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("HIRE ME"));
    }

    #[test]
    fn toggle_label_follows_theme() {
        let dark = render(Theme::Dark, SectionId::Home, vec![]);
        assert!(dark.contains("Switch to light theme"));
        assert!(!dark.contains("Switch to dark theme"));

        let light = render(Theme::Light, SectionId::Home, vec![]);
        assert!(light.contains("Switch to dark theme"));
        assert!(light.contains(ICON_MOON));
        assert!(!light.contains(ICON_SUN));
    }

    #[test]
    fn active_section_is_marked() {
        let html = render(Theme::Dark, SectionId::Contact, SectionId::ALL.to_vec());
        assert_eq!(html.matches("aria-current=\"true\"").count(), 1);
        assert_eq!(html.matches("nav-link active").count(), 1);
    }
}
