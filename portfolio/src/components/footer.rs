//! Page footer

use leptos::prelude::*;

#[component]
pub fn Footer(
    name: &'static str,
    /// Current calendar year, once the host reported it
    #[prop(into)]
    year: Signal<Option<u32>>,
    /// `(label, url)` for the site credit line
    #[prop(default = None)]
    credit: Option<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <footer class="footer">
            <p>
                {move || match year.get() {
                    Some(year) => format!("© {} {}. All rights reserved.", year, name),
                    None => format!("© {}. All rights reserved.", name),
                }}
            </p>
            {credit.map(|(label, url)| view! {
                <p class="footer-credit">
                    "Designed & Developed by "
                    <a href=url target="_blank" rel="noopener noreferrer">{label}</a>
                </p>
            })}
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn copyright_uses_year_when_known() {
        let year = RwSignal::new(Some(2026_u32));
        let html = view! { <Footer name="Perumal Pothan" year=year /> }.to_html();
        assert!(html.contains("© 2026 Perumal Pothan. All rights reserved."));
        assert!(!html.contains("footer-credit"));
    }

    #[test]
    fn copyright_without_year() {
        let year = RwSignal::new(None::<u32>);
        let html = view! {
            <Footer name="Perumal Pothan" year=year credit=Some(("Webcros", "https://webcros.in")) />
        }
        .to_html();
        assert!(html.contains("© Perumal Pothan. All rights reserved."));
        assert!(html.contains("href=\"https://webcros.in\""));
        assert!(html.contains(">Webcros<"));
    }
}
