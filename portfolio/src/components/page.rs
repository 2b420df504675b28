//! Page root: the startup gate and the assembled sections

use leptos::prelude::*;

use super::{About, Contact, Footer, Hero, Nav, Projects, Skills, Videos};
use crate::content::PORTFOLIO;
use crate::shell::Shell;
use crate::styles::PORTFOLIO_CSS;
use crate::types::{Portfolio, SectionId};

/// Renders nothing until the shell is initialized, then the whole page.
///
/// Keeping the first paint empty avoids a flash of the wrong theme before
/// the stored preference is applied.
#[component]
pub fn PortfolioShell(
    shell: Shell,
    #[prop(default = &PORTFOLIO)] portfolio: &'static Portfolio,
) -> impl IntoView {
    move || {
        shell
            .is_initialized()
            .then(|| view! { <PortfolioPage shell=shell.clone() portfolio=portfolio /> })
    }
}

/// Navigation, sections and footer, wired to the shell operations.
#[component]
pub fn PortfolioPage(shell: Shell, portfolio: &'static Portfolio) -> impl IntoView {
    let nav_shell = shell.clone();
    let on_navigate = Callback::new(move |section: SectionId| {
        nav_shell.navigate(section);
    });
    let theme_shell = shell.clone();
    let on_toggle_theme = Callback::new(move |_: ()| {
        theme_shell.toggle_theme();
    });

    let profile = portfolio.profile;
    let contact = portfolio.contact;
    let has_videos = !portfolio.videos.is_empty();

    view! {
        <style>{PORTFOLIO_CSS}</style>
        <Nav
            brand=profile.brand
            sections=portfolio.nav_sections()
            theme=shell.theme()
            active=shell.active_section()
            on_navigate=on_navigate
            on_toggle_theme=on_toggle_theme
        />
        <main>
            <Hero profile=profile on_navigate=on_navigate />
            <About profile=profile />
            <Skills skills=portfolio.skills />
            <Projects projects=portfolio.projects />
            {has_videos.then(|| view! {
                <Videos videos=portfolio.videos channel_url=contact.channel_url />
            })}
            <Contact contact=contact />
        </main>
        <Footer name=profile.name year=shell.year() credit=contact.credit />
    }
}
