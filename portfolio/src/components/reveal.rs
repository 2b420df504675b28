//! Scroll-reveal wrapper

use leptos::prelude::*;

use crate::reveal::{RevealKind, reveal_style};

/// Block that starts hidden and transitions in once it enters the viewport.
#[component]
pub fn Reveal(
    /// Unique reveal key, written to `data-reveal`
    #[prop(into)]
    name: String,
    #[prop(default = RevealKind::FadeUp)] kind: RevealKind,
    /// Transition delay, used for staggering list items
    #[prop(default = 0)]
    delay_ms: u32,
    /// Extra classes for the wrapper element
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        kind.class().to_string()
    } else {
        format!("{} {}", kind.class(), class)
    };

    view! {
        <div class=class data-reveal=name style=reveal_style(delay_ms)>
            {children()}
        </div>
    }
}
