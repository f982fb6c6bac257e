//! Theme Reveal Overlay
//!
//! Circular wash that sweeps out from the toggle origin while a theme
//! transition settles. Mounted only while the transition flag is set.

use leptos::*;

use crate::state::theme::{palette_for, ThemeState};

#[component]
pub fn ThemeRevealOverlay() -> impl IntoView {
    let theme = use_context::<ThemeState>().expect("ThemeState not found");

    view! {
        {move || {
            theme.transitioning.get().then(|| {
                let (x, y) = theme.toggle_origin.get();
                let wash = palette_for(theme.mode.get()).bg;
                view! {
                    <div
                        class="fixed inset-0 z-40 pointer-events-none theme-reveal"
                        style=format!(
                            "--reveal-x: {x}px; --reveal-y: {y}px; background: {wash};"
                        )
                    ></div>
                }
            })
        }}
    }
}
