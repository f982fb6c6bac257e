//! Footer and Back-to-Top
//!
//! Copyright line with contact links, plus the floating button that appears
//! once the page has been scrolled.

use chrono::Datelike;
use leptos::*;

use crate::content::{CONTACT_LINKS, OWNER_NAME};

use super::nav::scroll_to_top;

/// Window scroll depth past which the back-to-top button shows.
const SCROLL_THRESHOLD_PX: f64 = 400.0;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer
            class="flex flex-col sm:flex-row justify-between items-center gap-3 \
                   text-[var(--muted)] text-sm py-6 px-8 lg:px-16 border-t w-full mt-auto"
            style="border-color: var(--divider); background-color: var(--bg)"
        >
            <div class="text-base">
                {format!("© {year} {OWNER_NAME}. All rights reserved.")}
            </div>
            <div class="flex gap-4 text-xl">
                {CONTACT_LINKS
                    .iter()
                    .map(|link| view! {
                        <a
                            href=link.href
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label=link.name
                            class="hover:text-[var(--accent)] transition-colors"
                        >
                            {link.glyph}
                        </a>
                    })
                    .collect_view()}
            </div>
        </footer>
    }
}

/// Floating button that smooth-scrolls back to the top. Listens on window
/// scroll; the listener is dropped with the component's scope.
#[component]
pub fn BackToTop() -> impl IntoView {
    let (visible, set_visible) = create_signal(false);

    window_event_listener(ev::scroll, move |_| {
        let scrolled = web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        set_visible.set(scrolled > SCROLL_THRESHOLD_PX);
    });

    view! {
        {move || {
            visible.get().then(|| view! {
                <button
                    class="fixed bottom-4 right-8 p-3 rounded-full bg-[var(--accent)] \
                           text-white shadow-lg z-50 text-xl leading-none animate-fade-in"
                    on:click=move |_| scroll_to_top()
                    aria-label="Back to top"
                >
                    "↑"
                </button>
            })
        }}
    }
}
