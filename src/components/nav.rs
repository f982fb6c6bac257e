//! Navigation Component
//!
//! Header with section links, the theme toggle, and the full-screen mobile
//! menu overlay.

use leptos::*;

use crate::state::theme::{ThemeMode, ThemeState};

/// In-page sections, in header order. The first four sit left of the logo,
/// the rest to its right.
const SECTIONS: &[(&str, &str)] = &[
    ("about", "About Me"),
    ("projects", "Projects"),
    ("experience", "Experience"),
    ("skills", "Skills"),
    ("current-projects", "In Progress"),
    ("coursework", "Coursework"),
    ("passions", "Passions"),
];

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);

    view! {
        <header
            class="relative flex justify-between items-center gap-4 py-4 w-full z-30"
            style="background-color: var(--bg)"
        >
            // Hamburger, only below the desktop breakpoint
            <button
                class="lg:hidden z-50 p-1.5 ml-4 text-xl hover:text-[var(--accent)] transition-colors"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
                aria-label=move || if menu_open.get() { "Close menu" } else { "Open menu" }
            >
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>

            <div class="hidden lg:flex gap-6 text-lg font-semibold pl-16">
                {SECTIONS[..4]
                    .iter()
                    .map(|&(id, label)| view! { <SectionLink id=id label=label /> })
                    .collect_view()}
            </div>

            // Centered logo, scrolls back to the top
            <a
                class="absolute left-1/2 -translate-x-1/2 text-2xl font-bold text-[#68A1B1] \
                       hover:scale-110 transition-transform duration-300 cursor-pointer z-50"
                href="#top"
                on:click=move |ev| {
                    ev.prevent_default();
                    scroll_to_top();
                }
                aria-label="Go to top"
            >
                "[AR]"
            </a>

            <div class="hidden lg:flex items-center gap-6 text-lg font-semibold pr-16">
                {SECTIONS[4..]
                    .iter()
                    .map(|&(id, label)| view! { <SectionLink id=id label=label /> })
                    .collect_view()}
                <ThemeToggle />
            </div>

            <div class="lg:hidden flex items-center mr-4 z-50">
                <ThemeToggle />
            </div>

            // Full-screen menu overlay; any link closes it
            {move || {
                menu_open.get().then(|| view! {
                    <div
                        class="fixed inset-0 z-40 flex items-center justify-center lg:hidden"
                        style="background-color: var(--bg)"
                    >
                        <div class="flex flex-col items-center gap-6 text-xl">
                            {SECTIONS
                                .iter()
                                .map(|&(id, label)| {
                                    view! {
                                        <a
                                            href=format!("#{id}")
                                            class="hover:text-[var(--link-hover)] transition-all \
                                                   duration-300 hover:scale-105"
                                            on:click=move |ev| {
                                                ev.prevent_default();
                                                set_menu_open.set(false);
                                                scroll_to_section(id);
                                            }
                                        >
                                            {label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                })
            }}
        </header>
    }
}

/// Desktop header link that smooth-scrolls to its section.
#[component]
fn SectionLink(id: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a
            href=format!("#{id}")
            class="hover:text-[var(--link-hover)] transition-all duration-300 hover:scale-105"
            on:click=move |ev| {
                ev.prevent_default();
                scroll_to_section(id);
            }
        >
            {label}
        </a>
    }
}

/// Sun/moon toggle, disabled while the reveal transition settles.
#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_context::<ThemeState>().expect("ThemeState not found");

    view! {
        <button
            class="rounded-full p-2 hover:bg-[var(--accent)] hover:text-white \
                   transition-all duration-300 hover:scale-105"
            disabled=move || theme.transitioning.get()
            on:click=move |ev| theme.toggle((f64::from(ev.client_x()), f64::from(ev.client_y())))
            aria-label=move || match theme.mode.get() {
                ThemeMode::Dark => "Switch to light mode",
                ThemeMode::Light => "Switch to dark mode",
            }
        >
            {move || match theme.mode.get() {
                ThemeMode::Dark => "☀",
                ThemeMode::Light => "☾",
            }}
        </button>
    }
}

/// Smooth-scroll to an in-page section by element id.
pub(crate) fn scroll_to_section(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(target) = document.get_element_by_id(id) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Smooth-scroll the window back to the very top.
pub(crate) fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
