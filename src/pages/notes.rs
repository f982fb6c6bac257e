//! Notes Page
//!
//! Placeholder page linked from the coursework section.

use leptos::*;
use leptos_router::A;

use crate::state::theme::{palette_for, ThemeState};

#[component]
pub fn Notes() -> impl IntoView {
    let theme = use_context::<ThemeState>().expect("ThemeState not found");
    let root_style = move || {
        format!(
            "{} background-color: var(--bg); color: var(--text);",
            palette_for(theme.mode.get()).css_vars()
        )
    };

    view! {
        <div class="min-h-screen flex flex-col animate-fade-in" style=root_style>
            <header
                class="flex justify-center py-3 px-6 sm:px-8 md:px-12 lg:px-16"
                style="border-bottom: 1px solid var(--divider)"
            >
                <A
                    href="/"
                    class="text-xl sm:text-2xl font-bold text-[var(--accent)] \
                           hover:scale-110 transition-transform duration-300"
                >
                    "[AR]"
                </A>
            </header>

            <div class="flex-grow flex items-center justify-center">
                <div class="text-center">
                    <h1 class="text-4xl font-semibold text-[var(--accent)] mb-8">
                        "Work in Progress"
                    </h1>
                    <A
                        href="/"
                        class="text-[var(--muted)] hover:text-[var(--accent)] transition-colors"
                    >
                        "← Back to Portfolio"
                    </A>
                </div>
            </div>
        </div>
    }
}
