//! About Section
//!
//! Bio paragraph and contact links.

use leptos::*;

use crate::content::{ABOUT_TEXT, CONTACT_LINKS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="min-h-[50vh] py-10 px-6 rounded-2xl mb-8 section-shell">
            <h2 class="text-3xl sm:text-4xl font-semibold mb-8 section-title">"About Me"</h2>

            <div class="flex flex-col md:flex-row items-center gap-10">
                <div class="flex-1">
                    <p class="text-base sm:text-lg leading-relaxed text-[var(--muted)]">
                        {ABOUT_TEXT}
                    </p>
                </div>

                <div class="hidden md:block w-px h-32 bg-[var(--divider)]"></div>

                <div class="flex-1 flex flex-col gap-4 text-sm sm:text-base">
                    {CONTACT_LINKS
                        .iter()
                        .map(|link| view! {
                            <a
                                href=link.href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex items-center gap-3 hover:text-[var(--accent)] \
                                       transition-colors"
                            >
                                <span>{link.glyph}</span>
                                <span class="truncate">{link.display}</span>
                            </a>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
