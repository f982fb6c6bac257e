//! Experience Section

use leptos::*;

use crate::content::EXPERIENCES;

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="min-h-[50vh] py-10 px-6 rounded-2xl mb-8 section-shell">
            <h2 class="text-4xl font-semibold mb-10 section-title">"Experience"</h2>

            <div class="space-y-6">
                {EXPERIENCES
                    .iter()
                    .map(|entry| view! {
                        <div
                            class="bg-[var(--secondary)] rounded-lg p-6 border \
                                   border-[var(--divider)] hover:bg-[var(--card-hover)] \
                                   transition-colors duration-300"
                        >
                            <div class="flex flex-col sm:flex-row sm:items-center \
                                        sm:justify-between gap-1 mb-2">
                                <h3 class="text-xl font-semibold">{entry.title}</h3>
                                <span class="text-sm text-[var(--muted)]">{entry.period}</span>
                            </div>
                            <p class="text-[var(--accent)] font-medium mb-2">{entry.company}</p>
                            <p class="text-sm text-[var(--muted)]">{entry.description}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
