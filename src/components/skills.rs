//! Skills Section

use leptos::*;

use crate::content::SKILLS;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="min-h-[50vh] py-10 px-6 rounded-2xl mb-8 section-shell">
            <h2 class="text-4xl font-semibold mb-10 section-title">"Skills"</h2>

            <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-5 gap-4">
                {SKILLS
                    .iter()
                    .map(|skill| view! {
                        <div
                            class="bg-[var(--secondary)] rounded-lg p-4 text-center \
                                   border border-[var(--divider)] hover:bg-[var(--card-hover)] \
                                   hover:scale-[1.03] transition-all duration-200"
                        >
                            <div class="text-3xl mb-2">{skill.glyph}</div>
                            <h3 class="font-semibold">{skill.name}</h3>
                            <p class="text-xs text-[var(--muted)] mt-1">{skill.description}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
